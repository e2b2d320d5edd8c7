//! Fixed titles and colors for each section.

use super::schema::{SectionColor, SectionKind};
use crate::prospect::ProspectField;

/// Literal shown when a prospect has no references.
pub const NOT_AVAILABLE: &str = "N/A";

/// Section order on the page.
pub const SECTION_ORDER: [SectionKind; 7] = [
    SectionKind::Field(ProspectField::UnifiedLeadDetails),
    SectionKind::Field(ProspectField::UnifiedCompanyDetails),
    SectionKind::Field(ProspectField::LeadRecentPosts),
    SectionKind::Field(ProspectField::CompanyRecentPosts),
    SectionKind::Field(ProspectField::RecentProjectsAndWork),
    SectionKind::Field(ProspectField::Keywords),
    SectionKind::References,
];

pub fn section_title(kind: SectionKind) -> &'static str {
    match kind {
        SectionKind::Field(ProspectField::UnifiedLeadDetails) => "Lead Details",
        SectionKind::Field(ProspectField::UnifiedCompanyDetails) => "Company Details",
        SectionKind::Field(ProspectField::LeadRecentPosts) => "Lead Recent Posts",
        SectionKind::Field(ProspectField::CompanyRecentPosts) => "Company Recent Posts",
        SectionKind::Field(ProspectField::RecentProjectsAndWork) => "Recent Projects & Work",
        SectionKind::Field(ProspectField::Keywords) => "Keywords",
        SectionKind::References => "References",
    }
}

pub fn section_color(kind: SectionKind) -> SectionColor {
    match kind {
        SectionKind::Field(ProspectField::UnifiedLeadDetails) => SectionColor::Blue,
        SectionKind::Field(ProspectField::UnifiedCompanyDetails) => SectionColor::Green,
        SectionKind::Field(ProspectField::LeadRecentPosts) => SectionColor::Orange,
        SectionKind::Field(ProspectField::CompanyRecentPosts) => SectionColor::Purple,
        SectionKind::Field(ProspectField::RecentProjectsAndWork) => SectionColor::Teal,
        SectionKind::Field(ProspectField::Keywords) => SectionColor::Red,
        SectionKind::References => SectionColor::Gray,
    }
}
