//! Data model for rendered prospect sections.

use crate::prospect::ProspectField;

/// What a section was built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionKind {
    Field(ProspectField),
    References,
}

/// Color tag attached to a section. Renderers map it to CSS or ANSI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionColor {
    Blue,
    Green,
    Orange,
    Purple,
    Teal,
    Red,
    Gray,
}

impl SectionColor {
    pub fn css(&self) -> &'static str {
        match self {
            SectionColor::Blue => "#1f77b4",
            SectionColor::Green => "#2ca02c",
            SectionColor::Orange => "#ff7f0e",
            SectionColor::Purple => "#9467bd",
            SectionColor::Teal => "#17becf",
            SectionColor::Red => "#d62728",
            SectionColor::Gray => "#7f7f7f",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DisplaySection {
    pub kind: SectionKind,
    pub title: &'static str,
    pub color: SectionColor,
    pub lines: Vec<String>,
}

impl DisplaySection {
    /// Plain body text, one line per entry.
    pub fn body(&self) -> String {
        self.lines.join("\n")
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// All sections for one prospect, in display order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormattedProspect {
    pub sections: Vec<DisplaySection>,
}

impl FormattedProspect {
    pub fn section(&self, title: &str) -> Option<&DisplaySection> {
        self.sections.iter().find(|s| s.title == title)
    }

    pub fn section_for(&self, kind: SectionKind) -> Option<&DisplaySection> {
        self.sections.iter().find(|s| s.kind == kind)
    }
}
