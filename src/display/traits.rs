//! Pluggable section renderers.

use super::schema::{DisplaySection, FormattedProspect};

pub trait SectionRenderer: Send + Sync {
    fn render_section(&self, section: &DisplaySection) -> String;

    fn render(&self, formatted: &FormattedProspect) -> String {
        formatted
            .sections
            .iter()
            .map(|section| self.render_section(section))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
