//! Markup and terminal renderings of display sections.

use super::schema::{DisplaySection, SectionColor};
use super::traits::SectionRenderer;
use colored::{Color, Colorize};

/// HTML block per section, colored by a left border and heading.
pub struct HtmlRenderer;

impl SectionRenderer for HtmlRenderer {
    fn render_section(&self, section: &DisplaySection) -> String {
        let color = section.color.css();
        let mut html = format!(
            "<div class=\"section\" style=\"border-left: 4px solid {}; padding-left: 8px;\">\n<h4 style=\"color: {};\">{}</h4>\n",
            color,
            color,
            escape_html(section.title)
        );
        for line in &section.lines {
            html.push_str(&format!("<p>{}</p>\n", escape_html(line)));
        }
        html.push_str("</div>");
        html
    }
}

/// Colored heading followed by indented body lines.
pub struct TerminalRenderer;

impl SectionRenderer for TerminalRenderer {
    fn render_section(&self, section: &DisplaySection) -> String {
        let mut out = format!("{}\n", section.title.color(ansi_color(section.color)).bold());
        for line in &section.lines {
            out.push_str(&format!("  {}\n", line));
        }
        out
    }
}

fn ansi_color(color: SectionColor) -> Color {
    match color {
        SectionColor::Blue => Color::Blue,
        SectionColor::Green => Color::Green,
        SectionColor::Orange => Color::Yellow,
        SectionColor::Purple => Color::Magenta,
        SectionColor::Teal => Color::Cyan,
        SectionColor::Red => Color::Red,
        SectionColor::Gray => Color::BrightBlack,
    }
}

pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
