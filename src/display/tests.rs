use super::*;
use crate::prospect::{Prospect, ProspectField};
use serde_json::json;

fn prospect(doc: serde_json::Value) -> Prospect {
    serde_json::from_value(doc).unwrap()
}

#[test]
fn empty_prospect_yields_titles_and_na_references() {
    let formatted = format_prospect(&prospect(json!({"_id": "1"})), &ExcludeKeys::new());

    assert_eq!(formatted.sections.len(), 7);
    for section in &formatted.sections[..6] {
        assert!(section.is_empty(), "{} should have no lines", section.title);
    }
    let refs = formatted.section("References").unwrap();
    assert_eq!(refs.body(), "N/A");
}

#[test]
fn references_are_joined_with_commas() {
    let formatted = format_prospect(
        &prospect(json!({"_id": "1", "References": ["a", "b"]})),
        &ExcludeKeys::new(),
    );
    assert_eq!(formatted.section_for(SectionKind::References).unwrap().body(), "a, b");
}

#[test]
fn excluded_keys_are_dropped() {
    let exclusions =
        ExcludeKeys::new().exclude(ProspectField::UnifiedLeadDetails, ["past experience"]);
    let formatted = format_prospect(
        &prospect(json!({
            "_id": "1",
            "UnifiedLeadDetails": {"past experience": "X", "role": "Y"}
        })),
        &exclusions,
    );

    let lead = formatted.section("Lead Details").unwrap();
    assert_eq!(lead.lines, vec!["role: Y".to_string()]);
}

#[test]
fn exclusions_apply_per_section() {
    let exclusions = ExcludeKeys::new().exclude(ProspectField::UnifiedCompanyDetails, ["role"]);
    let formatted = format_prospect(
        &prospect(json!({"_id": "1", "UnifiedLeadDetails": {"role": "Y"}})),
        &exclusions,
    );
    assert_eq!(formatted.section("Lead Details").unwrap().lines, vec!["role: Y".to_string()]);
}

#[test]
fn mapping_values_are_flattened_one_level() {
    let formatted = format_prospect(
        &prospect(json!({
            "_id": "1",
            "UnifiedCompanyDetails": {
                "industries": ["fintech", "payments"],
                "hq": {"city": "Lisbon", "geo": {"lat": 38.7}},
                "employees": 120
            }
        })),
        &ExcludeKeys::new(),
    );

    assert_eq!(
        formatted.section("Company Details").unwrap().lines,
        vec![
            "industries: fintech, payments".to_string(),
            "hq: city: Lisbon; geo: {\"lat\":38.7}".to_string(),
            "employees: 120".to_string(),
        ]
    );
}

#[test]
fn lines_follow_document_key_order() {
    let formatted = format_prospect(
        &prospect(json!({
            "_id": "1",
            "UnifiedLeadDetails": {"Name": "Ada", "Title": "CTO", "Company": "Acme", "about": "x"}
        })),
        &ExcludeKeys::new(),
    );

    assert_eq!(
        formatted.section("Lead Details").unwrap().lines,
        vec!["Name: Ada", "Title: CTO", "Company: Acme", "about: x"]
    );
}

#[test]
fn sequences_render_one_line_per_element() {
    let formatted = format_prospect(
        &prospect(json!({"_id": "1", "LeadRecentPosts": ["first post", "second post"]})),
        &ExcludeKeys::new(),
    );
    assert_eq!(formatted.section("Lead Recent Posts").unwrap().lines.len(), 2);
}

#[test]
fn scalar_field_renders_single_line() {
    let formatted = format_prospect(
        &prospect(json!({"_id": "1", "Keywords": "saas"})),
        &ExcludeKeys::new(),
    );
    assert_eq!(formatted.section("Keywords").unwrap().body(), "saas");
}

#[test]
fn html_renderer_escapes_and_colors() {
    let formatted = format_prospect(
        &prospect(json!({"_id": "1", "Keywords": {"tag": "<b>rust</b>"}})),
        &ExcludeKeys::new(),
    );
    let html = HtmlRenderer.render_section(formatted.section("Keywords").unwrap());

    assert!(html.contains(SectionColor::Red.css()));
    assert!(html.contains("tag: &lt;b&gt;rust&lt;/b&gt;"));
    assert!(!html.contains("<b>rust"));
}

#[test]
fn terminal_renderer_lists_every_section() {
    colored::control::set_override(false);
    let formatted = format_prospect(
        &prospect(json!({"_id": "1", "References": ["r1"]})),
        &ExcludeKeys::new(),
    );
    let text = TerminalRenderer.render(&formatted);

    for title in ["Lead Details", "Keywords", "References"] {
        assert!(text.contains(title));
    }
    assert!(text.contains("  r1"));
}

#[test]
fn sections_come_in_page_order() {
    let formatted = format_prospect(
        &prospect(json!({"_id": "1", "Keywords": {"stack": ["rust", "go"]}})),
        &ExcludeKeys::new(),
    );
    let titles: Vec<_> = formatted.sections.iter().map(|s| s.title).collect();

    assert_eq!(
        titles,
        vec![
            "Lead Details",
            "Company Details",
            "Lead Recent Posts",
            "Company Recent Posts",
            "Recent Projects & Work",
            "Keywords",
            "References",
        ]
    );
    assert_eq!(formatted.sections[5].body(), "stack: rust, go");
}
