//! Converts a prospect record into display sections.
//!
//! Mappings render one `key: value` line per key, sequences one line per
//! element, scalars a single line. Values are only unpacked one level deep;
//! anything nested further is printed as compact JSON.

use super::schema::{DisplaySection, FormattedProspect, SectionKind};
use super::templates::{section_color, section_title, NOT_AVAILABLE, SECTION_ORDER};
use crate::prospect::{Prospect, ProspectField};
use serde_json::{Map, Value};
use std::collections::{HashMap, HashSet};

/// Keys to drop from each mapping-valued field before rendering.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExcludeKeys {
    by_field: HashMap<ProspectField, HashSet<String>>,
}

impl ExcludeKeys {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn exclude<I, S>(mut self, field: ProspectField, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.by_field
            .entry(field)
            .or_default()
            .extend(keys.into_iter().map(Into::into));
        self
    }

    pub fn is_excluded(&self, field: ProspectField, key: &str) -> bool {
        self.by_field
            .get(&field)
            .map_or(false, |keys| keys.contains(key))
    }

    pub fn is_empty(&self) -> bool {
        self.by_field.values().all(HashSet::is_empty)
    }
}

pub fn format_prospect(prospect: &Prospect, exclusions: &ExcludeKeys) -> FormattedProspect {
    let sections = SECTION_ORDER
        .iter()
        .map(|&kind| {
            let lines = match kind {
                SectionKind::Field(field) => field_lines(prospect.field(field), field, exclusions),
                SectionKind::References => vec![references_line(&prospect.references)],
            };
            DisplaySection {
                kind,
                title: section_title(kind),
                color: section_color(kind),
                lines,
            }
        })
        .collect();

    FormattedProspect { sections }
}

fn field_lines(value: Option<&Value>, field: ProspectField, exclusions: &ExcludeKeys) -> Vec<String> {
    match value {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Object(map)) => map
            .iter()
            .filter(|(key, _)| !exclusions.is_excluded(field, key))
            .map(|(key, value)| format!("{}: {}", key, inline_value(value)))
            .collect(),
        Some(Value::Array(items)) => items.iter().map(scalar_text).collect(),
        Some(other) => vec![scalar_text(other)],
    }
}

fn references_line(references: &[String]) -> String {
    let refs: Vec<&str> = references
        .iter()
        .map(|r| r.trim())
        .filter(|r| !r.is_empty())
        .collect();
    if refs.is_empty() {
        NOT_AVAILABLE.to_string()
    } else {
        refs.join(", ")
    }
}

/// Value of a mapping entry: lists joined by commas, nested mappings
/// flattened to `k: v` pairs.
fn inline_value(value: &Value) -> String {
    match value {
        Value::Array(items) => items.iter().map(scalar_text).collect::<Vec<_>>().join(", "),
        Value::Object(map) => flatten_map(map),
        other => scalar_text(other),
    }
}

fn flatten_map(map: &Map<String, Value>) -> String {
    map.iter()
        .map(|(key, value)| format!("{}: {}", key, scalar_text(value)))
        .collect::<Vec<_>>()
        .join("; ")
}

/// Strings verbatim, everything else as compact JSON.
fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}
