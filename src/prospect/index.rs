//! Name → id lookup backing the prospect dropdown.

use super::Prospect;
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProspectEntry {
    /// Text shown in the dropdown. Equals `name` unless the name is shared.
    pub label: String,
    pub name: String,
    pub id: String,
}

#[derive(Debug, Clone, Default)]
pub struct ProspectIndex {
    entries: Vec<ProspectEntry>,
}

impl ProspectIndex {
    /// Keeps only selectable records, in backend order. Names shared by
    /// several records get the id appended so every label is distinct.
    pub fn build(prospects: &[Prospect]) -> Self {
        let mut name_counts: HashMap<&str, usize> = HashMap::new();
        for name in prospects.iter().filter(|p| p.is_selectable()).filter_map(Prospect::name) {
            *name_counts.entry(name).or_default() += 1;
        }

        let entries = prospects
            .iter()
            .filter(|p| p.is_selectable())
            .filter_map(|p| {
                let name = p.name()?;
                let label = if name_counts.get(name).copied().unwrap_or(0) > 1 {
                    format!("{} [{}]", name, p.id)
                } else {
                    name.to_string()
                };
                Some(ProspectEntry {
                    label,
                    name: name.to_string(),
                    id: p.id.clone(),
                })
            })
            .collect();

        Self { entries }
    }

    pub fn entries(&self) -> &[ProspectEntry] {
        &self.entries
    }

    pub fn labels(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.label.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn prospect(id: &str, name: Option<&str>) -> Prospect {
        let mut doc = json!({ "_id": id });
        if let Some(name) = name {
            doc["UnifiedLeadDetails"] = json!({ "Name": name });
        }
        serde_json::from_value(doc).unwrap()
    }

    #[test]
    fn skips_records_without_name() {
        let prospects = vec![
            prospect("1", Some("Ada")),
            prospect("2", None),
            prospect("3", Some("Grace")),
            prospect("4", Some("")),
            prospect("5", Some("Linus")),
        ];
        let index = ProspectIndex::build(&prospects);

        assert_eq!(index.len(), prospects.len() - 2);
        assert_eq!(index.labels(), vec!["Ada", "Grace", "Linus"]);
        assert_eq!(index.entries()[1].id, "3");
    }

    #[test]
    fn skips_records_without_id() {
        let index = ProspectIndex::build(&[prospect("", Some("Ada"))]);
        assert!(index.is_empty());
    }

    #[test]
    fn shared_names_get_distinct_labels() {
        let index = ProspectIndex::build(&[
            prospect("a1", Some("Sam")),
            prospect("b2", Some("Sam")),
            prospect("c3", Some("Alex")),
        ]);

        assert_eq!(index.labels(), vec!["Sam [a1]", "Sam [b2]", "Alex"]);
        assert_eq!(index.entries()[1].id, "b2");
        assert_eq!(index.entries()[1].name, "Sam");
    }
}
