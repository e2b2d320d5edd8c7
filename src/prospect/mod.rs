//! Prospect records as served by the leads backend.
//!
//! Records are schemaless documents. Only `_id`, the six profile fields and
//! `References` are interpreted; anything else is carried along untouched so
//! the raw view can show the full document.

pub mod index;

pub use index::{ProspectEntry, ProspectIndex};

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// The six profile fields a prospect document may carry, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProspectField {
    UnifiedLeadDetails,
    UnifiedCompanyDetails,
    LeadRecentPosts,
    CompanyRecentPosts,
    RecentProjectsAndWork,
    Keywords,
}

impl ProspectField {
    pub const ALL: [ProspectField; 6] = [
        ProspectField::UnifiedLeadDetails,
        ProspectField::UnifiedCompanyDetails,
        ProspectField::LeadRecentPosts,
        ProspectField::CompanyRecentPosts,
        ProspectField::RecentProjectsAndWork,
        ProspectField::Keywords,
    ];

    /// Document key as stored by the backend.
    pub fn key(&self) -> &'static str {
        match self {
            ProspectField::UnifiedLeadDetails => "UnifiedLeadDetails",
            ProspectField::UnifiedCompanyDetails => "UnifiedCompanyDetails",
            ProspectField::LeadRecentPosts => "LeadRecentPosts",
            ProspectField::CompanyRecentPosts => "CompanyRecentPosts",
            ProspectField::RecentProjectsAndWork => "RecentProjectsAndWork",
            ProspectField::Keywords => "Keywords",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.key() == key)
    }
}

/// A prospect document. The interpreted fields are read out of `raw`, which
/// keeps the document exactly as the backend sent it.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(try_from = "Value")]
pub struct Prospect {
    pub id: String,
    pub unified_lead_details: Option<Value>,
    pub unified_company_details: Option<Value>,
    pub lead_recent_posts: Option<Value>,
    pub company_recent_posts: Option<Value>,
    pub recent_projects_and_work: Option<Value>,
    pub keywords: Option<Value>,
    pub references: Vec<String>,
    raw: Value,
}

#[derive(Deserialize)]
struct Document {
    #[serde(rename = "_id", default, deserialize_with = "deserialize_id")]
    id: String,
    #[serde(rename = "UnifiedLeadDetails", default)]
    unified_lead_details: Option<Value>,
    #[serde(rename = "UnifiedCompanyDetails", default)]
    unified_company_details: Option<Value>,
    #[serde(rename = "LeadRecentPosts", default)]
    lead_recent_posts: Option<Value>,
    #[serde(rename = "CompanyRecentPosts", default)]
    company_recent_posts: Option<Value>,
    #[serde(rename = "RecentProjectsAndWork", default)]
    recent_projects_and_work: Option<Value>,
    #[serde(rename = "Keywords", default)]
    keywords: Option<Value>,
    #[serde(rename = "References", default, deserialize_with = "deserialize_references")]
    references: Vec<String>,
}

impl TryFrom<Value> for Prospect {
    type Error = serde_json::Error;

    fn try_from(raw: Value) -> Result<Self, Self::Error> {
        let doc = Document::deserialize(&raw)?;
        Ok(Self {
            id: doc.id,
            unified_lead_details: doc.unified_lead_details,
            unified_company_details: doc.unified_company_details,
            lead_recent_posts: doc.lead_recent_posts,
            company_recent_posts: doc.company_recent_posts,
            recent_projects_and_work: doc.recent_projects_and_work,
            keywords: doc.keywords,
            references: doc.references,
            raw,
        })
    }
}

impl Prospect {
    /// Value of a profile field. `null` counts as absent.
    pub fn field(&self, field: ProspectField) -> Option<&Value> {
        let value = match field {
            ProspectField::UnifiedLeadDetails => &self.unified_lead_details,
            ProspectField::UnifiedCompanyDetails => &self.unified_company_details,
            ProspectField::LeadRecentPosts => &self.lead_recent_posts,
            ProspectField::CompanyRecentPosts => &self.company_recent_posts,
            ProspectField::RecentProjectsAndWork => &self.recent_projects_and_work,
            ProspectField::Keywords => &self.keywords,
        };
        value.as_ref().filter(|v| !v.is_null())
    }

    /// `UnifiedLeadDetails.Name`, trimmed, if it is a non-empty string.
    pub fn name(&self) -> Option<&str> {
        self.field(ProspectField::UnifiedLeadDetails)
            .and_then(|details| details.get("Name"))
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|name| !name.is_empty())
    }

    pub fn is_selectable(&self) -> bool {
        !self.id.is_empty() && self.name().is_some()
    }

    /// The document as received, keys in backend order.
    pub fn to_pretty_json(&self) -> String {
        serde_json::to_string_pretty(&self.raw).unwrap_or_else(|e| format!("<unprintable record: {}>", e))
    }
}

/// Accepts a plain string id, a Mongo `{"$oid": ...}` wrapper or a number.
pub(crate) fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) => s,
        Some(Value::Object(map)) => map
            .get("$oid")
            .and_then(Value::as_str)
            .map(String::from)
            .unwrap_or_default(),
        Some(Value::Number(n)) => n.to_string(),
        _ => String::new(),
    })
}

/// `References` tolerates `null`, a bare string and non-string elements.
fn deserialize_references<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Array(items)) => items
            .into_iter()
            .filter(|item| !item.is_null())
            .map(|item| match item {
                Value::String(s) => s,
                other => other.to_string(),
            })
            .collect(),
        Some(Value::String(s)) if !s.trim().is_empty() => vec![s],
        _ => Vec::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn deserializes_full_record() {
        let prospect: Prospect = serde_json::from_value(json!({
            "_id": "abc123",
            "UnifiedLeadDetails": {"Name": "Ada Lovelace", "role": "CTO"},
            "Keywords": {"industry": ["fintech", "ml"]},
            "References": ["https://example.com"],
            "source": "linkedin"
        }))
        .unwrap();

        assert_eq!(prospect.id, "abc123");
        assert_eq!(prospect.name(), Some("Ada Lovelace"));
        assert_eq!(prospect.references, vec!["https://example.com"]);
        assert!(prospect.field(ProspectField::Keywords).is_some());
        assert!(prospect.field(ProspectField::LeadRecentPosts).is_none());
        assert!(prospect.to_pretty_json().contains("\"source\": \"linkedin\""));
    }

    #[test]
    fn raw_view_keeps_document_order_and_content() {
        let prospect: Prospect = serde_json::from_value(json!({
            "_id": "x",
            "UnifiedLeadDetails": {"Name": "Ada", "Title": "CTO", "Company": "Acme"},
            "source": "linkedin"
        }))
        .unwrap();

        let raw = prospect.to_pretty_json();
        assert!(!raw.contains("References"));
        let name = raw.find("\"Name\"").unwrap();
        let title = raw.find("\"Title\"").unwrap();
        let company = raw.find("\"Company\"").unwrap();
        assert!(name < title && title < company);
        assert!(raw.find("\"_id\"").unwrap() < raw.find("\"source\"").unwrap());
    }

    #[test]
    fn rejects_non_object_document() {
        assert!(serde_json::from_value::<Prospect>(json!("just a string")).is_err());
    }

    #[test]
    fn flattens_mongo_object_id() {
        let prospect: Prospect =
            serde_json::from_value(json!({"_id": {"$oid": "65f0c0ffee"}})).unwrap();
        assert_eq!(prospect.id, "65f0c0ffee");
    }

    #[test]
    fn missing_fields_default_to_empty() {
        let prospect: Prospect =
            serde_json::from_value(json!({"_id": "x", "References": null, "Keywords": null})).unwrap();
        assert!(prospect.references.is_empty());
        assert!(prospect.field(ProspectField::Keywords).is_none());
        assert!(prospect.name().is_none());
        assert!(!prospect.is_selectable());
    }

    #[test]
    fn blank_name_is_not_selectable() {
        let prospect: Prospect = serde_json::from_value(json!({
            "_id": "x",
            "UnifiedLeadDetails": {"Name": "   "}
        }))
        .unwrap();
        assert!(!prospect.is_selectable());
    }

    #[test]
    fn field_keys_round_trip() {
        for field in ProspectField::ALL {
            assert_eq!(ProspectField::from_key(field.key()), Some(field));
        }
        assert_eq!(ProspectField::from_key("References"), None);
    }
}
