//! Request and response bodies exchanged with the backend.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize)]
pub struct GenerateEmailRequest<'a> {
    pub lead_id: &'a str,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GenerateEmailResponse {
    #[serde(deserialize_with = "crate::prospect::deserialize_id")]
    pub email_id: String,
    #[serde(default)]
    pub email_content: String,
}

/// An email produced by the generation endpoint for one lead.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedEmail {
    pub email_id: String,
    pub lead_id: String,
    pub content: String,
    pub received_at: DateTime<Local>,
}

impl GeneratedEmail {
    pub fn from_response(lead_id: &str, response: GenerateEmailResponse) -> Self {
        Self {
            email_id: response.email_id,
            lead_id: lead_id.to_string(),
            content: response.email_content,
            received_at: Local::now(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Feedback {
    pub email_id: String,
    pub comment: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub person_name: Option<String>,
}
