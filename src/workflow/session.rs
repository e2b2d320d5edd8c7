//! Per-session state carried between user actions.

use crate::backend::{Feedback, GeneratedEmail};
use uuid::Uuid;

/// Feedback form contents. Kept until a submission succeeds.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeedbackDraft {
    pub comment: String,
    pub person_name: String,
}

impl FeedbackDraft {
    pub fn new(comment: impl Into<String>, person_name: impl Into<String>) -> Self {
        Self {
            comment: comment.into(),
            person_name: person_name.into(),
        }
    }

    pub fn clear(&mut self) {
        self.comment.clear();
        self.person_name.clear();
    }

    /// Trimmed reviewer name, `None` when blank.
    pub fn person_name(&self) -> Option<&str> {
        Some(self.person_name.trim()).filter(|name| !name.is_empty())
    }

    pub fn to_feedback(&self, email_id: &str) -> Feedback {
        Feedback {
            email_id: email_id.to_string(),
            comment: self.comment.trim().to_string(),
            person_name: self.person_name().map(String::from),
        }
    }
}

/// One browsing session. A fresh page load starts a new one, so the
/// generated email never outlives it.
#[derive(Debug, Clone)]
pub struct SessionContext {
    id: Uuid,
    email: Option<GeneratedEmail>,
    pub draft: FeedbackDraft,
}

impl Default for SessionContext {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionContext {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            email: None,
            draft: FeedbackDraft::default(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn email(&self) -> Option<&GeneratedEmail> {
        self.email.as_ref()
    }

    pub fn email_id(&self) -> Option<&str> {
        self.email.as_ref().map(|e| e.email_id.as_str())
    }

    /// Replaces any earlier email.
    pub(crate) fn store_email(&mut self, email: GeneratedEmail) {
        self.email = Some(email);
    }

    /// Drops everything and starts over under a new id.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}
