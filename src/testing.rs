//! Test doubles shared by unit tests.

use crate::backend::{BackendError, BackendResult, Feedback, GeneratedEmail, ProspectBackend};
use crate::prospect::Prospect;
use chrono::Local;
use reqwest::StatusCode;
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    List,
    Generate(String),
    Feedback(Feedback),
}

/// In-memory backend recording every call it receives.
#[derive(Default)]
pub struct FakeBackend {
    pub prospects: Vec<Prospect>,
    pub fail_list: bool,
    pub calls: Mutex<Vec<Call>>,
    pub fail_generate: Mutex<bool>,
    pub fail_feedback: Mutex<bool>,
    pub generated: Mutex<u32>,
}

impl FakeBackend {
    pub fn with_prospects(prospects: Vec<Prospect>) -> Arc<Self> {
        Arc::new(Self {
            prospects,
            ..Default::default()
        })
    }

    pub fn unreachable() -> Arc<Self> {
        Arc::new(Self {
            fail_list: true,
            ..Default::default()
        })
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn feedback_calls(&self) -> usize {
        self.calls()
            .iter()
            .filter(|c| matches!(c, Call::Feedback(_)))
            .count()
    }
}

#[async_trait::async_trait]
impl ProspectBackend for FakeBackend {
    async fn list_prospects(&self) -> BackendResult<Vec<Prospect>> {
        self.calls.lock().unwrap().push(Call::List);
        if self.fail_list {
            return Err(BackendError::Transport("connection refused".into()));
        }
        Ok(self.prospects.clone())
    }

    async fn generate_email(&self, lead_id: &str) -> BackendResult<GeneratedEmail> {
        self.calls.lock().unwrap().push(Call::Generate(lead_id.to_string()));
        if *self.fail_generate.lock().unwrap() {
            return Err(BackendError::Transport("connection refused".into()));
        }
        let mut generated = self.generated.lock().unwrap();
        *generated += 1;
        Ok(GeneratedEmail {
            email_id: format!("email-{}", generated),
            lead_id: lead_id.to_string(),
            content: format!("Hello from draft {}", generated),
            received_at: Local::now(),
        })
    }

    async fn submit_feedback(&self, feedback: &Feedback) -> BackendResult<()> {
        self.calls.lock().unwrap().push(Call::Feedback(feedback.clone()));
        if *self.fail_feedback.lock().unwrap() {
            return Err(BackendError::HttpStatus {
                status: StatusCode::BAD_GATEWAY,
                body: "upstream down".into(),
            });
        }
        Ok(())
    }
}
