//! Client side of the leads backend.
//!
//! ```text
//! GET  /api/leads/              → [Prospect]
//! POST /api/emails/generate     {lead_id}                       → {email_id, email_content}
//! POST /api/feedbacks/create    {email_id, comment, person_name?} → 2xx
//! ```
//!
//! The page only talks to the backend through [`ProspectBackend`], so the
//! workflow can be driven by an in-memory fake in tests.

pub mod error;
pub mod http;
pub mod types;

pub use error::{BackendError, BackendResult};
pub use http::HttpBackend;
pub use types::{Feedback, GenerateEmailRequest, GenerateEmailResponse, GeneratedEmail};

use crate::prospect::Prospect;

#[async_trait::async_trait]
pub trait ProspectBackend: Send + Sync {
    async fn list_prospects(&self) -> BackendResult<Vec<Prospect>>;

    async fn generate_email(&self, lead_id: &str) -> BackendResult<GeneratedEmail>;

    async fn submit_feedback(&self, feedback: &Feedback) -> BackendResult<()>;
}
