//! Page workflow: list → select → generate → feedback.
//!
//! A [`ProspectPage`] is one page load. It owns the fetched prospect list and
//! the current selection; everything that must survive between button
//! presses of one browsing session lives in a [`SessionContext`] that the
//! caller passes in.

pub mod orchestrator;
pub mod session;
pub mod types;

pub use orchestrator::ProspectPage;
pub use session::{FeedbackDraft, SessionContext};
pub use types::PageState;

use crate::backend::BackendError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum WorkflowError {
    #[error("Backend call failed: {0}")]
    Backend(#[from] BackendError),
    #[error("No prospects found")]
    NoProspects,
    #[error("Selected prospect not found: {0}")]
    ProspectNotFound(String),
    #[error("Select a prospect first")]
    NoSelection,
    #[error("Generate an email first - there is no email to give feedback on")]
    GenerateFirst,
    #[error("Feedback comment is empty")]
    EmptyComment,
    #[error("Reviewer name is required")]
    MissingPersonName,
}

pub type WorkflowResult<T> = Result<T, WorkflowError>;
