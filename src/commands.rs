use crate::backend::{GeneratedEmail, ProspectBackend};
use crate::config::Config;
use crate::display::{HtmlRenderer, SectionRenderer, TerminalRenderer};
use crate::workflow::{PageState, ProspectPage, SessionContext};
use std::sync::Arc;
use tracing::error;

pub const FEEDBACK_CONFIRMATION: &str = "Feedback submitted successfully!";
pub const NO_PROSPECTS_MESSAGE: &str = "No prospects found in the database.";

/// Everything one open page holds between user actions.
pub struct AppState {
    pub page: ProspectPage,
    pub session: SessionContext,
}

impl AppState {
    pub fn has_prospects(&self) -> bool {
        *self.page.state() != PageState::NoProspects
    }
}

// Every handler reports failure as a display message: an error ends the
// action, never the page.

/* ---------- 1.  PAGE LOAD ---------- */

pub async fn open_page(
    backend: Arc<dyn ProspectBackend>,
    config: &Config,
) -> Result<AppState, String> {
    let page = ProspectPage::load(
        backend,
        config.display.exclusions.clone(),
        config.feedback.require_person_name,
    )
    .await
    .map_err(|e| report("Error fetching prospects", e))?;

    Ok(AppState {
        page,
        session: SessionContext::new(),
    })
}

pub async fn reload_page(state: &mut AppState) -> Result<String, String> {
    state
        .page
        .reload(&mut state.session)
        .await
        .map_err(|e| report("Error fetching prospects", e))?;
    Ok(format!("Reloaded {} prospects", state.page.index().len()))
}

/* ---------- 2.  SELECTION ---------- */

pub fn select_prospect(state: &mut AppState, id: &str) -> Result<String, String> {
    let formatted = state
        .page
        .select(id)
        .map_err(|e| report("Cannot show prospect", e))?;
    Ok(TerminalRenderer.render(&formatted))
}

pub fn prospect_markup(state: &AppState) -> Result<String, String> {
    state
        .page
        .formatted()
        .map(|formatted| HtmlRenderer.render(&formatted))
        .ok_or_else(|| "Select a prospect first".to_string())
}

pub fn prospect_json(state: &AppState) -> Result<String, String> {
    state
        .page
        .selected()
        .map(|prospect| prospect.to_pretty_json())
        .ok_or_else(|| "Select a prospect first".to_string())
}

/* ---------- 3.  GENERATION & FEEDBACK ---------- */

pub async fn generate_email(state: &mut AppState) -> Result<GeneratedEmail, String> {
    state
        .page
        .generate_email(&mut state.session)
        .await
        .map_err(|e| report("Error generating email", e))
}

pub fn set_feedback(state: &mut AppState, comment: &str, person_name: &str) {
    state.session.draft.comment = comment.to_string();
    state.session.draft.person_name = person_name.to_string();
}

pub async fn submit_feedback(state: &mut AppState) -> Result<String, String> {
    state
        .page
        .submit_feedback(&mut state.session)
        .await
        .map_err(|e| report("Error submitting feedback", e))?;
    Ok(FEEDBACK_CONFIRMATION.to_string())
}

fn report(context: &str, e: impl std::fmt::Display) -> String {
    error!("{}: {}", context, e);
    format!("{}: {}", context, e)
}
