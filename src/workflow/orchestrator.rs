//! Drives one page load against a [`ProspectBackend`].

use super::session::SessionContext;
use super::types::PageState;
use super::{WorkflowError, WorkflowResult};
use crate::backend::{GeneratedEmail, ProspectBackend};
use crate::display::{format_prospect, ExcludeKeys, FormattedProspect};
use crate::prospect::{Prospect, ProspectIndex};
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

pub struct ProspectPage {
    backend: Arc<dyn ProspectBackend>,
    exclusions: ExcludeKeys,
    require_person_name: bool,
    prospects: Vec<Prospect>,
    index: ProspectIndex,
    state: PageState,
}

impl ProspectPage {
    /// Fetches the prospect list and builds the dropdown. A transport or
    /// HTTP failure means there is no page to show.
    #[instrument(skip_all)]
    pub async fn load(
        backend: Arc<dyn ProspectBackend>,
        exclusions: ExcludeKeys,
        require_person_name: bool,
    ) -> WorkflowResult<Self> {
        let prospects = backend.list_prospects().await?;
        let index = ProspectIndex::build(&prospects);
        let state = if index.is_empty() {
            warn!(fetched = prospects.len(), "No selectable prospects");
            PageState::NoProspects
        } else {
            info!(
                fetched = prospects.len(),
                selectable = index.len(),
                "Prospect list ready"
            );
            PageState::Listing
        };

        Ok(Self {
            backend,
            exclusions,
            require_person_name,
            prospects,
            index,
            state,
        })
    }

    /// Fresh page load: refetches the list and starts a new session.
    pub async fn reload(&mut self, session: &mut SessionContext) -> WorkflowResult<()> {
        let page = Self::load(
            Arc::clone(&self.backend),
            self.exclusions.clone(),
            self.require_person_name,
        )
        .await?;
        *self = page;
        session.reset();
        Ok(())
    }

    pub fn state(&self) -> &PageState {
        &self.state
    }

    pub fn index(&self) -> &ProspectIndex {
        &self.index
    }

    pub fn require_person_name(&self) -> bool {
        self.require_person_name
    }

    /// Resolves `id` against the already-fetched list and renders it.
    #[instrument(skip(self))]
    pub fn select(&mut self, id: &str) -> WorkflowResult<FormattedProspect> {
        match &self.state {
            PageState::NoProspects => return Err(WorkflowError::NoProspects),
            PageState::Failed(missing) => return Err(WorkflowError::ProspectNotFound(missing.clone())),
            PageState::Listing | PageState::Selected { .. } => {}
        }

        match self.prospects.iter().find(|p| p.id == id) {
            Some(prospect) => {
                debug!(name = prospect.name().unwrap_or_default(), "Prospect selected");
                let formatted = format_prospect(prospect, &self.exclusions);
                self.state = PageState::Selected { id: id.to_string() };
                Ok(formatted)
            }
            None => {
                warn!("Selected prospect is not in the fetched list");
                self.state = PageState::Failed(id.to_string());
                Err(WorkflowError::ProspectNotFound(id.to_string()))
            }
        }
    }

    pub fn selected(&self) -> Option<&Prospect> {
        match &self.state {
            PageState::Selected { id } => self.prospects.iter().find(|p| &p.id == id),
            _ => None,
        }
    }

    /// Sections for the current selection, recomputed on every call.
    pub fn formatted(&self) -> Option<FormattedProspect> {
        self.selected()
            .map(|prospect| format_prospect(prospect, &self.exclusions))
    }

    /// Asks the backend for an email for the selected prospect. On success
    /// the session's email is replaced; on failure it is left as it was.
    #[instrument(skip_all, fields(session = %session.id()))]
    pub async fn generate_email(&self, session: &mut SessionContext) -> WorkflowResult<GeneratedEmail> {
        let lead_id = match &self.state {
            PageState::Selected { id } => id.clone(),
            _ => return Err(WorkflowError::NoSelection),
        };

        let email = self.backend.generate_email(&lead_id).await?;
        info!(email_id = %email.email_id, %lead_id, "Stored generated email in session");
        session.store_email(email.clone());
        Ok(email)
    }

    /// Sends the session's feedback draft for the session's email. Rejected
    /// locally, without a request, when nothing was generated yet. The draft
    /// is cleared only when the backend accepts it.
    #[instrument(skip_all, fields(session = %session.id()))]
    pub async fn submit_feedback(&self, session: &mut SessionContext) -> WorkflowResult<()> {
        let email_id = session.email_id().ok_or(WorkflowError::GenerateFirst)?;
        if session.draft.comment.trim().is_empty() {
            return Err(WorkflowError::EmptyComment);
        }
        if self.require_person_name && session.draft.person_name().is_none() {
            return Err(WorkflowError::MissingPersonName);
        }

        let feedback = session.draft.to_feedback(email_id);
        self.backend.submit_feedback(&feedback).await?;
        info!(email_id = %feedback.email_id, "Feedback submitted");
        session.draft.clear();
        Ok(())
    }
}
