use super::error::{BackendError, BackendResult};
use super::types::{Feedback, GenerateEmailRequest, GenerateEmailResponse, GeneratedEmail};
use super::ProspectBackend;
use crate::config::BackendConfig;
use crate::prospect::Prospect;
use reqwest::{Client, Response};
use std::time::Duration;
use tracing::{debug, info, instrument, warn};
use url::Url;

const LEADS_PATH: &str = "api/leads/";
const GENERATE_PATH: &str = "api/emails/generate";
const FEEDBACK_PATH: &str = "api/feedbacks/create";

/// `reqwest` implementation of [`ProspectBackend`]. One request per call,
/// no retries.
#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: Client,
    base_url: Url,
}

impl HttpBackend {
    pub fn new(config: &BackendConfig) -> BackendResult<Self> {
        let mut builder = Client::builder().user_agent(concat!("coldmail/", env!("CARGO_PKG_VERSION")));
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder
            .build()
            .map_err(|e| BackendError::Transport(format!("failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: with_trailing_slash(config.base_url.clone()),
        })
    }

    fn endpoint(&self, path: &str) -> BackendResult<Url> {
        self.base_url
            .join(path)
            .map_err(|e| BackendError::Transport(format!("invalid endpoint {}: {}", path, e)))
    }
}

#[async_trait::async_trait]
impl ProspectBackend for HttpBackend {
    #[instrument(skip(self))]
    async fn list_prospects(&self) -> BackendResult<Vec<Prospect>> {
        debug!(base_url = %self.base_url, "Fetching prospects");
        let response = self.client.get(self.endpoint(LEADS_PATH)?).send().await?;
        let prospects: Vec<Prospect> = ensure_success(response).await?.json().await?;
        info!(count = prospects.len(), "Fetched prospects");
        Ok(prospects)
    }

    #[instrument(skip(self))]
    async fn generate_email(&self, lead_id: &str) -> BackendResult<GeneratedEmail> {
        let response = self
            .client
            .post(self.endpoint(GENERATE_PATH)?)
            .json(&GenerateEmailRequest { lead_id })
            .send()
            .await?;
        let body: GenerateEmailResponse = ensure_success(response).await?.json().await?;

        if body.email_id.is_empty() {
            return Err(BackendError::Transport(
                "generation response carried no email_id".to_string(),
            ));
        }
        info!(email_id = %body.email_id, "Email generated");
        Ok(GeneratedEmail::from_response(lead_id, body))
    }

    #[instrument(skip_all)]
    async fn submit_feedback(&self, feedback: &Feedback) -> BackendResult<()> {
        let response = self
            .client
            .post(self.endpoint(FEEDBACK_PATH)?)
            .json(feedback)
            .send()
            .await?;
        ensure_success(response).await?;
        info!(email_id = %feedback.email_id, "Feedback stored");
        Ok(())
    }
}

async fn ensure_success(response: Response) -> BackendResult<Response> {
    let status = response.status();
    if status.is_success() {
        debug!(%status, "Backend responded");
        return Ok(response);
    }
    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "Unknown error".to_string());
    warn!(%status, "Backend rejected request");
    Err(BackendError::HttpStatus { status, body })
}

/// `Url::join` drops the last path segment unless it ends with `/`.
fn with_trailing_slash(mut url: Url) -> Url {
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url
}
