use reqwest::StatusCode;
use thiserror::Error;

/// Failures of a single backend call. Callers surface these and move on;
/// nothing is retried.
#[derive(Debug, Error)]
pub enum BackendError {
    /// Connection, DNS, timeout or an unreadable response body.
    #[error("Transport error: {0}")]
    Transport(String),
    /// Any non-2xx response.
    #[error("HTTP error {status}: {body}")]
    HttpStatus { status: StatusCode, body: String },
}

impl From<reqwest::Error> for BackendError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            BackendError::Transport("request timed out - the backend took too long to respond".to_string())
        } else if e.is_connect() {
            BackendError::Transport(format!("unable to reach the backend: {}", e))
        } else if e.is_decode() {
            BackendError::Transport(format!("unreadable response body: {}", e))
        } else {
            BackendError::Transport(format!("network error: {}", e))
        }
    }
}

pub type BackendResult<T> = Result<T, BackendError>;
