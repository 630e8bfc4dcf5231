//! One-shot HTTP submission of a job to the intake service.

use crate::config::IntakeConfig;
use crate::job::JobDescription;
use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use reqwest::{StatusCode, Url};
use std::time::Duration;
use tracing::{debug, info};

/// Failures talking to the intake service.
#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    /// The configured endpoint is not a usable URL.
    #[error("invalid intake endpoint {url:?}: {reason}")]
    InvalidEndpoint { url: String, reason: String },

    /// The HTTP client could not be set up with the configured options.
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// The job could not be encoded.
    #[error("failed to encode job: {0}")]
    Serialization(#[from] serde_json::Error),

    /// No HTTP response was received (refused, timed out, DNS failure).
    #[error("could not reach the intake service: {0}")]
    Transport(#[source] reqwest::Error),

    /// The service answered with a server error or an unexpected status.
    #[error("intake service error ({status}): {body}")]
    Server { status: StatusCode, body: String },

    /// The service refused the job as malformed or unacceptable.
    #[error("intake service rejected the job ({status}): {body}")]
    Rejected { status: StatusCode, body: String },
}

impl SubmitError {
    /// HTTP status of the response, if one was received.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Server { status, .. } | Self::Rejected { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Blocking client for the job intake endpoint.
#[derive(Debug)]
pub struct JobSubmitter {
    client: Client,
    endpoint: Url,
}

impl JobSubmitter {
    pub fn new(config: &IntakeConfig) -> Result<Self, SubmitError> {
        let endpoint =
            Url::parse(&config.url).map_err(|e| SubmitError::InvalidEndpoint {
                url: config.url.clone(),
                reason: e.to_string(),
            })?;

        let client = build_client(config.timeout())?;

        Ok(Self { client, endpoint })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// POST the job once and return the response body of a 2xx answer.
    pub fn submit(&self, job: &JobDescription) -> Result<String, SubmitError> {
        let payload = serde_json::to_string(job)?;
        debug!(endpoint = %self.endpoint, bytes = payload.len(), "Sending job");

        let response = self
            .client
            .post(self.endpoint.clone())
            .header(CONTENT_TYPE, "application/json")
            .body(payload)
            .send()
            .map_err(SubmitError::Transport)?;

        let status = response.status();
        if status.is_success() {
            let body = response.text().map_err(SubmitError::Transport)?;
            info!(job = %job.name(), %status, "Job accepted by intake service");
            return Ok(body);
        }

        let body = response.text().unwrap_or_default();
        Err(classify(status, body))
    }
}

/// Build the HTTP client. Without a timeout reqwest's default applies.
fn build_client(timeout: Option<Duration>) -> Result<Client, SubmitError> {
    let mut builder = Client::builder();
    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }
    builder.build().map_err(SubmitError::Client)
}

/// Map a non-success status onto the error taxonomy.
fn classify(status: StatusCode, body: String) -> SubmitError {
    if status.is_client_error() {
        SubmitError::Rejected { status, body }
    } else {
        SubmitError::Server { status, body }
    }
}
