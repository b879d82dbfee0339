use std::time::Duration;
use async_trait::async_trait;
use reqwest::redirect::Policy;
use reqwest::{ClientBuilder, StatusCode};
use url::Url;
use crate::realtime::config::{ApiKey, SessionRequest};

/// A single outbound call to the upstream provider.
#[derive(Debug, Clone)]
pub struct UpstreamRequest {
    pub url: Url,
    pub api_key: ApiKey,
    pub body: SessionRequest,
    pub timeout: Duration,
}

/// The raw upstream answer, no interpretation beyond the status code has been done yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpstreamResponse {
    pub status: StatusCode,
    pub body: String,
}

/// Sends the session request to the upstream, returning whatever it answered.
///
/// Non-success statuses are *not* an error at this level, only a failure to get any answer is.
#[async_trait]
pub trait UpstreamTransport: Send + Sync {
    async fn send(&self, request: UpstreamRequest) -> Result<UpstreamResponse, TransportError>;
}

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("{}", error_chain(.0))]
    Http(reqwest::Error),
    #[error("{0}")]
    Other(String),
}

impl From<reqwest::Error> for TransportError {
    fn from(value: reqwest::Error) -> Self {
        TransportError::Http(value)
    }
}

/// `reqwest` hides the actual cause (refused connection, DNS, etc.) in its source chain.
fn error_chain(error: &dyn std::error::Error) -> String {
    let mut message = error.to_string();
    let mut source = error.source();

    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }

    message
}

#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Redirects are never followed, a 3xx is relayed like any other non-success status.
    pub fn new() -> eyre::Result<Self> {
        let client = ClientBuilder::default().redirect(Policy::none()).build()?;

        Ok(Self { client })
    }
}

#[async_trait]
impl UpstreamTransport for ReqwestTransport {
    #[tracing::instrument(skip_all, fields(url = %request.url))]
    async fn send(&self, request: UpstreamRequest) -> Result<UpstreamResponse, TransportError> {
        let response = self
            .client
            .post(request.url)
            .bearer_auth(request.api_key.expose())
            .json(&request.body)
            .timeout(request.timeout)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        tracing::trace!(%status, "Upstream answered");

        Ok(UpstreamResponse { status, body })
    }
}
