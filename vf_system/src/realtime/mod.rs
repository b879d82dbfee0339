//! Minting of ephemeral realtime voice sessions.
//!
//! The proxy forwards exactly one request per call to the upstream provider and relays the answer untouched.
use std::sync::Arc;
use reqwest::StatusCode;
use schemars::JsonSchema;
use serde::Serialize;
use serde_json::value::RawValue;
use crate::error::SessionError;
use crate::realtime::config::{RealtimeConfig, API_KEY_VARIABLE};
use crate::realtime::transport::{ReqwestTransport, UpstreamRequest, UpstreamTransport};

pub mod config;
pub mod transport;

pub type SessionProxyHandle = Arc<SessionProxy>;

/// The upstream's session object, kept as the exact bytes it was received as.
#[derive(Debug, Serialize, JsonSchema)]
#[serde(transparent)]
pub struct RealtimeSession(#[schemars(with = "serde_json::Value")] Box<RawValue>);

impl RealtimeSession {
    pub fn as_str(&self) -> &str {
        self.0.get()
    }
}

pub struct SessionProxy {
    config: RealtimeConfig,
    transport: Arc<dyn UpstreamTransport>,
}

impl SessionProxy {
    pub fn new(config: RealtimeConfig, transport: Arc<dyn UpstreamTransport>) -> Self {
        Self { config, transport }
    }

    /// Create a proxy talking to the real upstream over HTTP.
    pub fn with_reqwest(config: RealtimeConfig) -> eyre::Result<Self> {
        Ok(Self::new(config, Arc::new(ReqwestTransport::new()?)))
    }

    /// Request a new ephemeral session from the upstream.
    ///
    /// Fails immediately, without any network traffic, if no API key was configured.
    /// Every call results in its own upstream request, nothing is cached.
    #[tracing::instrument(skip(self), fields(model = %self.config.model, voice = %self.config.voice))]
    pub async fn create_session(&self) -> crate::error::Result<RealtimeSession> {
        let Some(api_key) = self.config.api_key.as_ref().filter(|key| !key.is_empty()) else {
            tracing::error!("No upstream API key configured");
            return Err(SessionError::Configuration {
                variable: API_KEY_VARIABLE.to_string(),
            });
        };

        let request = UpstreamRequest {
            url: self.config.endpoint.clone(),
            api_key: api_key.clone(),
            body: self.config.session_request(),
            timeout: self.config.timeout(),
        };

        let response = self.transport.send(request).await.inspect_err(|e| {
            tracing::error!(error = %e, "Could not reach upstream");
        })?;

        if response.status != StatusCode::OK {
            tracing::warn!(status = %response.status, "Upstream refused session request");
            return Err(SessionError::Upstream {
                status: response.status.as_u16(),
                body: response.body,
            });
        }

        let session = RawValue::from_string(response.body)?;
        tracing::debug!("Realtime session created");

        Ok(RealtimeSession(session))
    }
}
