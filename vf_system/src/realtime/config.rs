use std::fmt::{Debug, Formatter};
use std::time::Duration;
use serde::{Deserialize, Serialize};
use url::Url;

/// Environment variable the upstream credential is read from.
pub const API_KEY_VARIABLE: &str = "OPENAI_API_KEY";
pub const DEFAULT_ENDPOINT: &str = "https://api.openai.com/v1/realtime/sessions";
pub const DEFAULT_MODEL: &str = "gpt-4o-realtime-preview-2024-12-17";
pub const DEFAULT_VOICE: &str = "verse";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Deserialize, Clone, Debug)]
#[serde(default)]
pub struct RealtimeConfig {
    /// Upstream endpoint which mints the ephemeral session keys.
    pub endpoint: Url,
    pub model: String,
    pub voice: String,
    /// Upper bound on the single outbound call, in seconds.
    pub timeout_secs: u64,
    /// Secret used for bearer authentication against the upstream.
    ///
    /// Without one every session request is refused before any network traffic.
    pub api_key: Option<ApiKey>,
}

impl RealtimeConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// The fixed payload sent upstream on every session request.
    pub fn session_request(&self) -> SessionRequest {
        SessionRequest {
            model: self.model.clone(),
            voice: self.voice.clone(),
        }
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(ApiKey::new(api_key));
        self
    }
}

impl Default for RealtimeConfig {
    fn default() -> Self {
        Self {
            endpoint: Url::parse(DEFAULT_ENDPOINT).expect("Default endpoint is a valid URL"),
            model: DEFAULT_MODEL.to_string(),
            voice: DEFAULT_VOICE.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            api_key: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SessionRequest {
    pub model: String,
    pub voice: String,
}

/// An upstream API key, redacted in any debug output.
#[derive(Clone, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Debug for ApiKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str("ApiKey(<redacted>)")
    }
}
