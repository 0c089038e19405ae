use crate::error::{SyncError, SyncResult};
use reqwest::Url;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Production webhook that accepts meta attribute updates.
pub const DEFAULT_ENDPOINT: &str = "https://n8n.sotiio.com/webhook/update_meta_attributes";

/// Configuration for [`RecordSyncClient`](crate::RecordSyncClient).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SyncConfig {
    /// URL every push is POSTed to.
    pub endpoint: String,
    /// Whole-request timeout in seconds. `None` leaves reqwest's default (no timeout).
    pub timeout_secs: Option<u64>,
    /// Sent as `Authorization: Bearer <token>` when present.
    pub bearer_token: Option<String>,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout_secs: None,
            bearer_token: None,
        }
    }
}

impl SyncConfig {
    /// Config pointing at `endpoint` with everything else defaulted.
    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            ..Default::default()
        }
    }

    /// Reads a JSON config file. Missing keys fall back to defaults.
    pub async fn from_json_file(path: impl AsRef<Path>) -> SyncResult<Self> {
        let path = path.as_ref();
        let raw = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| SyncError::Config(format!("cannot read {}: {e}", path.display())))?;
        let config: Self = serde_json::from_str(&raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that the endpoint is an http(s) URL and the timeout is usable.
    pub fn validate(&self) -> SyncResult<()> {
        self.endpoint_url()?;
        if self.timeout_secs == Some(0) {
            return Err(SyncError::Config("timeout_secs must be greater than zero".into()));
        }
        Ok(())
    }

    /// Parses the endpoint.
    pub fn endpoint_url(&self) -> SyncResult<Url> {
        let url = Url::parse(&self.endpoint)
            .map_err(|e| SyncError::Config(format!("invalid endpoint {:?}: {e}", self.endpoint)))?;
        match url.scheme() {
            "http" | "https" => Ok(url),
            other => Err(SyncError::Config(format!(
                "unsupported endpoint scheme {other:?}"
            ))),
        }
    }

    /// Request timeout, if configured.
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}
