//! HTTP client for the meta webhook.

use crate::config::SyncConfig;
use crate::error::{SyncError, SyncResult};
use crate::payload::SyncPayload;
use nodemeta_model::AttributeRecord;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Response, Url};
use tracing::{debug, info, warn};

/// Pushes whole attribute records to the configured endpoint.
///
/// Each [`push`](Self::push) issues exactly one POST. There is no retry and
/// no state kept between calls, so a client can be cloned and shared freely.
#[derive(Debug, Clone)]
pub struct RecordSyncClient {
    config: SyncConfig,
    endpoint: Url,
    client: Client,
}

impl RecordSyncClient {
    /// Builds a client with its own connection pool.
    pub fn new(config: SyncConfig) -> SyncResult<Self> {
        config.validate()?;
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| SyncError::Config(format!("failed to create HTTP client: {e}")))?;
        Self::with_client(config, client)
    }

    /// Builds a client around an existing `reqwest::Client`.
    ///
    /// The config's timeout is not applied here; the given client's settings win.
    pub fn with_client(config: SyncConfig, client: Client) -> SyncResult<Self> {
        let endpoint = config.endpoint_url()?;
        Ok(Self {
            config,
            endpoint,
            client,
        })
    }

    /// The active configuration.
    pub fn config(&self) -> &SyncConfig {
        &self.config
    }

    /// Sends `{ target_id, meta }` to the endpoint.
    ///
    /// Succeeds only on a 2xx status and hands back the untouched response.
    /// An empty `target_id` fails with [`SyncError::MissingTarget`] before
    /// any I/O; an absent record is sent as `{}`.
    pub async fn push(
        &self,
        target_id: &str,
        record: Option<&AttributeRecord>,
    ) -> SyncResult<Response> {
        if target_id.is_empty() {
            return Err(SyncError::MissingTarget);
        }

        let body = SyncPayload::new(target_id, record).to_bytes()?;
        debug!(
            target_id,
            bytes = body.len(),
            endpoint = %self.endpoint,
            "Pushing meta record"
        );

        let mut request = self
            .client
            .post(self.endpoint.clone())
            .header(CONTENT_TYPE, "application/json")
            .body(body);
        if let Some(token) = &self.config.bearer_token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            warn!(target_id, status = status.as_u16(), "Meta push rejected");
            return Err(SyncError::RemoteRejected {
                status: status.as_u16(),
            });
        }

        info!(target_id, status = status.as_u16(), "Meta record pushed");
        Ok(response)
    }
}
