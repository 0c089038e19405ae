//! Remote sync for map node attribute records.
//!
//! A caller edits an [`AttributeRecord`](nodemeta_model::AttributeRecord)
//! locally and then hands it to [`RecordSyncClient::push`], which POSTs
//!
//! ```json
//! { "target_id": "<node id>", "meta": { "meta_<type>": [ ... ] } }
//! ```
//!
//! to the configured webhook. Failures are classified as
//! [`SyncError::MissingTarget`], [`SyncError::Transport`] or
//! [`SyncError::RemoteRejected`]; retry policy is left to the caller.
//!
//! # Example
//!
//! ```no_run
//! use nodemeta_model::AttributeRecord;
//! use nodemeta_sync::{RecordSyncClient, SyncConfig};
//!
//! # async fn run() -> nodemeta_sync::SyncResult<()> {
//! let client = RecordSyncClient::new(SyncConfig::default())?;
//!
//! let mut record = AttributeRecord::new();
//! record.update_value("text", "a1", "hello");
//!
//! client.push("map-42", Some(&record)).await?;
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod payload;

pub use client::RecordSyncClient;
pub use config::{DEFAULT_ENDPOINT, SyncConfig};
pub use error::{SyncError, SyncResult};
pub use payload::SyncPayload;
