//! Commands behind the `nodemeta` binary.
//!
//! Kept out of `main.rs` so they can be driven from tests without a process.

use anyhow::{Context, Result};
use nodemeta_markup::{MarkupAction, MarkupEdit, Placeholders, Selection, apply_markup_with};
use nodemeta_model::AttributeRecord;
use nodemeta_sync::{RecordSyncClient, SyncConfig, SyncPayload};
use serde_json::Value;
use std::path::Path;
use tracing::{debug, info};

/// Reads a record file for editing. A file that does not exist yet is an
/// empty record.
pub async fn load_record(path: &Path) -> Result<AttributeRecord> {
    let exists = tokio::fs::try_exists(path)
        .await
        .with_context(|| format!("Failed to stat record file {}", path.display()))?;
    if !exists {
        debug!("{} not found, starting from an empty record", path.display());
        return Ok(AttributeRecord::new());
    }
    read_record(path).await
}

/// Reads a record file that must exist.
///
/// Used on the push path, where a missing file must not turn into an empty
/// record on the remote.
pub async fn read_record(path: &Path) -> Result<AttributeRecord> {
    let raw = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read record file {}", path.display()))?;
    AttributeRecord::from_json_str(&raw)
        .with_context(|| format!("Failed to parse record file {}", path.display()))
}

/// Writes a record as pretty JSON.
pub async fn save_record(path: &Path, record: &AttributeRecord) -> Result<()> {
    let json = serde_json::to_string_pretty(record)?;
    tokio::fs::write(path, json)
        .await
        .with_context(|| format!("Failed to write record file {}", path.display()))
}

/// Interprets a command-line value: JSON if it parses, a plain string otherwise.
pub fn parse_value(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
}

/// Loads `record_path`, applies one update and returns the result.
pub async fn set_attribute(
    record_path: &Path,
    type_name: &str,
    attribute_id: &str,
    raw_value: &str,
) -> Result<AttributeRecord> {
    let mut record = load_record(record_path).await?;
    let before = record.entry_count();
    record.update_value(type_name, attribute_id, parse_value(raw_value));
    debug!(
        "{} entries before, {} after update",
        before,
        record.entry_count()
    );
    Ok(record)
}

/// Builds the sync config: file first, then the endpoint override.
pub async fn resolve_config(
    config_path: Option<&Path>,
    endpoint: Option<&str>,
) -> Result<SyncConfig> {
    let mut config = match config_path {
        Some(path) => SyncConfig::from_json_file(path)
            .await
            .context("Failed to load sync config")?,
        None => SyncConfig::default(),
    };
    if let Some(endpoint) = endpoint {
        config.endpoint = endpoint.to_string();
    }
    config.validate().context("Invalid sync config")?;
    Ok(config)
}

/// Renders the exact body a push would send.
pub fn render_payload(target_id: &str, record: &AttributeRecord) -> Result<String> {
    let bytes = SyncPayload::new(target_id, Some(record)).to_bytes()?;
    Ok(String::from_utf8(bytes)?)
}

/// Pushes a record file and returns the HTTP status of the accepted request.
pub async fn push_record(config: SyncConfig, target_id: &str, record_path: &Path) -> Result<u16> {
    let record = read_record(record_path).await?;
    let client = RecordSyncClient::new(config)?;
    info!(
        "Pushing {} attribute(s) in {} group(s) for {}",
        record.entry_count(),
        record.len(),
        target_id
    );
    let response = client
        .push(target_id, Some(&record))
        .await
        .with_context(|| format!("Failed to push meta for {target_id}"))?;
    Ok(response.status().as_u16())
}

/// Applies a markdown action to `buffer`.
pub fn markup(
    buffer: &str,
    action: &str,
    start: usize,
    end: usize,
    english: bool,
) -> Result<MarkupEdit> {
    let action: MarkupAction = action.parse()?;
    let placeholders = if english {
        Placeholders::english()
    } else {
        Placeholders::default()
    };
    Ok(apply_markup_with(
        buffer,
        Selection::new(start, end),
        action,
        &placeholders,
    ))
}
