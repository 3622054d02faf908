//! JSON serialization of the snapshot.
//!
//! The wire shape is flat: `updatedAt`, `keywords`, `articles` (title/href
//! pairs), `warnings`. Output is pretty-printed with non-ASCII text left
//! unescaped, so Korean keywords stay readable in the file.

use std::error::Error;
use tokio::fs;
use tracing::{info, instrument};

use crate::models::TrendSnapshot;

/// Serialize a snapshot to pretty-printed JSON.
pub fn to_pretty_json(snapshot: &TrendSnapshot) -> serde_json::Result<String> {
    serde_json::to_string_pretty(snapshot)
}

/// Write a snapshot to a JSON file.
///
/// # Arguments
///
/// * `snapshot` - The assembled collection result
/// * `path` - Destination file path, created or overwritten
#[instrument(level = "info", skip_all, fields(path = %path))]
pub async fn write_snapshot(snapshot: &TrendSnapshot, path: &str) -> Result<(), Box<dyn Error>> {
    let json = to_pretty_json(snapshot)?;
    fs::write(path, json).await?;
    info!(path, "Wrote snapshot JSON");
    Ok(())
}
