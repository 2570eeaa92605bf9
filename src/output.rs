use std::path::{Path, PathBuf};

use tracing::info;

use crate::entry::Entry;
use crate::error::{Result, ScrapeError};

/// Write all entries as one pretty-printed JSON array (2-space indent).
pub async fn write_entries(path: &Path, entries: &[Entry]) -> Result<PathBuf> {
    let json = serde_json::to_string_pretty(entries)?;
    tokio::fs::write(path, json)
        .await
        .map_err(|source| ScrapeError::Write {
            path: path.to_path_buf(),
            source,
        })?;
    info!("Wrote {} entries to {}", entries.len(), path.display());
    Ok(path.to_path_buf())
}

// ── Tests ──
