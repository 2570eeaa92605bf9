use std::path::Path;

use tracing::info;

use crate::error::{Result, ScrapeError};

/// Read the word list, one word per line. Blank lines and duplicates pass through.
pub fn read_words(path: &Path) -> Result<Vec<String>> {
    let text = std::fs::read_to_string(path).map_err(|source| ScrapeError::ReadWords {
        path: path.to_path_buf(),
        source,
    })?;
    let words: Vec<String> = text.lines().map(str::to_string).collect();
    info!("Loaded {} words from {}", words.len(), path.display());
    Ok(words)
}

// ── Tests ──
