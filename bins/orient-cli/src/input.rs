//! JSON exports of attempt rows and player profiles.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use orient_core::types::{AttemptRow, PlayerProfile};
use serde::de::DeserializeOwned;
use tracing::info;

fn load_json<T: DeserializeOwned>(path: &Path, what: &str) -> Result<Vec<T>> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("failed to read {what} file {}", path.display()))?;
    let items: Vec<T> = serde_json::from_str(&data)
        .with_context(|| format!("invalid {what} JSON in {}", path.display()))?;
    info!(count = items.len(), path = %path.display(), "loaded {}", what);
    Ok(items)
}

/// Read a JSON array of [`AttemptRow`]s. Rows are validated later, per row.
pub fn load_attempts(path: &Path) -> Result<Vec<AttemptRow>> {
    load_json(path, "attempts")
}

/// Read a JSON array of [`PlayerProfile`]s.
pub fn load_profiles(path: &Path) -> Result<Vec<PlayerProfile>> {
    load_json(path, "profiles")
}
