//! Credential storage for persisting login state.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

#[cfg(unix)]
use std::os::unix::fs::PermissionsExt;

/// Stored credential data.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct StoredCredentials {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    pub token: String,
}

/// Get the credentials file path.
fn credentials_path() -> Result<PathBuf> {
    let dirs = ProjectDirs::from("", "", "rigby").context("Could not determine config directory")?;

    let data_dir = dirs.data_dir();
    fs::create_dir_all(data_dir).context("Failed to create data directory")?;

    Ok(data_dir.join("credentials.json"))
}

/// Save credentials to disk.
pub fn save(credentials: &StoredCredentials) -> Result<PathBuf> {
    let path = credentials_path()?;
    let json = serde_json::to_string_pretty(credentials)?;

    fs::write(&path, &json).context("Failed to write credentials file")?;

    // Set restrictive permissions (Unix only)
    #[cfg(unix)]
    {
        let mut perms = fs::metadata(&path)?.permissions();
        perms.set_mode(0o600);
        fs::set_permissions(&path, perms)?;
    }

    Ok(path)
}

/// Load credentials from disk.
pub fn load() -> Result<Option<StoredCredentials>> {
    let path = credentials_path()?;

    if !path.exists() {
        return Ok(None);
    }

    let json = fs::read_to_string(&path).context("Failed to read credentials file")?;
    let stored: StoredCredentials =
        serde_json::from_str(&json).context("Invalid credentials file")?;

    Ok(Some(stored))
}

/// Remove stored credentials. Returns false if there were none.
pub fn clear() -> Result<bool> {
    let path = credentials_path()?;

    if path.exists() {
        fs::remove_file(&path).context("Failed to remove credentials file")?;
        return Ok(true);
    }

    Ok(false)
}
