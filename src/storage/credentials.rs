//! Stored API credential
//!
//! The original app keeps the user-entered Gemini key in localStorage
//! under `gemini_api_key`. Here the key lives in a plain file in the data
//! directory, managed by the `auth` command.

use crate::error::{AbsurdaError, Result};
use std::path::{Path, PathBuf};

const CREDENTIAL_FILE: &str = "api_key";

/// File-backed store for the Gemini API key
pub struct CredentialStore {
    path: PathBuf,
}

impl CredentialStore {
    /// Open the credential store in the resolved data directory
    pub fn open(configured_dir: Option<&Path>) -> Result<Self> {
        let dir = super::resolve_data_dir(configured_dir)?;
        Ok(Self::at(&dir))
    }

    /// Open the credential store at an explicit directory
    pub fn at(dir: &Path) -> Self {
        Self {
            path: dir.join(CREDENTIAL_FILE),
        }
    }

    /// The stored key, if any
    pub fn get(&self) -> Option<String> {
        match std::fs::read_to_string(&self.path) {
            Ok(key) => {
                let key = key.trim().to_string();
                if key.is_empty() {
                    None
                } else {
                    Some(key)
                }
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => None,
            Err(e) => {
                tracing::warn!("Error reading stored API key: {}", e);
                None
            }
        }
    }

    /// Whether a key is stored
    pub fn has(&self) -> bool {
        self.get().is_some()
    }

    /// Persist a key
    pub fn save(&self, key: &str) -> Result<()> {
        std::fs::write(&self.path, key.trim())
            .map_err(|e| AbsurdaError::Storage(format!("Failed to store API key: {}", e)))?;
        tracing::info!("Stored API key at {}", self.path.display());
        Ok(())
    }

    /// Remove the stored key, if any
    pub fn clear(&self) -> Result<()> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(AbsurdaError::Storage(format!("Failed to remove API key: {}", e)).into()),
        }
    }
}
