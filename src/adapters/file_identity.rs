//! File-based identity store adapter.
//!
//! Persists the logged-in operator to `~/.lms-admin/identity.json`. This
//! is the desktop equivalent of the browser's local storage: read once at
//! startup, written on login, cleared on logout.

use async_trait::async_trait;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::PathBuf;

use crate::session::Operator;
use crate::traits::{IdentityError, IdentityStore};

/// The identity directory name.
const IDENTITY_DIR: &str = ".lms-admin";

/// The identity file name.
const IDENTITY_FILE: &str = "identity.json";

/// File-based identity store.
#[derive(Debug, Clone)]
pub struct FileIdentityStore {
    /// Path to the identity file.
    identity_path: PathBuf,
}

impl FileIdentityStore {
    /// Create a store rooted at the user's home directory.
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, IdentityError> {
        let home = dirs::home_dir()
            .ok_or_else(|| IdentityError::Other("Failed to determine home directory".into()))?;
        Ok(Self {
            identity_path: home.join(IDENTITY_DIR).join(IDENTITY_FILE),
        })
    }

    /// Create a store at an explicit path. Used by tests.
    pub fn at_path(identity_path: PathBuf) -> Self {
        Self { identity_path }
    }

    /// Get the path to the identity file.
    pub fn identity_path(&self) -> &PathBuf {
        &self.identity_path
    }
}

#[async_trait]
impl IdentityStore for FileIdentityStore {
    async fn load(&self) -> Result<Option<Operator>, IdentityError> {
        if !self.identity_path.exists() {
            return Ok(None);
        }

        let file = File::open(&self.identity_path)
            .map_err(|e| IdentityError::LoadFailed(e.to_string()))?;
        let reader = BufReader::new(file);
        let operator = serde_json::from_reader(reader)
            .map_err(|e| IdentityError::Serialization(e.to_string()))?;
        Ok(Some(operator))
    }

    async fn save(&self, operator: &Operator) -> Result<(), IdentityError> {
        if let Some(parent) = self.identity_path.parent() {
            fs::create_dir_all(parent).map_err(|e| IdentityError::SaveFailed(e.to_string()))?;
        }

        let file = File::create(&self.identity_path)
            .map_err(|e| IdentityError::SaveFailed(e.to_string()))?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, operator)
            .map_err(|e| IdentityError::Serialization(e.to_string()))?;
        writer
            .flush()
            .map_err(|e| IdentityError::SaveFailed(e.to_string()))?;
        Ok(())
    }

    async fn clear(&self) -> Result<(), IdentityError> {
        if self.identity_path.exists() {
            fs::remove_file(&self.identity_path)
                .map_err(|e| IdentityError::ClearFailed(e.to_string()))?;
        }
        Ok(())
    }
}
