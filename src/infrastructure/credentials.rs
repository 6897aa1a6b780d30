// src/infrastructure/credentials.rs
use crate::application::CredentialStore;
use crate::constants::CREDENTIALS_FILE;
use crate::domain::{Credentials, DomainError};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, instrument};

/// Durable credential storage: a JSON file holding the token pair.
///
/// The file is written with mode 0600 on Unix. An absent file reads as
/// "no credentials"; `clear` is a no-op when nothing is stored.
#[derive(Debug, Clone)]
pub struct FileCredentialStore {
    path: PathBuf,
}

impl FileCredentialStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Default location under the platform data directory.
    pub fn default_path() -> Result<PathBuf, DomainError> {
        let base = dirs::data_dir()
            .ok_or_else(|| DomainError::Storage("could not find a data directory".to_string()))?;
        Ok(base.join("starlus").join(CREDENTIALS_FILE))
    }
}

fn storage_error(path: &Path, err: impl std::fmt::Display) -> DomainError {
    DomainError::Storage(format!("{}: {}", path.display(), err))
}

impl CredentialStore for FileCredentialStore {
    #[instrument(level = "debug", skip(self, credentials))]
    fn store(&self, credentials: &Credentials) -> Result<(), DomainError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| storage_error(parent, e))?;
        }

        let contents = serde_json::to_string_pretty(credentials)
            .map_err(|e| storage_error(&self.path, e))?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            let mut file = OpenOptions::new()
                .write(true)
                .create(true)
                .truncate(true)
                .mode(0o600)
                .open(&self.path)
                .map_err(|e| storage_error(&self.path, e))?;
            file.write_all(contents.as_bytes())
                .map_err(|e| storage_error(&self.path, e))?;
        }

        #[cfg(not(unix))]
        {
            fs::write(&self.path, contents).map_err(|e| storage_error(&self.path, e))?;
        }

        debug!(path = %self.path.display(), "Stored credentials");
        Ok(())
    }

    fn read(&self) -> Result<Option<Credentials>, DomainError> {
        if !self.path.exists() {
            return Ok(None);
        }
        let contents =
            fs::read_to_string(&self.path).map_err(|e| storage_error(&self.path, e))?;
        serde_json::from_str(&contents)
            .map(Some)
            .map_err(|e| storage_error(&self.path, e))
    }

    #[instrument(level = "debug", skip(self))]
    fn clear(&self) -> Result<(), DomainError> {
        if self.path.exists() {
            fs::remove_file(&self.path).map_err(|e| storage_error(&self.path, e))?;
            debug!(path = %self.path.display(), "Cleared credentials");
        }
        Ok(())
    }
}
