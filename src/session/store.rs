// ABOUTME: Bearer token persistence behind a TokenStore trait
// ABOUTME: File-backed store with owner-only permissions and an in-memory store
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use tracing::debug;
use weekfit_core::errors::{AppError, AppResult};

/// Storage for the single bearer token the client holds
pub trait TokenStore: Send + Sync {
    /// Stored token, if any
    ///
    /// # Errors
    ///
    /// Returns a storage error if the backing store cannot be read
    fn load(&self) -> AppResult<Option<String>>;

    /// Replace the stored token
    ///
    /// # Errors
    ///
    /// Returns a storage error if the token cannot be written
    fn save(&self, token: &str) -> AppResult<()>;

    /// Remove the stored token; succeeds when there is none
    ///
    /// # Errors
    ///
    /// Returns a storage error if the token cannot be removed
    fn clear(&self) -> AppResult<()>;
}

/// Token kept in a plain file readable only by the owner
#[derive(Debug, Clone)]
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    /// Store at `path`; parent directories are created on first save
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of the token file
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TokenStore for FileTokenStore {
    fn load(&self) -> AppResult<Option<String>> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => {
                let token = contents.trim();
                Ok((!token.is_empty()).then(|| token.to_owned()))
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(AppError::storage(format!(
                "Cannot read token file {}",
                self.path.display()
            ))
            .with_source(e)),
        }
    }

    fn save(&self, token: &str) -> AppResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, token)?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&self.path, fs::Permissions::from_mode(0o600))?;
        }

        debug!(path = %self.path.display(), "Stored session token");
        Ok(())
    }

    fn clear(&self) -> AppResult<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => {
                debug!(path = %self.path.display(), "Removed session token");
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// Token held in memory; clones share the same slot
#[derive(Debug, Clone, Default)]
pub struct MemoryTokenStore {
    token: Arc<Mutex<Option<String>>>,
}

impl MemoryTokenStore {
    /// Empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with `token`
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: Arc::new(Mutex::new(Some(token.into()))),
        }
    }

    fn slot(&self) -> AppResult<std::sync::MutexGuard<'_, Option<String>>> {
        self.token
            .lock()
            .map_err(|_| AppError::internal("Token store lock poisoned"))
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> AppResult<Option<String>> {
        Ok(self.slot()?.clone())
    }

    fn save(&self, token: &str) -> AppResult<()> {
        *self.slot()? = Some(token.to_owned());
        Ok(())
    }

    fn clear(&self) -> AppResult<()> {
        *self.slot()? = None;
        Ok(())
    }
}
