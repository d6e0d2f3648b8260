// SPDX-License-Identifier: Apache-2.0

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use dose_certa_model::User;

use crate::error::{StoreError, StoreErrorCode};
use crate::files::write_atomic;

pub const SESSION_FILE_NAME: &str = "dose-certa-user.json";

/// Persistence for the signed-in user between runs.
pub trait SessionStore: Send + Sync {
    /// `Ok(None)` when nobody is signed in; `Corrupt` when the payload is unreadable.
    fn load(&self) -> Result<Option<User>, StoreError>;
    fn save(&self, user: &User) -> Result<(), StoreError>;
    fn clear(&self) -> Result<(), StoreError>;
}

/// One JSON-serialized user in `<dir>/dose-certa-user.json`.
#[derive(Debug, Clone)]
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    #[must_use]
    pub fn new(dir: &Path) -> Self {
        Self {
            path: dir.join(SESSION_FILE_NAME),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SessionStore for FileSessionStore {
    fn load(&self) -> Result<Option<User>, StoreError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(StoreError::io(&err)),
        };
        serde_json::from_str(&raw).map(Some).map_err(|err| {
            StoreError::new(
                StoreErrorCode::Corrupt,
                format!("session file {} is unreadable: {err}", self.path.display()),
            )
        })
    }

    fn save(&self, user: &User) -> Result<(), StoreError> {
        let bytes = serde_json::to_vec(user)
            .map_err(|e| StoreError::new(StoreErrorCode::Io, e.to_string()))?;
        write_atomic(&self.path, &bytes)
    }

    fn clear(&self) -> Result<(), StoreError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(StoreError::io(&err)),
        }
    }
}

#[derive(Debug, Default)]
pub struct MemorySessionStore {
    slot: Mutex<Option<String>>,
}

impl MemorySessionStore {
    /// Seeds the raw payload, e.g. to exercise corrupt-session handling.
    #[must_use]
    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self {
            slot: Mutex::new(Some(raw.into())),
        }
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Option<String>>, StoreError> {
        self.slot
            .lock()
            .map_err(|_| StoreError::new(StoreErrorCode::Io, "session slot lock poisoned"))
    }
}

impl SessionStore for MemorySessionStore {
    fn load(&self) -> Result<Option<User>, StoreError> {
        let slot = self.lock()?;
        match slot.as_deref() {
            None => Ok(None),
            Some(raw) => serde_json::from_str(raw).map(Some).map_err(|err| {
                StoreError::new(StoreErrorCode::Corrupt, format!("session is unreadable: {err}"))
            }),
        }
    }

    fn save(&self, user: &User) -> Result<(), StoreError> {
        let raw = serde_json::to_string(user)
            .map_err(|e| StoreError::new(StoreErrorCode::Io, e.to_string()))?;
        *self.lock()? = Some(raw);
        Ok(())
    }

    fn clear(&self) -> Result<(), StoreError> {
        *self.lock()? = None;
        Ok(())
    }
}
