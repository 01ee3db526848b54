//! File-backed session store used by the command-line client.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::domain::entities::AccessToken;
use crate::domain::ports::SessionStore;
use crate::error::SessionError;

/// On-disk layout of the session file.
#[derive(Debug, Serialize, Deserialize)]
struct StoredSession {
    #[serde(rename = "accessToken")]
    access_token: AccessToken,
    saved_at: DateTime<Utc>,
}

/// Persists the token as a small JSON document.
///
/// ```json
/// { "accessToken": "eyJhbGciOi...", "saved_at": "2026-10-18T09:12:44Z" }
/// ```
///
/// A missing, unreadable, or malformed file reads as "no token". Clearing
/// deletes the file.
#[derive(Debug, Clone)]
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `<config dir>/secureinfo-concierge/session.json`, if the platform has
    /// a configuration directory.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("secureinfo-concierge").join("session.json"))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// When the current token was stored.
    pub fn saved_at(&self) -> Option<DateTime<Utc>> {
        self.load().map(|session| session.saved_at)
    }

    fn load(&self) -> Option<StoredSession> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return None,
            Err(e) => {
                warn!("Cannot read session file {}: {}", self.path.display(), e);
                return None;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(session) => Some(session),
            Err(e) => {
                warn!("Ignoring malformed session file {}: {}", self.path.display(), e);
                None
            }
        }
    }

    fn io_error(&self, source: std::io::Error) -> SessionError {
        SessionError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl SessionStore for FileSessionStore {
    fn get_token(&self) -> Option<AccessToken> {
        self.load().map(|session| session.access_token)
    }

    fn set_token(&self, token: AccessToken) -> Result<(), SessionError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
        }

        let session = StoredSession {
            access_token: token,
            saved_at: Utc::now(),
        };
        let body = serde_json::to_string_pretty(&session)?;

        let mut options = OpenOptions::new();
        options.write(true).create(true).truncate(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(0o600);
        }
        let mut file = options.open(&self.path).map_err(|e| self.io_error(e))?;

        // `mode` only applies when the file is created.
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            file.set_permissions(fs::Permissions::from_mode(0o600))
                .map_err(|e| self.io_error(e))?;
        }

        file.write_all(body.as_bytes())
            .map_err(|e| self.io_error(e))?;

        debug!("Session saved to {}", self.path.display());
        Ok(())
    }

    fn clear_token(&self) -> Result<(), SessionError> {
        match fs::remove_file(&self.path) {
            Ok(()) => {
                debug!("Session file {} removed", self.path.display());
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(self.io_error(e)),
        }
    }
}
