//! In-process session store.

use std::sync::{Mutex, PoisonError};
use tracing::debug;

use crate::domain::entities::AccessToken;
use crate::domain::ports::SessionStore;
use crate::error::SessionError;

/// A session store kept in memory.
///
/// Used as a fake in tests and wherever the token only has to live as long as
/// the process.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    token: Mutex<Option<AccessToken>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store that already holds `token`.
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: Mutex::new(Some(AccessToken::new(token))),
        }
    }
}

impl SessionStore for MemorySessionStore {
    fn get_token(&self) -> Option<AccessToken> {
        self.token
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn set_token(&self, token: AccessToken) -> Result<(), SessionError> {
        debug!("Session token stored in memory");
        *self.token.lock().unwrap_or_else(PoisonError::into_inner) = Some(token);
        Ok(())
    }

    fn clear_token(&self) -> Result<(), SessionError> {
        debug!("Session token cleared from memory");
        self.token
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_get_clear() {
        let store = MemorySessionStore::new();
        assert!(store.get_token().is_none());

        store.set_token(AccessToken::new("t1")).unwrap();
        assert_eq!(store.get_token(), Some(AccessToken::new("t1")));

        store.set_token(AccessToken::new("t2")).unwrap();
        assert_eq!(store.get_token(), Some(AccessToken::new("t2")));

        store.clear_token().unwrap();
        assert!(store.get_token().is_none());

        store.clear_token().unwrap();
        assert!(store.get_token().is_none());
    }
}
