//! Identity returned by `GET /api/users/me`.

use serde::Deserialize;

/// User profile fetched per page view. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UserProfile {
    pub username: String,
    #[serde(default)]
    pub full_name: Option<String>,
}

impl UserProfile {
    /// Name shown in the greeting: `full_name`, or `username` when the
    /// full name is missing or empty.
    pub fn display_name(&self) -> &str {
        match self.full_name.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => &self.username,
        }
    }
}
