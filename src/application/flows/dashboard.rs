//! Dashboard bootstrap.
//!
//! Unauthenticated visitors get the guest view with a login link instead of a
//! redirect. A `401` while loading the profile clears the token and degrades
//! to the same guest view in place.

use tracing::{info, warn};

use crate::domain::entities::UserProfile;
use crate::domain::ports::{BackendApi, SessionStore};

/// Greeting used when no identity is known.
pub const GUEST_NAME: &str = "Guest";

/// The header control that ends or starts a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionControl {
    /// A token is stored: the control logs out.
    Logout,
    /// No token: the control links to the login page.
    Login,
}

impl SessionControl {
    /// Control matching the current content of the store.
    pub fn for_session(session: &dyn SessionStore) -> Self {
        if session.get_token().is_some() {
            Self::Logout
        } else {
            Self::Login
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Logout => "Logout",
            Self::Login => "Login",
        }
    }
}

/// What the dashboard header shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardView {
    pub greeting: String,
    pub control: SessionControl,
    pub user: Option<UserProfile>,
}

impl DashboardView {
    fn guest(session: &dyn SessionStore) -> Self {
        Self {
            greeting: GUEST_NAME.to_string(),
            control: SessionControl::for_session(session),
            user: None,
        }
    }
}

/// Loads the dashboard header for the current session.
///
/// # Behaviour
///
/// - No token: guest view, no backend call
/// - Token accepted: greeting is the user's display name
/// - `401`: token cleared, guest view with a login link
/// - Any other failure: guest greeting, token kept
pub async fn load_dashboard(backend: &dyn BackendApi, session: &dyn SessionStore) -> DashboardView {
    let Some(token) = session.get_token() else {
        return DashboardView::guest(session);
    };

    match backend.current_user(&token).await {
        Ok(user) => DashboardView {
            greeting: user.display_name().to_string(),
            control: SessionControl::Logout,
            user: Some(user),
        },
        Err(e) if e.is_unauthorized() => {
            info!("Session token rejected while loading profile, clearing it");
            if let Err(e) = session.clear_token() {
                warn!("Failed to clear rejected session: {}", e);
            }
            DashboardView::guest(session)
        }
        Err(e) => {
            warn!("Error fetching user info: {}", e);
            DashboardView::guest(session)
        }
    }
}
