//! Page flows, one per user action.
//!
//! Each flow is a plain async function over the injected
//! [`BackendApi`](crate::domain::ports::BackendApi) and
//! [`SessionStore`](crate::domain::ports::SessionStore). Flows decide what the
//! user should see next and leave rendering to the caller (web handlers or
//! the CLI).
//!
//! # Session State Machine
//!
//! ```text
//! Unauthenticated --login ok--> Authenticated --401 / logout--> Unauthenticated
//! ```

pub mod dashboard;
pub mod login;
pub mod logout;
pub mod query;

pub use dashboard::{DashboardView, GUEST_NAME, SessionControl, load_dashboard};
pub use login::{LOGIN_FAILED_MESSAGE, LoginError, submit_login};
pub use logout::logout;
pub use query::{PROCESSING_MESSAGE, QUERY_FAILED_MESSAGE, QueryError, submit_query};

/// Shown when the backend could not be reached or answered unintelligibly.
pub const GENERIC_FAILURE_MESSAGE: &str = "An error occurred. Please try again later.";

/// Page a flow sends the user to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    Home,
    Login,
}

impl Navigation {
    pub fn path(&self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Login => "/login",
        }
    }
}
