//! # SecureInfo Concierge Portal
//!
//! Login and dashboard frontend for the SecureInfo Concierge query API.
//!
//! Users log in with a username and password, which the backend exchanges for
//! a bearer token. The dashboard greets them by name and forwards free-text
//! queries to the backend, rendering the plain-text answer.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Tokens, profiles, query payloads, and the
//!   [`SessionStore`](domain::ports::SessionStore) / [`BackendApi`](domain::ports::BackendApi) seams
//! - **Application Layer** ([`application`]) - Page flows and answer rendering
//! - **Infrastructure Layer** ([`infrastructure`]) - `reqwest` backend client and token stores
//! - **Web Layer** ([`web`]) - Server-rendered pages, session kept in a cookie
//!
//! The same flows drive the `concierge` command-line client, which keeps its
//! token in a JSON file.
//!
//! ## Quick Start
//!
//! ```bash
//! export BACKEND_URL="http://127.0.0.1:8000"
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;

pub mod config;
pub mod server;

pub mod routes;
pub mod web;

pub use error::{ApiError, SessionError};
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::flows::{
        DashboardView, LoginError, Navigation, QueryError, SessionControl, load_dashboard, logout,
        submit_login, submit_query,
    };
    pub use crate::application::render::{RenderMode, format_response};
    pub use crate::domain::entities::{
        AccessToken, Credentials, QueryAnswer, QueryRequest, TokenGrant, UserProfile,
    };
    pub use crate::domain::ports::{BackendApi, SessionStore};
    pub use crate::error::{ApiError, SessionError};
    pub use crate::infrastructure::http::HttpBackend;
    pub use crate::infrastructure::session::{
        CookieSessionStore, CookieSettings, FileSessionStore, MemorySessionStore,
    };
    pub use crate::state::AppState;
}
