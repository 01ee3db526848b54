//! Browser-facing layer.
//!
//! Server-rendered login and dashboard pages using Askama templates. The
//! session token lives in the `accessToken` cookie and is handled by
//! [`crate::infrastructure::session::CookieSessionStore`].
//!
//! # Modules
//!
//! - [`handlers`] - Page handlers and health probes
//! - [`middleware`] - Request tracing
//! - [`routes`] - Page route configuration

pub mod handlers;
pub mod middleware;
pub mod routes;
