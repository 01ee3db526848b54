//! Infrastructure layer for external integrations.
//!
//! This layer implements the traits defined in [`crate::domain::ports`].
//!
//! # Modules
//!
//! - [`http`] - `reqwest` client for the backend REST API
//! - [`session`] - Token stores (memory, browser cookie, JSON file)

pub mod http;
pub mod session;
