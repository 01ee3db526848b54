//! Trait definitions for the collaborators the flows depend on.
//!
//! Both seams are injected so flows can run against fakes:
//!
//! - [`SessionStore`] - where the bearer token lives between requests
//! - [`BackendApi`] - the REST backend issuing tokens and answering queries
//!
//! Mock implementations are auto-generated via `mockall` for unit tests.

pub mod backend_api;
pub mod session_store;

pub use backend_api::BackendApi;
pub use session_store::{SESSION_KEY, SessionStore};

#[cfg(test)]
pub use backend_api::MockBackendApi;
#[cfg(test)]
pub use session_store::MockSessionStore;
