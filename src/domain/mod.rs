//! Domain layer: the data exchanged with the backend and the seams flows
//! depend on.
//!
//! # Architecture
//!
//! - [`entities`] - Tokens, credentials, user profile, query payloads
//! - [`ports`] - [`ports::SessionStore`] and [`ports::BackendApi`] traits
//!
//! The domain layer has no dependency on HTTP frameworks or storage. Concrete
//! adapters live in [`crate::infrastructure`].
//!
//! # Session Lifecycle
//!
//! 1. Login exchanges credentials for a token and stores it
//! 2. Every protected call reads the token and attaches it as a bearer credential
//! 3. Logout, or any `401` from the backend, clears the token

pub mod entities;
pub mod ports;
