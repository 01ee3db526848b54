//! [`SessionStore`](crate::domain::ports::SessionStore) implementations.
//!
//! - [`MemorySessionStore`] - in-process store for tests and fakes
//! - [`CookieSessionStore`] - browser cookie, one instance per web request
//! - [`FileSessionStore`] - JSON file for the command-line client

mod cookie_store;
mod file_store;
mod memory_store;

pub use cookie_store::{CookieSessionStore, CookieSettings};
pub use file_store::FileSessionStore;
pub use memory_store::MemorySessionStore;
