//! Application layer: the page flows and answer rendering.
//!
//! Flows consume the domain traits and are shared by the web frontend
//! ([`crate::web`]) and the command-line client.
//!
//! - [`flows`] - login, dashboard bootstrap, query submission, logout
//! - [`render`] - answer text to HTML, escaped unless raw output is opted into

pub mod flows;
pub mod render;
