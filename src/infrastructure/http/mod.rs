//! HTTP adapter for the backend REST API.

mod http_backend;

pub use http_backend::HttpBackend;
