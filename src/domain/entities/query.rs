//! Query payloads for `POST /api/secure-query`.

use serde::{Deserialize, Serialize};

/// Body sent to the query endpoint, also the dashboard form payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryRequest {
    #[serde(default)]
    pub query: String,
}

impl QueryRequest {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
        }
    }
}

/// Plain-text answer from the backend. May contain newlines.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct QueryAnswer {
    pub response: String,
}
