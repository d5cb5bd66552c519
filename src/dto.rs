//! Response envelopes shared by the server handlers and the `moodlog` client.
//!
//! Entity shapes live in [`crate::models`]; this module only holds the small
//! wrapper bodies that are not rows.

use serde::{Deserialize, Serialize};

/// Every error response is `{ "error": "<message>" }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// GET /api/health
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

impl HealthResponse {
    pub fn ok() -> Self {
        Self {
            status: "ok".into(),
        }
    }
}

/// GET /api/db-test
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DbTestResponse {
    pub connected: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}
