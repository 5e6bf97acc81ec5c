//! Normalized success result

use std::collections::HashMap;

use serde_json::Value;

/// Normalized result of a successful call
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    /// Response body, parsed as JSON when possible, retained as a raw
    /// string otherwise
    pub body: Value,
    /// Response headers
    pub headers: HashMap<String, String>,
    /// HTTP status code
    pub status: u16,
}
