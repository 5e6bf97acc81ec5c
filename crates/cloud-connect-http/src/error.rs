//! Error types and failure-payload normalization

use serde_json::Value;
use thiserror::Error;

/// Result type for HTTP layer operations
pub type Result<T> = std::result::Result<T, HttpError>;

/// Normalized error delivered for every failed call, whichever transport
/// channel fired
#[derive(Debug, Error, PartialEq, Eq)]
pub enum HttpError {
    /// Failure reported by the web API, message derived from the response
    /// payload
    #[error("{message}")]
    Api {
        /// Normalized error message
        message: String,
        /// Status carried inside the error payload, when the payload had one
        status: Option<u16>,
    },
    /// Connection-level error
    #[error("Request error: {0}")]
    Connection(String),
    /// Request timed out
    #[error("Request timed out ({elapsed_ms})")]
    Timeout {
        /// Time elapsed before the timeout fired, in milliseconds
        elapsed_ms: u128,
    },
    /// JSON serialization error
    #[error("Serialization error: {0}")]
    Serialization(String),
    /// Other transport error
    #[error("{0}")]
    Other(String),
}

impl HttpError {
    /// Status code carried by the error, if any
    pub fn status(&self) -> Option<u16> {
        match self {
            HttpError::Api { status, .. } => *status,
            _ => None,
        }
    }
}

impl From<serde_json::Error> for HttpError {
    fn from(err: serde_json::Error) -> Self {
        HttpError::Serialization(err.to_string())
    }
}

/// Normalize a failure payload into an [`HttpError::Api`].
///
/// Recognized shapes, in priority order:
/// 1. an object whose `error` field is an object with a string `message`
///    (the Web API error format) — message and `status` come from it;
/// 2. an object whose `error` field is itself a string (the authorization
///    error format) — joined with `error_description` when present;
/// 3. a JSON-encoded string wrapping shape 1.
///
/// Anything else yields a generic error embedding the default message and
/// the raw payload; an empty payload yields the default message alone.
pub(crate) fn normalize_failure(default_message: &str, payload: &str) -> HttpError {
    if payload.is_empty() {
        return HttpError::Api {
            message: default_message.to_string(),
            status: None,
        };
    }

    if let Ok(value) = serde_json::from_str::<Value>(payload) {
        if let Some(error) = from_error_shape(&value) {
            return error;
        }
        if let Value::String(inner) = &value {
            if let Some(error) = serde_json::from_str::<Value>(inner)
                .ok()
                .as_ref()
                .and_then(from_error_shape)
            {
                return error;
            }
        }
    }

    HttpError::Api {
        message: format!("{default_message}: {payload}"),
        status: None,
    }
}

fn from_error_shape(value: &Value) -> Option<HttpError> {
    let error = value.get("error")?;

    if let Some(message) = error.get("message").and_then(Value::as_str) {
        let status = error
            .get("status")
            .and_then(Value::as_u64)
            .and_then(|status| u16::try_from(status).ok());
        return Some(HttpError::Api {
            message: message.to_string(),
            status,
        });
    }

    if let Some(message) = error.as_str() {
        let message = match value.get("error_description").and_then(Value::as_str) {
            Some(description) => format!("{message}: {description}"),
            None => message.to_string(),
        };
        return Some(HttpError::Api {
            message,
            status: None,
        });
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_web_api_error_format() {
        let error = normalize_failure("Request failed", r#"{"error":{"message":"X","status":404}}"#);

        assert_eq!(
            error,
            HttpError::Api {
                message: "X".to_string(),
                status: Some(404),
            }
        );
        assert_eq!(error.status(), Some(404));
    }

    #[test]
    fn normalizes_authorization_error_format() {
        let error = normalize_failure("Request failed", r#"{"error":"A","error_description":"B"}"#);

        assert_eq!(
            error,
            HttpError::Api {
                message: "A: B".to_string(),
                status: None,
            }
        );
    }

    #[test]
    fn authorization_format_without_description_keeps_bare_message() {
        let error = normalize_failure("Request failed", r#"{"error":"invalid_token"}"#);

        assert_eq!(
            error,
            HttpError::Api {
                message: "invalid_token".to_string(),
                status: None,
            }
        );
    }

    #[test]
    fn normalizes_serialized_json_error() {
        let payload = serde_json::to_string(r#"{"error":{"message":"nested","status":500}}"#)
            .expect("serialize payload");
        let error = normalize_failure("Request failed", &payload);

        assert_eq!(
            error,
            HttpError::Api {
                message: "nested".to_string(),
                status: Some(500),
            }
        );
    }

    #[test]
    fn unparseable_payload_falls_back_to_generic_error() {
        let error = normalize_failure("Request failed", "<html>gateway exploded</html>");

        assert_eq!(
            error,
            HttpError::Api {
                message: "Request failed: <html>gateway exploded</html>".to_string(),
                status: None,
            }
        );
    }

    #[test]
    fn unrecognized_object_falls_back_to_generic_error() {
        let error = normalize_failure("Request error", r#"{"unexpected":true}"#);

        assert_eq!(
            error,
            HttpError::Api {
                message: r#"Request error: {"unexpected":true}"#.to_string(),
                status: None,
            }
        );
    }

    #[test]
    fn empty_payload_uses_default_message_alone() {
        let error = normalize_failure("Request failed", "");

        assert_eq!(
            error,
            HttpError::Api {
                message: "Request failed".to_string(),
                status: None,
            }
        );
    }

    #[test]
    fn timeout_display_embeds_elapsed_time() {
        let error = HttpError::Timeout { elapsed_ms: 5000 };
        assert_eq!(error.to_string(), "Request timed out (5000)");
    }
}
