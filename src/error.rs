//! Error types for API calls.
//!
//! Every failed call surfaces as a [`ClientError`]. Backend rejections are a
//! single flat kind, [`ClientError::Api`], distinguished only by the HTTP
//! status and the message the server supplied.

use reqwest::StatusCode;
use serde::Deserialize;
use serde_json::Value;

/// Client-wide error type.
///
/// # Error Categories
///
/// - **API Errors**: the backend answered with a non-success status
/// - **Transport Errors**: the request never produced a response
/// - **JSON Errors**: a body could not be serialized or parsed
/// - **URL Errors**: the base URL or a path cannot form a valid URL
/// - **Token Store Errors**: the persisted credential could not be read or written
/// - **Id Errors**: a resource id cannot be placed in a URL path
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// Backend returned a non-2xx status.
    ///
    /// `message` is the server-supplied `message` field when present,
    /// otherwise a string containing the status code. The error displays
    /// as exactly that message.
    #[error("{message}")]
    Api { status: u16, message: String },

    /// Connection, TLS or protocol failure.
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Request body could not be encoded, or the response was not valid JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Token store error: {0}")]
    TokenStore(#[from] std::io::Error),

    /// An id cannot be used as a path segment (empty, `.` or `..`).
    #[error("Invalid resource id: {0:?}")]
    InvalidId(String),
}

/// Shape of an error body returned by the backend.
///
/// Only `message` is read; anything else in the body is ignored. Strings,
/// numbers and `true` are used as the message. Empty strings, `0`, `false`,
/// `null`, arrays and objects fall back to the status code.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct ErrorBody {
    #[serde(default)]
    pub message: Option<Value>,
}

impl ErrorBody {
    fn message_text(self) -> Option<String> {
        match self.message? {
            Value::String(s) if !s.is_empty() => Some(s),
            Value::Number(n) if n.as_f64() != Some(0.0) => Some(n.to_string()),
            Value::Bool(true) => Some("true".to_string()),
            _ => None,
        }
    }
}

impl ClientError {
    /// Build the error for a non-success response from its raw body.
    ///
    /// A body that is not JSON is treated as an empty object, and a missing
    /// or unusable server message falls back to the status code.
    pub(crate) fn from_response(status: StatusCode, body: &[u8]) -> Self {
        let parsed = serde_json::from_slice::<ErrorBody>(body).unwrap_or_default();

        let message = parsed
            .message_text()
            .unwrap_or_else(|| format!("HTTP error! status: {}", status.as_u16()));

        ClientError::Api {
            status: status.as_u16(),
            message,
        }
    }

    /// HTTP status of a backend rejection, if this is one.
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Api { status, .. } => Some(*status),
            ClientError::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Whether the backend rejected the credential (HTTP 401).
    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(StatusCode::UNAUTHORIZED.as_u16())
    }
}
