// web_app/error.rs - Error kinds surfaced to the admin
//
// Every failure ends the current operation and is shown as a message;
// nothing is retried and nothing logs the admin out.

use reqwest::StatusCode;
use serde_json::Value;

pub type Result<T> = std::result::Result<T, AdminError>;

/// Message shown for any transport-level failure
pub const NETWORK_ERROR_MESSAGE: &str = "Network error or server unavailable.";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AdminError {
    /// Credential invalid or expired (401/403, or a rejected login)
    #[error("{0}")]
    AuthRejected(String),

    /// Transport or connectivity failure; the detail is only logged
    #[error("Network error or server unavailable.")]
    Network { detail: String },

    /// Non-2xx response carrying the server's own explanation
    #[error("{0}")]
    ServerValidation(String),

    /// 2xx response whose body could not be decoded
    #[error("Unexpected response from server: {0}")]
    Decode(String),

    #[error("{0}")]
    InvalidDraft(String),

    #[error("Another request is already in progress.")]
    Busy,

    #[error("Not logged in.")]
    NotAuthenticated,

    #[error("Configuration error: {0}")]
    Config(String),

    /// The state an operation was writing into has been dropped
    #[error("The catalog view is no longer open.")]
    StateGone,
}

impl AdminError {
    pub fn network(detail: impl ToString) -> Self {
        AdminError::Network {
            detail: detail.to_string(),
        }
    }

    /// Text shown in the error banner
    pub fn user_message(&self) -> String {
        self.to_string()
    }
}

/// How to word a failure when the body carries no `detail`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Fallback {
    /// Use this fixed message
    Message(&'static str),
    /// Show the whole error body, serialized
    SerializedBody,
}

/// Turn a non-2xx response into an [`AdminError`].
///
/// 401 and 403 map to [`AdminError::AuthRejected`]; everything else is a
/// [`AdminError::ServerValidation`] worded from the body's `detail`, or
/// per `fallback` when there is none.
pub fn error_from_response(status: StatusCode, body: &str, fallback: Fallback) -> AdminError {
    let message = describe_error_body(status, body, fallback);
    if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
        AdminError::AuthRejected(message)
    } else {
        AdminError::ServerValidation(message)
    }
}

pub(crate) fn describe_error_body(status: StatusCode, body: &str, fallback: Fallback) -> String {
    let parsed = serde_json::from_str::<Value>(body).ok();

    if let Some(detail) = parsed.as_ref().and_then(detail_message) {
        return detail;
    }

    match fallback {
        Fallback::Message(message) => message.to_string(),
        Fallback::SerializedBody => match parsed {
            Some(value) => value.to_string(),
            None if !body.trim().is_empty() => body.trim().to_string(),
            None => format!("Request failed with status {}", status.as_u16()),
        },
    }
}

/// `detail` first, then the first entry of `non_field_errors`
pub(crate) fn detail_message(body: &Value) -> Option<String> {
    if let Some(detail) = body.get("detail") {
        return match detail {
            Value::String(text) => Some(text.clone()),
            Value::Null => None,
            other => Some(other.to_string()),
        };
    }

    body.get("non_field_errors")
        .and_then(Value::as_array)
        .and_then(|errors| errors.first())
        .and_then(Value::as_str)
        .map(str::to_string)
}
