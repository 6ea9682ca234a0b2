//! Failure taxonomy shared by every backend call.
//!
//! ERROR HANDLING
//! ==============
//! Three kinds are distinguished: the request never completed (`Transport`),
//! the backend answered with a non-success status (`Status`), or a success
//! body did not match the expected schema (`Malformed`). Each is terminal for
//! the user action that triggered it; nothing here retries.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Error returned by any typed backend call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request could not be sent or the connection failed.
    #[error("request failed: {0}")]
    Transport(String),
    /// The backend responded with a non-success HTTP status.
    #[error("HTTP {status}: {message}")]
    Status { status: u16, message: String },
    /// The response body was missing a field or could not be decoded.
    #[error("malformed response: {0}")]
    Malformed(String),
}

impl ApiError {
    /// Build a status error, preferring the backend's `detail` message.
    ///
    /// The backend reports failures as `{"detail": "..."}`; plain-text and
    /// empty bodies fall back to the raw text or a generic message.
    #[must_use]
    pub fn from_status(status: u16, body: &str) -> Self {
        Self::Status { status, message: status_message(body) }
    }

    /// Short message suitable for a transient notification.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Transport(_) => "Could not reach the analysis service.".to_owned(),
            Self::Status { message, .. } => message.clone(),
            Self::Malformed(_) => "The analysis service returned an unexpected response.".to_owned(),
        }
    }
}

fn status_message(body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return "request was rejected".to_owned();
    }
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(trimmed) {
        match value.get("detail") {
            Some(serde_json::Value::String(detail)) => return detail.clone(),
            Some(other) if !other.is_null() => return other.to_string(),
            _ => {}
        }
    }
    trimmed.to_owned()
}
