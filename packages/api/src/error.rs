//! # API error type
//!
//! One error enum for everything that can go wrong between the admin console
//! and the REST backend. Expired sessions get their own variant because the
//! client reacts to them (clearing the stored session) before the caller
//! ever sees the error.

use serde::Deserialize;

/// Failure of one request against the backend.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request never produced an HTTP response.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The backend rejected the bearer token. The stored session has already
    /// been cleared by the time this surfaces.
    #[error("session expired")]
    Unauthorized,

    /// Non-success HTTP status, with the backend's message when it sent one.
    #[error("server error ({status}): {}", message.as_deref().unwrap_or("no message"))]
    Server { status: u16, message: Option<String> },

    /// The response body did not match the expected shape.
    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ApiError {
    /// A message fit for a toast. Prefers what the backend said; falls back
    /// to a generic line per failure class.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Server {
                message: Some(message),
                ..
            } => message.clone(),
            ApiError::Server { status, .. } => format!("Request failed ({status})."),
            ApiError::Unauthorized => {
                "Your session has expired. Please sign in again.".to_string()
            }
            ApiError::Transport(_) => "Could not reach the server.".to_string(),
            ApiError::Decode(_) => "Received an unexpected response.".to_string(),
        }
    }
}

#[derive(Deserialize)]
struct ServerMessage {
    message: Option<String>,
    error: Option<String>,
}

/// Pull a human-readable message out of an error body. The backend usually
/// sends `{"message": "..."}`, sometimes `{"error": "..."}`, sometimes plain
/// text.
pub(crate) fn extract_server_message(body: &str) -> Option<String> {
    if let Ok(parsed) = serde_json::from_str::<ServerMessage>(body) {
        if let Some(message) = parsed.message.or(parsed.error) {
            if !message.is_empty() {
                return Some(message);
            }
        }
    }
    let trimmed = body.trim();
    if trimmed.is_empty() || trimmed.starts_with('{') || trimmed.starts_with('[') {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_message_field() {
        assert_eq!(
            extract_server_message(r#"{"message":"Email already registered"}"#),
            Some("Email already registered".to_string())
        );
    }

    #[test]
    fn test_extracts_error_field_when_message_absent() {
        assert_eq!(
            extract_server_message(r#"{"error":"Invalid credentials"}"#),
            Some("Invalid credentials".to_string())
        );
    }

    #[test]
    fn test_prefers_message_over_error() {
        assert_eq!(
            extract_server_message(r#"{"message":"first","error":"second"}"#),
            Some("first".to_string())
        );
    }

    #[test]
    fn test_plain_text_body_passes_through() {
        assert_eq!(
            extract_server_message("Forbidden"),
            Some("Forbidden".to_string())
        );
    }

    #[test]
    fn test_unhelpful_bodies_yield_none() {
        assert_eq!(extract_server_message(""), None);
        assert_eq!(extract_server_message("   "), None);
        assert_eq!(extract_server_message(r#"{"code":42}"#), None);
        assert_eq!(extract_server_message(r#"{"message":""}"#), None);
    }

    #[test]
    fn test_user_message_prefers_server_text() {
        let err = ApiError::Server {
            status: 409,
            message: Some("Username is taken".to_string()),
        };
        assert_eq!(err.user_message(), "Username is taken");

        let bare = ApiError::Server {
            status: 500,
            message: None,
        };
        assert_eq!(bare.user_message(), "Request failed (500).");
    }

    #[test]
    fn test_unauthorized_user_message() {
        assert_eq!(
            ApiError::Unauthorized.user_message(),
            "Your session has expired. Please sign in again."
        );
    }
}
