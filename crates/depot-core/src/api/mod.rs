//! Authenticated HTTP client for the inventory backend.
//!
//! One `request` primitive plus verb wrappers, a uniform response envelope,
//! and a classified error type. See `endpoints` for the path catalog and
//! `ops` for the typed per-resource operations.

mod client;
pub mod endpoints;
mod ops;

pub use client::ApiClient;

/// Classified failure from the API client.
///
/// Callers holding an `anyhow::Error` can recover the classification with
/// `downcast_ref::<ApiError>()`.
#[derive(Debug)]
pub enum ApiError {
    /// The backend answered 401. The local session has already been cleared
    /// by the time this error is observed; the caller must re-authenticate.
    SessionExpired,
    /// An operation that needs a session was attempted without one.
    NotAuthenticated,
    /// Non-2xx response carrying whatever message the envelope had.
    Status { status: u16, message: String },
    /// The response body was not valid JSON, or did not have the shape the
    /// caller expected.
    Decode,
    /// Transport-level failure (DNS, refused connection, ...).
    Transport(String),
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::SessionExpired => write!(f, "session expired, please log in again"),
            ApiError::NotAuthenticated => write!(f, "not logged in"),
            // The envelope message is the user-facing text; the status code
            // stays available through `status()`.
            ApiError::Status { message, .. } => f.write_str(message),
            ApiError::Decode => write!(f, "invalid response from server"),
            ApiError::Transport(msg) => write!(f, "network error: {msg}"),
        }
    }
}

impl std::error::Error for ApiError {}

impl ApiError {
    /// HTTP status code, when this failure came from a response at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            ApiError::SessionExpired => Some(401),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_displays_envelope_message_verbatim() {
        let err = ApiError::Status {
            status: 400,
            message: "name required".to_string(),
        };
        assert_eq!(err.to_string(), "name required");
        assert_eq!(err.status(), Some(400));
    }

    #[test]
    fn every_variant_has_a_non_empty_message() {
        let errors = [
            ApiError::SessionExpired,
            ApiError::NotAuthenticated,
            ApiError::Status {
                status: 500,
                message: "request failed".to_string(),
            },
            ApiError::Decode,
            ApiError::Transport("connection refused".to_string()),
        ];
        for err in errors {
            assert!(!err.to_string().is_empty());
        }
    }

    #[test]
    fn classification_survives_anyhow() {
        let err: anyhow::Error = ApiError::SessionExpired.into();
        assert!(matches!(
            err.downcast_ref::<ApiError>(),
            Some(ApiError::SessionExpired)
        ));
    }
}
