//! Error conversions - From implementations for common error types
//!
//! Provides conversions between [`ArgumentError`] and the error types of
//! the crates it sits next to.

use super::argument_error::ArgumentError;
use super::kind::ArgumentErrorKind;

// ============================================================================
// Standard library conversions
// ============================================================================

impl From<ArgumentError> for std::io::Error {
    fn from(err: ArgumentError) -> Self {
        std::io::Error::new(std::io::ErrorKind::InvalidInput, err)
    }
}

// ============================================================================
// serde_json conversions
// ============================================================================

impl From<serde_json::Error> for ArgumentError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_syntax() || err.is_data() {
            ArgumentError::new(
                ArgumentErrorKind::InvalidType,
                format!("JSON parse error: {}", err),
            )
        } else if err.is_eof() {
            ArgumentError::new(
                ArgumentErrorKind::EmptyParameter,
                format!("JSON input ended unexpectedly: {}", err),
            )
        } else {
            ArgumentError::new(
                ArgumentErrorKind::Unreadable,
                format!("JSON input could not be read: {}", err),
            )
        }
    }
}

// ============================================================================
// Axum conversions (feature-gated)
// ============================================================================

#[cfg(feature = "axum")]
impl axum::response::IntoResponse for ArgumentError {
    fn into_response(self) -> axum::response::Response {
        use axum::Json;
        use http::StatusCode;

        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        // RFC 7807 Problem Details for HTTP APIs
        let body = serde_json::json!({
            "type": format!("https://httpstatuses.io/{}", self.status_code()),
            "title": self.kind().as_str(),
            "status": self.status_code(),
            "detail": self.message(),
            "code": self.kind().code(),
        });

        (status, Json(body)).into_response()
    }
}
