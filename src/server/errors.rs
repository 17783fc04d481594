use crate::error::ResumeMatcherError;
use axum::{
    extract::multipart::MultipartError,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Handlers return `Result<T, ResumeMatcherError>`; client errors carry their
/// message, everything else is logged and reported generically.
impl IntoResponse for ResumeMatcherError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            ResumeMatcherError::InvalidInput(msg) => {
                (StatusCode::BAD_REQUEST, "INVALID_INPUT", msg.clone())
            }
            ResumeMatcherError::UnsupportedFormat(msg) => (
                StatusCode::UNSUPPORTED_MEDIA_TYPE,
                "UNSUPPORTED_FORMAT",
                msg.clone(),
            ),
            ResumeMatcherError::ExtractionFailed(msg) => {
                tracing::warn!("Extraction failed: {msg}");
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    "EXTRACTION_FAILED",
                    "Could not read file".to_string(),
                )
            }
            ResumeMatcherError::ExtractionTimeout(_) => {
                tracing::warn!("{self}");
                (StatusCode::REQUEST_TIMEOUT, "EXTRACTION_TIMEOUT", self.to_string())
            }
            ResumeMatcherError::PayloadTooLarge(msg) => {
                (StatusCode::PAYLOAD_TOO_LARGE, "PAYLOAD_TOO_LARGE", msg.clone())
            }
            other => {
                tracing::error!("Internal error: {other:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}

impl From<MultipartError> for ResumeMatcherError {
    fn from(err: MultipartError) -> Self {
        if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
            ResumeMatcherError::PayloadTooLarge(err.body_text())
        } else {
            ResumeMatcherError::InvalidInput(format!("Malformed multipart request: {}", err.body_text()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let cases = [
            (ResumeMatcherError::InvalidInput("x".into()), StatusCode::BAD_REQUEST),
            (ResumeMatcherError::UnsupportedFormat("x".into()), StatusCode::UNSUPPORTED_MEDIA_TYPE),
            (ResumeMatcherError::ExtractionFailed("x".into()), StatusCode::UNPROCESSABLE_ENTITY),
            (ResumeMatcherError::ExtractionTimeout(30), StatusCode::REQUEST_TIMEOUT),
            (ResumeMatcherError::PayloadTooLarge("x".into()), StatusCode::PAYLOAD_TOO_LARGE),
            (ResumeMatcherError::Processing("x".into()), StatusCode::INTERNAL_SERVER_ERROR),
        ];

        for (error, status) in cases {
            assert_eq!(error.into_response().status(), status);
        }
    }
}
