// HTTP API Error Types
use axum::{
    http::{header, StatusCode},
    response::IntoResponse,
};

use crate::decode::DecodeError;

/// HTTP API error with appropriate status codes and client-friendly messages
#[derive(Debug)]
pub enum ApiError {
    // 400 Bad Request
    BadRequest(String),

    // 404 Not Found
    NotFound(String),

    // 413 Payload Too Large
    PayloadTooLarge(String),

    // 500 Internal Server Error
    InternalServerError(String),
}

impl ApiError {
    /// Get HTTP status code
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            ApiError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get client-safe error message
    pub fn message(&self) -> &str {
        match self {
            ApiError::BadRequest(msg) => msg,
            ApiError::NotFound(msg) => msg,
            ApiError::PayloadTooLarge(msg) => msg,
            ApiError::InternalServerError(msg) => msg,
        }
    }
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        ApiError::BadRequest(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        ApiError::NotFound(message.into())
    }

    pub fn payload_too_large(message: impl Into<String>) -> Self {
        ApiError::PayloadTooLarge(message.into())
    }

    pub fn internal_server_error(message: impl Into<String>) -> Self {
        ApiError::InternalServerError(message.into())
    }

    pub fn missing_schema_name() -> Self {
        ApiError::not_found("Missing schema name")
    }

    pub fn schema_not_found(name: &str) -> Self {
        ApiError::not_found(format!("Schema not found: {}", name))
    }

    pub fn unknown_endpoint(segment: &str) -> Self {
        ApiError::not_found(format!("Unknown endpoint: {}", segment))
    }
}

impl From<DecodeError> for ApiError {
    fn from(err: DecodeError) -> Self {
        match err {
            DecodeError::TooLarge { .. } => ApiError::payload_too_large(err.to_string()),
            DecodeError::Read(_) => {
                tracing::warn!("Request body read failed: {}", err);
                ApiError::bad_request(err.to_string())
            }
            DecodeError::Empty | DecodeError::Yaml(_) | DecodeError::Json(_) => {
                ApiError::bad_request(err.to_string())
            }
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for ApiError {}

// Plain-text, newline-terminated body
impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        (
            self.status_code(),
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            format!("{}\n", self.message()),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_errors_are_not_found() {
        assert_eq!(ApiError::missing_schema_name().status_code(), StatusCode::NOT_FOUND);
        assert_eq!(ApiError::schema_not_found("demo").message(), "Schema not found: demo");
        assert_eq!(ApiError::unknown_endpoint("bar").message(), "Unknown endpoint: bar");
    }

    #[test]
    fn test_decode_errors_map_to_client_errors() {
        let too_large: ApiError = DecodeError::TooLarge { limit: 4 }.into();
        assert_eq!(too_large.status_code(), StatusCode::PAYLOAD_TOO_LARGE);

        let empty: ApiError = DecodeError::Empty.into();
        assert_eq!(empty.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(empty.to_string(), "request body is empty");
    }

    #[test]
    fn test_response_is_plain_text() {
        let response = ApiError::internal_server_error("Schema encoding error").into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "text/plain; charset=utf-8"
        );
    }
}
