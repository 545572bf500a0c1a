//! Error responses for the collection endpoint.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

use crate::feedback::{FeedbackId, ValidationError};

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Feedback '{id}' not found")]
    NotFound { id: FeedbackId },

    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    #[error("Invalid feedback: {0}")]
    Validation(#[from] ValidationError),
}

impl ServerError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ServerError::NotFound { .. } => StatusCode::NOT_FOUND,
            ServerError::InvalidBody(_) => StatusCode::BAD_REQUEST,
            ServerError::Validation(_) => StatusCode::BAD_REQUEST,
        }
    }

    pub fn error_type(&self) -> &'static str {
        match self {
            ServerError::NotFound { .. } => "not_found",
            ServerError::InvalidBody(_) => "invalid_body",
            ServerError::Validation(_) => "validation_error",
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let body = serde_json::json!({
            "error": {
                "type": self.error_type(),
                "message": self.to_string(),
            }
        });
        (self.status_code(), Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_maps_to_404() {
        let err = ServerError::NotFound {
            id: FeedbackId::Number(9),
        };
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(err.error_type(), "not_found");
    }

    #[test]
    fn validation_maps_to_400() {
        let err = ServerError::from(ValidationError::EmptyText);
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            err.into_response().headers().get("content-type").unwrap(),
            "application/json"
        );
    }
}
