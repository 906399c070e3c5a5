//! HTTP Error Handling

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::application::ApplicationError;

/// 统一错误响应格式: `{success: false, error, message}`
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: u16,
    pub message: &'static str,
}

impl ErrorResponse {
    pub fn new(status: StatusCode, message: &'static str) -> Self {
        Self {
            success: false,
            error: status.as_u16(),
            message,
        }
    }
}

/// 对外错误信息，内部细节只写日志
pub mod message {
    pub const NOT_FOUND: &str = "Resource Not Found";
    pub const METHOD_NOT_ALLOWED: &str = "Method Not Allowed";
    pub const UNPROCESSABLE: &str = "Unprocessable Entity";
    pub const NO_QUESTIONS_AVAILABLE: &str = "No Questions Available";
    pub const INTERNAL_ERROR: &str = "Internal Server Error";
}

/// API 错误
#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
    MethodNotAllowed,
    Unprocessable(String),
    NoQuestionsAvailable,
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::NotFound(detail) => {
                tracing::warn!(error = %detail, "Resource not found");
                (StatusCode::NOT_FOUND, message::NOT_FOUND)
            }
            ApiError::MethodNotAllowed => {
                (StatusCode::METHOD_NOT_ALLOWED, message::METHOD_NOT_ALLOWED)
            }
            ApiError::Unprocessable(detail) => {
                tracing::warn!(error = %detail, "Unprocessable request");
                (StatusCode::UNPROCESSABLE_ENTITY, message::UNPROCESSABLE)
            }
            ApiError::NoQuestionsAvailable => {
                tracing::info!("Quiz has no remaining questions");
                (StatusCode::NOT_FOUND, message::NO_QUESTIONS_AVAILABLE)
            }
            ApiError::Internal(detail) => {
                tracing::error!(error = %detail, "Internal server error");
                (StatusCode::INTERNAL_SERVER_ERROR, message::INTERNAL_ERROR)
            }
        };

        (status, Json(ErrorResponse::new(status, message))).into_response()
    }
}

impl From<ApplicationError> for ApiError {
    fn from(e: ApplicationError) -> Self {
        match e {
            ApplicationError::NotFound { .. } => ApiError::NotFound(e.to_string()),
            ApplicationError::NoQuestionsAvailable => ApiError::NoQuestionsAvailable,
            ApplicationError::ValidationError(msg) => ApiError::Unprocessable(msg),
            ApplicationError::ConstraintViolation(msg) => ApiError::Unprocessable(msg),
            ApplicationError::RepositoryError(msg) => ApiError::Internal(msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use serde_json::{json, Value};

    async fn body_of(error: ApiError) -> (StatusCode, Value) {
        let response = error.into_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_not_found_envelope() {
        let (status, body) = body_of(ApiError::NotFound("Question not found: 9".into())).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(
            body,
            json!({"success": false, "error": 404, "message": "Resource Not Found"})
        );
    }

    #[tokio::test]
    async fn test_internal_detail_not_leaked() {
        let (status, body) = body_of(ApiError::Internal("disk I/O error".into())).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["message"], "Internal Server Error");
    }

    #[test]
    fn test_application_error_mapping() {
        assert!(matches!(
            ApiError::from(ApplicationError::not_found("Question", 1)),
            ApiError::NotFound(_)
        ));
        assert!(matches!(
            ApiError::from(ApplicationError::ConstraintViolation("NOT NULL".into())),
            ApiError::Unprocessable(_)
        ));
        assert!(matches!(
            ApiError::from(ApplicationError::NoQuestionsAvailable),
            ApiError::NoQuestionsAvailable
        ));
        assert!(matches!(
            ApiError::from(ApplicationError::RepositoryError("locked".into())),
            ApiError::Internal(_)
        ));
    }
}
