//! Error types for the lapak services

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, LapakError>;

#[derive(Error, Debug)]
pub enum LapakError {
    /// A required request field is missing or empty.
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl LapakError {
    pub fn status(&self) -> StatusCode {
        match self {
            LapakError::Validation(_) => StatusCode::BAD_REQUEST,
            LapakError::NotFound(_) => StatusCode::NOT_FOUND,
            LapakError::Database(_) | LapakError::Config(_) | LapakError::Io(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for LapakError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match self {
            LapakError::Validation(msg) | LapakError::NotFound(msg) => msg,
            LapakError::Database(e) => {
                tracing::error!("Query error: {}", e);
                "database error".to_string()
            }
            other => {
                tracing::error!("Internal error: {}", other);
                "internal error".to_string()
            }
        };
        (status, message).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            LapakError::Validation("text is required".into()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            LapakError::NotFound("todo 7 not found".into()).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            LapakError::Database(sqlx::Error::RowNotFound).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[tokio::test]
    async fn test_database_error_hides_details() {
        let response = LapakError::Database(sqlx::Error::PoolTimedOut).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = axum::body::to_bytes(response.into_body(), 1024)
            .await
            .unwrap();
        assert_eq!(&body[..], b"database error");
    }
}
