use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use thiserror::Error;

use crate::models::ErrorResponse;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    DatabaseError(#[from] sea_orm::DbErr),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("External API error: {0}")]
    ExternalApiError(String),

    #[error("Config error: {0}")]
    ConfigError(String),

    #[error("Internal server error: {0}")]
    InternalError(String),

    #[error("HTTP request error: {0}")]
    ReqwestError(#[from] reqwest::Error),

    #[error("JSON serialization/deserialization error: {0}")]
    SerdeJsonError(#[from] serde_json::Error),
}

impl AppError {
    /// 请求参数错误（缺少或非法的 month 等），对应 400；其余均为依赖失败，对应 500
    pub fn is_invalid_request(&self) -> bool {
        matches!(self, AppError::ValidationError(_))
    }

    /// 生成带有操作上下文的错误响应，例如 "Error fetching statistics"。
    ///
    /// 参数错误只返回 `{error}`，依赖失败返回 `{error, details}`，details 为底层错误信息。
    pub fn response_with_context(&self, context: &str) -> HttpResponse {
        match self {
            AppError::ValidationError(msg) => {
                log::warn!("Validation error: {msg}");
                HttpResponse::build(StatusCode::BAD_REQUEST).json(ErrorResponse::new(msg.clone()))
            }
            AppError::DatabaseError(err) => {
                log::error!("{context}: database error: {err}");
                HttpResponse::build(StatusCode::INTERNAL_SERVER_ERROR)
                    .json(ErrorResponse::with_details(context, err.to_string()))
            }
            AppError::ExternalApiError(msg) => {
                log::error!("{context}: external API error: {msg}");
                HttpResponse::build(StatusCode::INTERNAL_SERVER_ERROR)
                    .json(ErrorResponse::with_details(context, msg.clone()))
            }
            _ => {
                log::error!("{context}: {self}");
                HttpResponse::build(StatusCode::INTERNAL_SERVER_ERROR)
                    .json(ErrorResponse::with_details(context, self.to_string()))
            }
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        if self.is_invalid_request() {
            StatusCode::BAD_REQUEST
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }

    fn error_response(&self) -> HttpResponse {
        self.response_with_context("Internal server error")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;

    #[actix_web::test]
    async fn test_validation_error_is_bad_request_without_details() {
        let err = AppError::ValidationError("Month parameter is required".into());
        let resp = err.response_with_context("Error fetching statistics");
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let bytes = to_bytes(resp.into_body()).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["error"], "Month parameter is required");
        assert!(body.get("details").is_none());
    }

    #[actix_web::test]
    async fn test_dependency_failure_carries_context_and_details() {
        let err = AppError::ExternalApiError("No data fetched from the third-party API".into());
        let resp = err.response_with_context("Error initializing database");
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = to_bytes(resp.into_body()).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["error"], "Error initializing database");
        assert_eq!(body["details"], "No data fetched from the third-party API");
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(
            AppError::ValidationError("x".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::InternalError("x".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[actix_web::test]
    async fn test_database_error_is_internal_error_with_details() {
        let err = AppError::DatabaseError(sea_orm::DbErr::Custom("pool timed out".into()));
        let resp = err.response_with_context("Error fetching statistics");
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = to_bytes(resp.into_body()).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["error"], "Error fetching statistics");
        assert!(body["details"].as_str().unwrap().contains("pool timed out"));
    }
}
