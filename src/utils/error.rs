//! Error handling for the dashboard service
//!
//! This module defines all error types used throughout the service.

use actix_web::{HttpResponse, ResponseError};
use thiserror::Error;

/// Result type alias for the dashboard service
pub type Result<T> = std::result::Result<T, DashboardError>;

/// Main error type for the dashboard service
#[derive(Error, Debug)]
pub enum DashboardError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// HTTP client errors
    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Session source errors
    #[error("Session source error: {0}")]
    Sessions(String),

    /// Internal server errors
    #[error("Internal server error: {0}")]
    Internal(String),

    /// Server errors
    #[error("Server error: {0}")]
    Server(String),
}

impl ResponseError for DashboardError {
    fn error_response(&self) -> HttpResponse {
        let (status_code, error_code, message) = match self {
            DashboardError::Config(_) => (
                actix_web::http::StatusCode::INTERNAL_SERVER_ERROR,
                "CONFIG_ERROR",
                self.to_string(),
            ),
            DashboardError::Validation(_) => (
                actix_web::http::StatusCode::BAD_REQUEST,
                "VALIDATION_ERROR",
                self.to_string(),
            ),
            DashboardError::HttpClient(_) => (
                actix_web::http::StatusCode::BAD_GATEWAY,
                "UPSTREAM_ERROR",
                self.to_string(),
            ),
            DashboardError::Sessions(_) => (
                actix_web::http::StatusCode::BAD_GATEWAY,
                "SESSIONS_ERROR",
                self.to_string(),
            ),
            _ => (
                actix_web::http::StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                "An internal error occurred".to_string(),
            ),
        };

        let error_response = ErrorResponse {
            error: ErrorDetail {
                code: error_code.to_string(),
                message,
                timestamp: chrono::Utc::now().timestamp(),
            },
        };

        HttpResponse::build(status_code).json(error_response)
    }
}

/// Standard error response format
#[derive(serde::Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

/// Error detail structure
#[derive(serde::Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    pub timestamp: i64,
}

/// Helper functions for creating specific errors
impl DashboardError {
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config(message.into())
    }

    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation(message.into())
    }

    pub fn sessions<S: Into<String>>(message: S) -> Self {
        Self::Sessions(message.into())
    }

    pub fn server<S: Into<String>>(message: S) -> Self {
        Self::Server(message.into())
    }
}
