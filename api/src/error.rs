//! Unified error types for the Shop API
//!
//! This module defines error types for each layer:
//! - `DomainError`: Repository and business rule errors
//! - `AppError`: Application layer errors (wraps domain errors for HTTP responses)

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// The kind of entity a not-found or conflict refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    User,
    Order,
    Product,
    Category,
    Supplier,
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntityKind::User => write!(f, "user"),
            EntityKind::Order => write!(f, "order"),
            EntityKind::Product => write!(f, "product"),
            EntityKind::Category => write!(f, "category"),
            EntityKind::Supplier => write!(f, "supplier"),
        }
    }
}

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("{0} not found")]
    NotFound(EntityKind),

    #[error("{0} already exists")]
    AlreadyExists(EntityKind),

    /// Infrastructure failure reported by a repository. Never reinterpreted.
    #[error("Database error: {0}")]
    Database(String),
}

impl DomainError {
    pub fn is_not_found(&self, kind: EntityKind) -> bool {
        matches!(self, DomainError::NotFound(k) if *k == kind)
    }
}

/// Application layer errors - used by HTTP handlers
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Domain(#[from] DomainError),

    #[error("Invalid request: {0}")]
    BadRequest(String),
}

impl AppError {
    /// The wrapped domain error, if any
    pub fn domain(&self) -> Option<&DomainError> {
        match self {
            AppError::Domain(e) => Some(e),
            _ => None,
        }
    }
}

/// Error response body for JSON responses
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, details) = match &self {
            AppError::Domain(e @ DomainError::NotFound(_)) => {
                (StatusCode::NOT_FOUND, e.to_string(), None)
            }
            AppError::Domain(e @ DomainError::AlreadyExists(_)) => {
                (StatusCode::CONFLICT, e.to_string(), None)
            }
            AppError::Domain(DomainError::Database(msg)) => {
                tracing::error!("Database error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                    None,
                )
            }
            AppError::BadRequest(msg) => (
                StatusCode::BAD_REQUEST,
                "Bad request".to_string(),
                Some(msg.clone()),
            ),
        };

        let body = Json(ErrorResponse { error, details });

        (status, body).into_response()
    }
}
