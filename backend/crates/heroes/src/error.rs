//! Heroes Error Types
//!
//! This module provides heroes-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{
    app_error::{AppError, ErrorBody},
    kind::ErrorKind,
};
use std::fmt;
use thiserror::Error;

use crate::domain::value_objects::ValidationError;

/// Heroes-specific result type alias
pub type HeroesResult<T> = Result<T, HeroesError>;

/// Entity referenced by a new association
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferencedEntity {
    Hero,
    Power,
}

impl fmt::Display for ReferencedEntity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReferencedEntity::Hero => f.write_str("Hero"),
            ReferencedEntity::Power => f.write_str("Power"),
        }
    }
}

/// Heroes-specific error variants
#[derive(Debug, Error)]
pub enum HeroesError {
    /// Requested hero does not exist
    #[error("Hero not found")]
    HeroNotFound,

    /// Requested power does not exist
    #[error("Power not found")]
    PowerNotFound,

    /// Association points at a missing hero or power
    #[error("{0} not found")]
    MissingReference(ReferencedEntity),

    /// Invalid request input, detected before any write
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Failure inside a write transaction; the transaction was rolled back
    #[error("{0}")]
    Commit(#[source] sqlx::Error),

    /// Database error on a read path
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl HeroesError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.kind().status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            HeroesError::HeroNotFound
            | HeroesError::PowerNotFound
            | HeroesError::MissingReference(_) => ErrorKind::NotFound,
            HeroesError::Validation(_) => ErrorKind::BadRequest,
            HeroesError::Database(
                sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_),
            ) => ErrorKind::ServiceUnavailable,
            HeroesError::Database(_) => ErrorKind::InternalServerError,
            HeroesError::Commit(_) | HeroesError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            HeroesError::Commit(e) => {
                tracing::error!(error = %e, "Write rolled back");
            }
            HeroesError::Database(e) => {
                tracing::error!(error = %e, "Heroes database error");
            }
            HeroesError::Internal(msg) => {
                tracing::error!(message = %msg, "Heroes internal error");
            }
            _ => {
                tracing::debug!(error = %self, "Heroes request rejected");
            }
        }
    }
}

impl From<HeroesError> for AppError {
    fn from(err: HeroesError) -> Self {
        match err {
            HeroesError::HeroNotFound | HeroesError::PowerNotFound => {
                AppError::not_found(err.to_string()).with_body(ErrorBody::Single)
            }
            HeroesError::MissingReference(_) => AppError::not_found(err.to_string()),
            HeroesError::Validation(e) => AppError::bad_request(e.to_string()),
            HeroesError::Commit(e) => AppError::internal(e.to_string()).with_source(e),
            HeroesError::Database(e) => AppError::from(e),
            HeroesError::Internal(msg) => AppError::internal(msg),
        }
    }
}

impl IntoResponse for HeroesError {
    fn into_response(self) -> Response {
        self.log();
        AppError::from(self).into_response()
    }
}
