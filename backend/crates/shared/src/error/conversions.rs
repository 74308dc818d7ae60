//! Error conversions - From implementations for common error types
//!
//! Provides automatic conversion from storage errors to [`AppError`] and the
//! axum response rendering.

#[allow(unused_imports)]
use super::app_error::AppError;

// ============================================================================
// SQLx conversions (feature-gated)
// ============================================================================

#[cfg(feature = "sqlx")]
impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::RowNotFound => AppError::not_found("Record not found").with_source(err),
            sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed => {
                AppError::service_unavailable("Database connection pool exhausted").with_source(err)
            }
            sqlx::Error::Database(db_err) => {
                use sqlx::error::ErrorKind as DbErrorKind;

                let app_err = match db_err.kind() {
                    DbErrorKind::UniqueViolation => AppError::conflict("Duplicate key value"),
                    DbErrorKind::ForeignKeyViolation => AppError::conflict("Foreign key violation"),
                    DbErrorKind::NotNullViolation => AppError::bad_request("Required field is null"),
                    DbErrorKind::CheckViolation => AppError::bad_request("Check constraint violation"),
                    _ => match db_err.code().as_deref() {
                        // SQLITE_BUSY / SQLITE_LOCKED
                        Some("5") | Some("6") => AppError::service_unavailable("Database is locked"),
                        _ => AppError::internal("Database error"),
                    },
                };
                app_err.with_source(err)
            }
            sqlx::Error::Io(_) => {
                AppError::service_unavailable("Database connection error").with_source(err)
            }
            sqlx::Error::Protocol(_) => {
                AppError::internal("Database protocol error").with_source(err)
            }
            _ => AppError::internal("Database error").with_source(err),
        }
    }
}

// ============================================================================
// Axum conversions (feature-gated)
// ============================================================================

#[cfg(feature = "axum")]
impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        use axum::Json;
        use http::StatusCode;

        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        (status, Json(self.to_json())).into_response()
    }
}

#[cfg(test)]
mod tests {
    #[cfg(feature = "sqlx")]
    #[test]
    fn test_sqlx_error_conversion() {
        use super::AppError;
        use crate::error::kind::ErrorKind;

        let app_err: AppError = sqlx::Error::RowNotFound.into();
        assert_eq!(app_err.kind(), ErrorKind::NotFound);

        let app_err: AppError = sqlx::Error::PoolTimedOut.into();
        assert_eq!(app_err.kind(), ErrorKind::ServiceUnavailable);

        let app_err: AppError = sqlx::Error::Protocol("bad frame".into()).into();
        assert_eq!(app_err.kind(), ErrorKind::InternalServerError);
    }

    #[cfg(feature = "axum")]
    #[test]
    fn test_into_response_status() {
        use super::AppError;
        use crate::error::app_error::ErrorBody;
        use axum::response::IntoResponse;

        let response = AppError::not_found("Hero not found")
            .with_body(ErrorBody::Single)
            .into_response();
        assert_eq!(response.status(), http::StatusCode::NOT_FOUND);

        let response = AppError::internal("disk I/O error").into_response();
        assert_eq!(response.status(), http::StatusCode::INTERNAL_SERVER_ERROR);
    }
}
