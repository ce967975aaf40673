use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use log::error;
use sea_orm::{DbErr, SqlErr};
use serde_json::Value;
use thiserror::Error;

use crate::api::ApiResponse;

/// Failure kinds surfaced to clients as distinct status codes.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0} not found")]
    NotFound(&'static str),
    #[error("{0}")]
    Validation(String),
    #[error("storage constraint violated: {0}")]
    Conflict(String),
    #[error("database error: {0}")]
    Database(DbErr),
    #[error("password hashing failed: {0}")]
    PasswordHash(argon2::password_hash::Error),
}

impl From<DbErr> for ApiError {
    fn from(err: DbErr) -> Self {
        // Constraint violations are client-addressable, the rest is ours
        match err.sql_err().and_then(constraint_conflict) {
            Some(conflict) => conflict,
            None => ApiError::Database(err),
        }
    }
}

fn constraint_conflict(err: SqlErr) -> Option<ApiError> {
    match err {
        SqlErr::UniqueConstraintViolation(msg) | SqlErr::ForeignKeyConstraintViolation(msg) => {
            Some(ApiError::Conflict(msg))
        }
        _ => None,
    }
}

impl From<argon2::password_hash::Error> for ApiError {
    fn from(err: argon2::password_hash::Error) -> Self {
        ApiError::PasswordHash(err)
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::Database(_) | ApiError::PasswordHash(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        if self.status_code().is_server_error() {
            error!("{self}");
        }
        HttpResponse::build(self.status_code()).json(ApiResponse {
            message: self.to_string(),
            data: Value::Null,
        })
    }
}
