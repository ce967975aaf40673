pub mod data;
pub mod lokasi;
pub mod user;

use actix_web::{HttpResponse, web};
use serde::Serialize;
use serde_json::Value;

use crate::error::ApiError;

/// Fixed `{message, data}` wrapper applied to every response except the
/// reading delete, which answers with a plain body.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub message: String,
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            message: "success".to_string(),
            data,
        }
    }
}

/// Rejects missing or malformed JSON body fields with a 400 in the envelope
/// shape instead of actix's bare default.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .error_handler(|err, _req| ApiError::Validation(err.to_string()).into())
}

/// Same treatment for non-numeric path ids.
pub fn path_config() -> web::PathConfig {
    web::PathConfig::default()
        .error_handler(|err, _req| ApiError::Validation(err.to_string()).into())
}

pub async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ApiResponse {
        message: "resource not found".to_string(),
        data: Value::Null,
    })
}
