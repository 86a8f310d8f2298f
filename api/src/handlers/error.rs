//! Domain error to HTTP response mapping.
//!
//! Every handler funnels service errors through [`to_response`] so the
//! status codes and the JSON envelope stay uniform across endpoints.

use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use std::collections::HashMap;

use si_core::errors::DomainError;
use si_shared::errors::{error_codes, ErrorResponse};

/// Convert a domain error to the matching HTTP response
pub fn to_response(error: &DomainError) -> HttpResponse {
    let (status, code) = match error {
        DomainError::NotFound { .. } => (StatusCode::NOT_FOUND, error_codes::NOT_FOUND),
        DomainError::Validation { .. } => (StatusCode::BAD_REQUEST, error_codes::VALIDATION_ERROR),
        DomainError::UnknownState { .. } => (StatusCode::BAD_REQUEST, error_codes::UNKNOWN_STATE),
        DomainError::Forbidden { .. } => (StatusCode::FORBIDDEN, error_codes::FORBIDDEN),
        DomainError::Conflict { .. } => (StatusCode::CONFLICT, error_codes::CONFLICT),
        DomainError::Database(_) => (StatusCode::INTERNAL_SERVER_ERROR, error_codes::DATABASE_ERROR),
        DomainError::Internal { .. } => {
            (StatusCode::INTERNAL_SERVER_ERROR, error_codes::INTERNAL_ERROR)
        }
    };

    if status.is_server_error() {
        log::error!("request failed: {}", error);
    } else {
        log::warn!("request rejected: {}", error);
    }

    HttpResponse::build(status).json(ErrorResponse::new(code, error.to_string()))
}

/// 400 response for a missing or malformed request attribute
pub fn bad_request(message: impl Into<String>) -> HttpResponse {
    HttpResponse::BadRequest().json(ErrorResponse::new(error_codes::BAD_REQUEST, message.into()))
}

/// 400 response carrying `validator` field errors in the details map
pub fn validation_failed(errors: &validator::ValidationErrors) -> HttpResponse {
    let mut field_errors: HashMap<String, Vec<String>> = HashMap::new();
    for (field, errors) in errors.field_errors() {
        let messages: Vec<String> = errors
            .iter()
            .map(|e| {
                e.message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| e.code.to_string())
            })
            .collect();
        field_errors.insert(field.to_string(), messages);
    }

    log::warn!("request validation failed: {:?}", field_errors);

    let mut response = ErrorResponse::new(error_codes::VALIDATION_ERROR, "Invalid request data");
    for (field, messages) in field_errors {
        response = response.add_detail(field, messages);
    }
    HttpResponse::BadRequest().json(response)
}
