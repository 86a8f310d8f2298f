//! Gateway-side error responses.
//!
//! Requests rejected here never reach the core server; the envelope
//! matches the one the server produces.

use actix_web::HttpResponse;
use std::collections::HashMap;

use si_shared::errors::{error_codes, ErrorResponse};

/// 400 response for a missing or malformed request attribute
pub fn bad_request(message: impl Into<String>) -> HttpResponse {
    HttpResponse::BadRequest().json(ErrorResponse::new(error_codes::BAD_REQUEST, message.into()))
}

/// 400 response for an unknown booking state keyword
pub fn unknown_state(state: &str) -> HttpResponse {
    HttpResponse::BadRequest().json(ErrorResponse::new(
        error_codes::UNKNOWN_STATE,
        format!("Unknown state: {}", state),
    ))
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

    log::warn!("gateway rejected request: {:?}", field_errors);

    let mut response = ErrorResponse::new(error_codes::VALIDATION_ERROR, "Invalid request data");
    for (field, messages) in field_errors {
        response = response.add_detail(field, messages);
    }
    HttpResponse::BadRequest().json(response)
}
