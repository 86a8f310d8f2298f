//! Route handlers, one module per resource.

pub mod bookings;
pub mod items;
pub mod requests;
pub mod users;

use actix_web::{HttpRequest, HttpResponse};
use serde::Deserialize;
use uuid::Uuid;

use si_shared::types::Pagination;

use crate::handlers::error;

/// Header identifying the acting user on most endpoints
pub const USER_ID_HEADER: &str = "X-Sharer-User-Id";

/// Query parameters of the booking list endpoints
#[derive(Debug, Deserialize)]
pub struct StateQuery {
    pub state: Option<String>,
    #[serde(default)]
    pub from: u32,
    pub size: Option<u32>,
}

impl StateQuery {
    pub fn state(&self) -> &str {
        self.state.as_deref().unwrap_or("ALL")
    }
}

/// Query parameters of the item search endpoint
#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub text: String,
    #[serde(default)]
    pub from: u32,
    pub size: Option<u32>,
}

/// Query parameter of the booking decision endpoint
#[derive(Debug, Deserialize)]
pub struct ApprovedQuery {
    pub approved: Option<bool>,
}

/// Extract the acting user id from the `X-Sharer-User-Id` header
pub(crate) fn sharer_user_id(req: &HttpRequest) -> Result<Uuid, HttpResponse> {
    let value = req
        .headers()
        .get(USER_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| {
            error::bad_request(format!(
                "Required request header '{}' is not present",
                USER_ID_HEADER
            ))
        })?;

    Uuid::parse_str(value).map_err(|_| {
        error::bad_request(format!("Header '{}' must be a valid UUID", USER_ID_HEADER))
    })
}

/// Build a validated pagination from `from`/`size` query values
pub(crate) fn page_from(from: u32, size: Option<u32>) -> Result<Pagination, HttpResponse> {
    let page = Pagination::new(from, size);
    if !page.is_valid() {
        return Err(error::bad_request(
            "Pagination parameter 'size' must be positive",
        ));
    }
    Ok(page)
}
