//! Item request DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use si_core::domain::value_objects::RequestView;

use super::item::ItemDto;

/// Body of `POST /requests`
#[derive(Debug, Deserialize, Validate)]
pub struct CreateRequestRequest {
    #[validate(length(min = 1, message = "Request description must not be empty"))]
    pub description: String,
}

/// Item request response body with its fulfillment list
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemRequestDto {
    pub id: Uuid,
    pub description: String,
    pub requester_id: Uuid,
    pub created: DateTime<Utc>,
    pub items: Vec<ItemDto>,
}

impl From<RequestView> for ItemRequestDto {
    fn from(view: RequestView) -> Self {
        Self {
            id: view.request.id,
            description: view.request.description,
            requester_id: view.request.requester_id,
            created: view.request.created,
            items: view.items.into_iter().map(ItemDto::from).collect(),
        }
    }
}
