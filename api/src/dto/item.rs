//! Item and comment DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use si_core::domain::entities::Item;
use si_core::domain::value_objects::{CommentView, ItemView, ShortBookingInfo};

/// Body of `POST /items`
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateItemRequest {
    #[validate(length(min = 1, message = "Item name must not be empty"))]
    pub name: String,

    #[validate(length(min = 1, message = "Item description must not be empty"))]
    pub description: String,

    pub available: bool,

    /// Links the new item to an existing item request
    pub request_id: Option<Uuid>,
}

/// Body of `PATCH /items/{itemId}`; absent fields keep their values
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateItemRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub available: Option<bool>,
}

/// Body of `POST /items/{itemId}/comment`
#[derive(Debug, Deserialize, Validate)]
pub struct CreateCommentRequest {
    #[validate(length(min = 1, message = "Comment text must not be empty"))]
    pub text: String,
}

/// Condensed booking reference on an owner's item view
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortBookingDto {
    pub id: Uuid,
    pub booker_id: Uuid,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl From<ShortBookingInfo> for ShortBookingDto {
    fn from(info: ShortBookingInfo) -> Self {
        Self {
            id: info.id,
            booker_id: info.booker_id,
            start: info.start,
            end: info.end,
        }
    }
}

/// Comment response body
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentDto {
    pub id: Uuid,
    pub text: String,
    pub author_name: String,
    pub created: DateTime<Utc>,
}

impl From<CommentView> for CommentDto {
    fn from(view: CommentView) -> Self {
        Self {
            id: view.comment.id,
            text: view.comment.text,
            author_name: view.author_name,
            created: view.comment.created,
        }
    }
}

/// Item response body
///
/// `last_booking`/`next_booking` are present only on the owner's view.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemDto {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub available: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_booking: Option<ShortBookingDto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_booking: Option<ShortBookingDto>,
    #[serde(default)]
    pub comments: Vec<CommentDto>,
}

impl From<ItemView> for ItemDto {
    fn from(view: ItemView) -> Self {
        Self {
            id: view.item.id,
            name: view.item.name,
            description: view.item.description,
            available: view.item.available,
            request_id: view.item.request_id,
            last_booking: view.last_booking.map(ShortBookingDto::from),
            next_booking: view.next_booking.map(ShortBookingDto::from),
            comments: view.comments.into_iter().map(CommentDto::from).collect(),
        }
    }
}

impl From<Item> for ItemDto {
    fn from(item: Item) -> Self {
        Self {
            id: item.id,
            name: item.name,
            description: item.description,
            available: item.available,
            request_id: item.request_id,
            last_booking: None,
            next_booking: None,
            comments: Vec::new(),
        }
    }
}
