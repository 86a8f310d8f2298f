//! Gateway-side request DTOs.
//!
//! The gateway owns its copies of the inbound bodies: they validate the
//! payload and re-serialize it unchanged for forwarding (absent PATCH
//! fields stay absent).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Body of `POST /users`
#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct CreateUserRequest {
    #[validate(length(min = 1, message = "User name must not be empty"))]
    pub name: String,

    #[validate(email(message = "Invalid email"))]
    pub email: String,
}

/// Body of `PATCH /users/{userId}`
#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct UpdateUserRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[validate(email(message = "Invalid email"))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// Body of `POST /items`
#[derive(Debug, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateItemRequest {
    #[validate(length(min = 1, message = "Item name must not be empty"))]
    pub name: String,

    #[validate(length(min = 1, message = "Item description must not be empty"))]
    pub description: String,

    pub available: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<Uuid>,
}

/// Body of `PATCH /items/{itemId}`
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateItemRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub available: Option<bool>,
}

/// Body of `POST /bookings`
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookItemRequest {
    pub item_id: Uuid,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl BookItemRequest {
    /// Date sanity checked at the edge before forwarding
    pub fn dates_are_sane(&self, now: DateTime<Utc>) -> bool {
        self.start >= now && self.end > self.start
    }
}

/// Body of `POST /items/{itemId}/comment`
#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct CreateCommentRequest {
    #[validate(length(min = 1, message = "Comment text must not be empty"))]
    pub text: String,
}

/// Body of `POST /requests`
#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct CreateRequestRequest {
    #[validate(length(min = 1, message = "Request description must not be empty"))]
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_booking_date_sanity() {
        let now = Utc::now();
        let request = BookItemRequest {
            item_id: Uuid::new_v4(),
            start: now + Duration::hours(1),
            end: now + Duration::hours(2),
        };
        assert!(request.dates_are_sane(now));

        let backwards = BookItemRequest {
            start: request.end,
            end: request.start,
            ..request
        };
        assert!(!backwards.dates_are_sane(now));

        let in_past = BookItemRequest {
            item_id: Uuid::new_v4(),
            start: now - Duration::hours(2),
            end: now - Duration::hours(1),
        };
        assert!(!in_past.dates_are_sane(now));
    }

    #[test]
    fn test_patch_bodies_skip_absent_fields() {
        let body = UpdateItemRequest {
            name: None,
            description: None,
            available: Some(false),
        };
        let json = serde_json::to_string(&body).unwrap();
        assert_eq!(json, r#"{"available":false}"#);
    }

    #[test]
    fn test_create_user_validation() {
        let valid = CreateUserRequest {
            name: "Alice".to_string(),
            email: "alice@example.com".to_string(),
        };
        assert!(valid.validate().is_ok());

        let invalid = CreateUserRequest {
            name: "".to_string(),
            email: "nope".to_string(),
        };
        let errors = invalid.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("name"));
        assert!(errors.field_errors().contains_key("email"));
    }
}
