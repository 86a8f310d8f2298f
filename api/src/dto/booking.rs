//! Booking DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use si_core::domain::entities::BookingStatus;
use si_core::domain::value_objects::BookingView;

/// Body of `POST /bookings`
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingRequest {
    pub item_id: Uuid,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

/// Item reference inside a booking response
#[derive(Debug, Serialize, Deserialize)]
pub struct ItemRefDto {
    pub id: Uuid,
    pub name: String,
}

/// User reference inside a booking response
#[derive(Debug, Serialize, Deserialize)]
pub struct UserRefDto {
    pub id: Uuid,
    pub name: String,
}

/// Booking response body
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingDto {
    pub id: Uuid,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub status: BookingStatus,
    pub item: ItemRefDto,
    pub booker: UserRefDto,
}

impl From<BookingView> for BookingDto {
    fn from(view: BookingView) -> Self {
        Self {
            id: view.booking.id,
            start: view.booking.start,
            end: view.booking.end,
            status: view.booking.status,
            item: ItemRefDto {
                id: view.booking.item_id,
                name: view.item_name,
            },
            booker: UserRefDto {
                id: view.booking.booker_id,
                name: view.booker_name,
            },
        }
    }
}
