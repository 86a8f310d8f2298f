//! Assembled read models returned by the services.
//!
//! Entities hold foreign keys only; these views carry the related data
//! (names, comments, neighbouring bookings) a response body needs.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::entities::{Booking, Comment, Item, ItemRequest};

/// Condensed booking reference shown on an owner's item view
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortBookingInfo {
    pub id: Uuid,
    pub booker_id: Uuid,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl From<&Booking> for ShortBookingInfo {
    fn from(booking: &Booking) -> Self {
        Self {
            id: booking.id,
            booker_id: booking.booker_id,
            start: booking.start,
            end: booking.end,
        }
    }
}

/// Comment together with its author's display name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentView {
    pub comment: Comment,
    pub author_name: String,
}

/// Item together with its comments and, for the owner, the neighbouring
/// bookings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemView {
    pub item: Item,
    pub last_booking: Option<ShortBookingInfo>,
    pub next_booking: Option<ShortBookingInfo>,
    pub comments: Vec<CommentView>,
}

/// Booking together with the names a response body displays
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingView {
    pub booking: Booking,
    pub item_name: String,
    pub booker_name: String,
}

/// Request together with the items created against it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestView {
    pub request: ItemRequest,
    pub items: Vec<Item>,
}
