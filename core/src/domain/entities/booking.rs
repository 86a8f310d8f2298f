//! Booking entity and its status lifecycle.
//!
//! A booking reserves an item for a time range. It is created `Waiting`;
//! the item owner may approve or reject it, the booker may cancel it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stored booking status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum BookingStatus {
    /// Awaiting the owner's decision
    Waiting,
    /// Approved by the item owner
    Approved,
    /// Rejected by the item owner
    Rejected,
    /// Cancelled by the booker
    Cancelled,
}

impl BookingStatus {
    /// Stable string form used in the database and in query filters
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Waiting => "WAITING",
            BookingStatus::Approved => "APPROVED",
            BookingStatus::Rejected => "REJECTED",
            BookingStatus::Cancelled => "CANCELLED",
        }
    }

    /// Parses the stored string form
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "WAITING" => Some(BookingStatus::Waiting),
            "APPROVED" => Some(BookingStatus::Approved),
            "REJECTED" => Some(BookingStatus::Rejected),
            "CANCELLED" => Some(BookingStatus::Cancelled),
            _ => None,
        }
    }
}

/// A reservation of an item for a time range
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    /// Unique identifier for the booking
    pub id: Uuid,

    /// Start of the reservation
    pub start: DateTime<Utc>,

    /// End of the reservation, strictly after `start`
    pub end: DateTime<Utc>,

    /// The booked item
    pub item_id: Uuid,

    /// The user who placed the booking; never the item owner
    pub booker_id: Uuid,

    /// Current lifecycle status
    pub status: BookingStatus,
}

impl Booking {
    /// Creates a new booking in `Waiting` status
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>, item_id: Uuid, booker_id: Uuid) -> Self {
        Self {
            id: Uuid::new_v4(),
            start,
            end,
            item_id,
            booker_id,
            status: BookingStatus::Waiting,
        }
    }

    /// Whether the reservation window has fully passed
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.end < now
    }

    /// Whether `now` falls inside the reservation window
    pub fn is_current(&self, now: DateTime<Utc>) -> bool {
        self.start <= now && now <= self.end
    }

    /// Whether the reservation is entirely in the future
    pub fn is_future(&self, now: DateTime<Utc>) -> bool {
        self.start > now
    }
}
