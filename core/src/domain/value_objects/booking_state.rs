//! Booking query state filter.
//!
//! List endpoints filter bookings by a `state` keyword. Three of the
//! states are derived from the clock rather than stored: CURRENT, PAST
//! and FUTURE classify a booking by comparing `now` against its window.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::{Booking, BookingStatus};

/// State keyword accepted by booking list queries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum BookingState {
    /// Every booking regardless of time or status
    All,
    /// `start <= now <= end`
    Current,
    /// `end < now`
    Past,
    /// `start > now`
    Future,
    /// Stored status is WAITING
    Waiting,
    /// Stored status is REJECTED
    Rejected,
    /// Stored status is CANCELLED
    Cancelled,
}

impl BookingState {
    /// Parses a query-string value, case-insensitively
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_uppercase().as_str() {
            "ALL" => Some(BookingState::All),
            "CURRENT" => Some(BookingState::Current),
            "PAST" => Some(BookingState::Past),
            "FUTURE" => Some(BookingState::Future),
            "WAITING" => Some(BookingState::Waiting),
            "REJECTED" => Some(BookingState::Rejected),
            "CANCELLED" => Some(BookingState::Cancelled),
            _ => None,
        }
    }

    /// Canonical keyword form
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingState::All => "ALL",
            BookingState::Current => "CURRENT",
            BookingState::Past => "PAST",
            BookingState::Future => "FUTURE",
            BookingState::Waiting => "WAITING",
            BookingState::Rejected => "REJECTED",
            BookingState::Cancelled => "CANCELLED",
        }
    }

    /// Whether `booking` satisfies this state at instant `now`
    pub fn matches(&self, booking: &Booking, now: DateTime<Utc>) -> bool {
        match self {
            BookingState::All => true,
            BookingState::Current => booking.is_current(now),
            BookingState::Past => booking.is_expired(now),
            BookingState::Future => booking.is_future(now),
            BookingState::Waiting => booking.status == BookingStatus::Waiting,
            BookingState::Rejected => booking.status == BookingStatus::Rejected,
            BookingState::Cancelled => booking.status == BookingStatus::Cancelled,
        }
    }
}
