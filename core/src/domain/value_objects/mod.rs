//! Value objects used across services and transports

pub mod booking_state;
pub mod views;

pub use booking_state::BookingState;
pub use views::{BookingView, CommentView, ItemView, RequestView, ShortBookingInfo};
