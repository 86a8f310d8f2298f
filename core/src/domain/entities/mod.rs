//! Domain entities for the ShareIt system

pub mod booking;
pub mod comment;
pub mod item;
pub mod item_request;
pub mod user;

pub use booking::{Booking, BookingStatus};
pub use comment::Comment;
pub use item::Item;
pub use item_request::ItemRequest;
pub use user::User;
