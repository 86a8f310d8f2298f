//! MySQL repository implementations

pub mod booking_repository_impl;
pub mod comment_repository_impl;
pub mod item_repository_impl;
pub mod request_repository_impl;
pub mod user_repository_impl;

pub use booking_repository_impl::MySqlBookingRepository;
pub use comment_repository_impl::MySqlCommentRepository;
pub use item_repository_impl::MySqlItemRepository;
pub use request_repository_impl::MySqlRequestRepository;
pub use user_repository_impl::MySqlUserRepository;
