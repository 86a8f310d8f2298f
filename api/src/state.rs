//! Shared application state handed to every handler.

use std::sync::Arc;

use si_core::repositories::{
    BookingRepository, CommentRepository, ItemRepository, RequestRepository, UserRepository,
};
use si_core::services::{BookingService, ItemService, RequestService, UserService};

/// Application state that holds the business services
///
/// Generic over the repository traits so that tests can wire in the
/// in-memory mocks while production uses the MySQL implementations.
pub struct AppState<U, I, B, C, R>
where
    U: UserRepository,
    I: ItemRepository,
    B: BookingRepository,
    C: CommentRepository,
    R: RequestRepository,
{
    pub user_service: Arc<UserService<U>>,
    pub item_service: Arc<ItemService<I, U, B, C>>,
    pub booking_service: Arc<BookingService<B, I, U>>,
    pub request_service: Arc<RequestService<R, U, I>>,
}

impl<U, I, B, C, R> AppState<U, I, B, C, R>
where
    U: UserRepository,
    I: ItemRepository,
    B: BookingRepository,
    C: CommentRepository,
    R: RequestRepository,
{
    /// Wire the services from the repository implementations
    pub fn new(
        user_repository: Arc<U>,
        item_repository: Arc<I>,
        booking_repository: Arc<B>,
        comment_repository: Arc<C>,
        request_repository: Arc<R>,
    ) -> Self {
        Self {
            user_service: Arc::new(UserService::new(user_repository.clone())),
            item_service: Arc::new(ItemService::new(
                item_repository.clone(),
                user_repository.clone(),
                booking_repository.clone(),
                comment_repository,
            )),
            booking_service: Arc::new(BookingService::new(
                booking_repository,
                item_repository.clone(),
                user_repository.clone(),
            )),
            request_service: Arc::new(RequestService::new(
                request_repository,
                user_repository,
                item_repository,
            )),
        }
    }
}
