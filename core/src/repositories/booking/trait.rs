//! Booking repository trait defining the interface for booking persistence.
//!
//! State-filtered queries take the caller's `now` so that the derived
//! CURRENT/PAST/FUTURE classification is computed against one instant.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use si_shared::types::Pagination;
use uuid::Uuid;

use crate::domain::entities::Booking;
use crate::domain::value_objects::BookingState;
use crate::errors::DomainResult;

/// Repository trait for Booking entity persistence operations
#[async_trait]
pub trait BookingRepository: Send + Sync {
    /// Find a booking by its unique identifier
    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<Booking>>;

    /// Persist a new booking
    async fn create(&self, booking: Booking) -> DomainResult<Booking>;

    /// Update an existing booking (status transitions)
    ///
    /// # Returns
    /// * `Err(DomainError::NotFound)` - No booking with the given id
    async fn update(&self, booking: Booking) -> DomainResult<Booking>;

    /// Bookings placed by `booker_id` satisfying `state` at `now`,
    /// sorted by start descending, paginated
    async fn find_by_booker(
        &self,
        booker_id: Uuid,
        state: BookingState,
        now: DateTime<Utc>,
        page: Pagination,
    ) -> DomainResult<Vec<Booking>>;

    /// Bookings of the given items satisfying `state` at `now`,
    /// sorted by start descending, paginated
    async fn find_by_items(
        &self,
        item_ids: &[Uuid],
        state: BookingState,
        now: DateTime<Utc>,
        page: Pagination,
    ) -> DomainResult<Vec<Booking>>;

    /// The latest booking of `item_id` already started at `now`
    async fn find_last_for_item(
        &self,
        item_id: Uuid,
        now: DateTime<Utc>,
    ) -> DomainResult<Option<Booking>>;

    /// The earliest booking of `item_id` starting after `now`
    async fn find_next_for_item(
        &self,
        item_id: Uuid,
        now: DateTime<Utc>,
    ) -> DomainResult<Option<Booking>>;

    /// An approved booking of `item_id` by `booker_id` that ended before
    /// `now`, if any; gates comment creation
    async fn find_finished_approved(
        &self,
        item_id: Uuid,
        booker_id: Uuid,
        now: DateTime<Utc>,
    ) -> DomainResult<Option<Booking>>;
}
