//! Booking service: creation, status transitions and state-filtered queries.
//!
//! The status machine is small: a booking is created `Waiting`; while it
//! is `Waiting` and not yet expired, the item owner may approve or
//! reject it and the booker may cancel it. Every other transition is
//! rejected.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use si_shared::types::Pagination;
use uuid::Uuid;

use crate::domain::entities::{Booking, BookingStatus, Item, User};
use crate::domain::value_objects::{BookingState, BookingView};
use crate::errors::{DomainError, DomainResult};
use crate::repositories::{BookingRepository, ItemRepository, UserRepository};

/// Service managing the booking lifecycle
pub struct BookingService<B, I, U>
where
    B: BookingRepository,
    I: ItemRepository,
    U: UserRepository,
{
    /// Booking repository for database operations
    booking_repository: Arc<B>,
    /// Item repository for availability and ownership checks
    item_repository: Arc<I>,
    /// User repository for actor existence checks
    user_repository: Arc<U>,
}

impl<B, I, U> BookingService<B, I, U>
where
    B: BookingRepository,
    I: ItemRepository,
    U: UserRepository,
{
    /// Create a new booking service
    pub fn new(booking_repository: Arc<B>, item_repository: Arc<I>, user_repository: Arc<U>) -> Self {
        Self {
            booking_repository,
            item_repository,
            user_repository,
        }
    }

    /// Place a new booking of `item_id` by `booker_id`
    ///
    /// Checks, in order: the booker exists, the item exists and is
    /// available, the dates are sane (`start >= now`, `end > start`),
    /// and the booker is not the item's owner. The booking is persisted
    /// in `Waiting` status.
    pub async fn create(
        &self,
        booker_id: Uuid,
        item_id: Uuid,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> DomainResult<BookingView> {
        tracing::info!(booker_id = %booker_id, item_id = %item_id, "booking request");

        let booker = self.require_user(booker_id).await?;
        let item = self.require_item(item_id).await?;

        if !item.available {
            tracing::warn!(item_id = %item_id, "item is not available for booking");
            return Err(DomainError::validation(format!(
                "Item id={} is not available for booking",
                item_id
            )));
        }

        let now = Utc::now();
        if start < now || end <= start {
            tracing::warn!(%start, %end, "wrong booking dates");
            return Err(DomainError::validation("Wrong start or end date"));
        }

        if item.is_owned_by(booker_id) {
            tracing::warn!(booker_id = %booker_id, item_id = %item_id, "owner booking own item");
            return Err(DomainError::forbidden(
                "Booking can't be made by the item's owner",
            ));
        }

        let booking = self
            .booking_repository
            .create(Booking::new(start, end, item_id, booker_id))
            .await?;
        tracing::info!(booking_id = %booking.id, "booking created");

        Ok(Self::view(booking, &item, &booker))
    }

    /// Decide a waiting booking
    ///
    /// The item owner approves (`approved = true`) or rejects; the
    /// booker may only cancel via `approved = false`. Expired or
    /// already-decided bookings cannot be changed.
    pub async fn update(
        &self,
        booking_id: Uuid,
        user_id: Uuid,
        approved: bool,
    ) -> DomainResult<BookingView> {
        tracing::info!(booking_id = %booking_id, user_id = %user_id, approved, "booking decision");

        self.require_user(user_id).await?;
        let mut booking = self.require_booking(booking_id).await?;

        let now = Utc::now();
        if booking.is_expired(now) {
            tracing::warn!(booking_id = %booking_id, "booking time has expired");
            return Err(DomainError::validation("Booking time has expired"));
        }
        if booking.status != BookingStatus::Waiting {
            tracing::warn!(booking_id = %booking_id, status = booking.status.as_str(), "status is final");
            return Err(DomainError::validation(format!(
                "No way to change status {}",
                booking.status.as_str()
            )));
        }

        let item = self.require_item(booking.item_id).await?;

        if item.is_owned_by(user_id) {
            booking.status = if approved {
                BookingStatus::Approved
            } else {
                BookingStatus::Rejected
            };
            tracing::info!(booking_id = %booking_id, status = booking.status.as_str(), "decided by owner");
        } else if booking.booker_id == user_id {
            if approved {
                tracing::warn!(booking_id = %booking_id, user_id = %user_id, "booker cannot approve");
                return Err(DomainError::forbidden(
                    "Only the item's owner can approve the booking",
                ));
            }
            booking.status = BookingStatus::Cancelled;
            tracing::info!(booking_id = %booking_id, "cancelled by booker");
        } else {
            tracing::warn!(booking_id = %booking_id, user_id = %user_id, "actor is neither owner nor booker");
            return Err(DomainError::forbidden(format!(
                "Operation not allowed for user id={}",
                user_id
            )));
        }

        let booking = self.booking_repository.update(booking).await?;
        let booker = self.require_user(booking.booker_id).await?;
        Ok(Self::view(booking, &item, &booker))
    }

    /// Fetch one booking; only the booker or the item owner may view it
    pub async fn get(&self, booking_id: Uuid, user_id: Uuid) -> DomainResult<BookingView> {
        self.require_user(user_id).await?;
        let booking = self.require_booking(booking_id).await?;
        let item = self.require_item(booking.item_id).await?;

        if !item.is_owned_by(user_id) && booking.booker_id != user_id {
            tracing::warn!(booking_id = %booking_id, user_id = %user_id, "booking view denied");
            return Err(DomainError::forbidden(
                "Only the item owner or the booker can view booking information",
            ));
        }

        let booker = self.require_user(booking.booker_id).await?;
        Ok(Self::view(booking, &item, &booker))
    }

    /// Bookings placed by `user_id`, filtered by `state`, newest start first
    pub async fn get_for_booker(
        &self,
        user_id: Uuid,
        state: &str,
        page: Pagination,
    ) -> DomainResult<Vec<BookingView>> {
        self.require_user(user_id).await?;
        let state = Self::parse_state(state)?;

        let bookings = self
            .booking_repository
            .find_by_booker(user_id, state, Utc::now(), page)
            .await?;
        self.assemble(bookings).await
    }

    /// Bookings of items owned by `user_id`, filtered by `state`,
    /// newest start first
    pub async fn get_for_owner(
        &self,
        user_id: Uuid,
        state: &str,
        page: Pagination,
    ) -> DomainResult<Vec<BookingView>> {
        self.require_user(user_id).await?;
        let state = Self::parse_state(state)?;

        let items = self
            .item_repository
            .find_by_owner(user_id, Pagination::default())
            .await?;
        let item_ids: Vec<Uuid> = items.iter().map(|i| i.id).collect();

        let bookings = self
            .booking_repository
            .find_by_items(&item_ids, state, Utc::now(), page)
            .await?;
        self.assemble(bookings).await
    }

    fn parse_state(state: &str) -> DomainResult<BookingState> {
        BookingState::parse(state).ok_or_else(|| {
            tracing::warn!(state, "unknown booking state");
            DomainError::UnknownState {
                state: state.to_string(),
            }
        })
    }

    async fn require_user(&self, id: Uuid) -> DomainResult<User> {
        self.user_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found(format!("User id={}", id)))
    }

    async fn require_item(&self, id: Uuid) -> DomainResult<Item> {
        self.item_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found(format!("Item id={}", id)))
    }

    async fn require_booking(&self, id: Uuid) -> DomainResult<Booking> {
        self.booking_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found(format!("Booking id={}", id)))
    }

    fn view(booking: Booking, item: &Item, booker: &User) -> BookingView {
        BookingView {
            booking,
            item_name: item.name.clone(),
            booker_name: booker.name.clone(),
        }
    }

    async fn assemble(&self, bookings: Vec<Booking>) -> DomainResult<Vec<BookingView>> {
        let mut views = Vec::with_capacity(bookings.len());
        for booking in bookings {
            let item = self.require_item(booking.item_id).await?;
            let booker = self.require_user(booking.booker_id).await?;
            views.push(Self::view(booking, &item, &booker));
        }
        Ok(views)
    }
}
