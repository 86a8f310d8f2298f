//! Mock implementation of BookingRepository for testing

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use si_shared::types::Pagination;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::{Booking, BookingStatus};
use crate::domain::value_objects::BookingState;
use crate::errors::{DomainError, DomainResult};

use super::trait_::BookingRepository;

/// Mock booking repository backed by an in-memory map
pub struct MockBookingRepository {
    bookings: Arc<RwLock<HashMap<Uuid, Booking>>>,
}

impl MockBookingRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self {
            bookings: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    fn sort_start_desc(bookings: &mut [Booking]) {
        bookings.sort_by(|a, b| b.start.cmp(&a.start));
    }
}

impl Default for MockBookingRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BookingRepository for MockBookingRepository {
    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<Booking>> {
        let bookings = self.bookings.read().await;
        Ok(bookings.get(&id).cloned())
    }

    async fn create(&self, booking: Booking) -> DomainResult<Booking> {
        let mut bookings = self.bookings.write().await;
        bookings.insert(booking.id, booking.clone());
        Ok(booking)
    }

    async fn update(&self, booking: Booking) -> DomainResult<Booking> {
        let mut bookings = self.bookings.write().await;

        if !bookings.contains_key(&booking.id) {
            return Err(DomainError::not_found(format!("Booking id={}", booking.id)));
        }

        bookings.insert(booking.id, booking.clone());
        Ok(booking)
    }

    async fn find_by_booker(
        &self,
        booker_id: Uuid,
        state: BookingState,
        now: DateTime<Utc>,
        page: Pagination,
    ) -> DomainResult<Vec<Booking>> {
        let bookings = self.bookings.read().await;
        let mut found: Vec<Booking> = bookings
            .values()
            .filter(|b| b.booker_id == booker_id && state.matches(b, now))
            .cloned()
            .collect();
        Self::sort_start_desc(&mut found);
        Ok(page.slice(found))
    }

    async fn find_by_items(
        &self,
        item_ids: &[Uuid],
        state: BookingState,
        now: DateTime<Utc>,
        page: Pagination,
    ) -> DomainResult<Vec<Booking>> {
        let bookings = self.bookings.read().await;
        let mut found: Vec<Booking> = bookings
            .values()
            .filter(|b| item_ids.contains(&b.item_id) && state.matches(b, now))
            .cloned()
            .collect();
        Self::sort_start_desc(&mut found);
        Ok(page.slice(found))
    }

    async fn find_last_for_item(
        &self,
        item_id: Uuid,
        now: DateTime<Utc>,
    ) -> DomainResult<Option<Booking>> {
        let bookings = self.bookings.read().await;
        Ok(bookings
            .values()
            .filter(|b| b.item_id == item_id && b.start <= now)
            .max_by_key(|b| b.end)
            .cloned())
    }

    async fn find_next_for_item(
        &self,
        item_id: Uuid,
        now: DateTime<Utc>,
    ) -> DomainResult<Option<Booking>> {
        let bookings = self.bookings.read().await;
        Ok(bookings
            .values()
            .filter(|b| b.item_id == item_id && b.start > now)
            .min_by_key(|b| b.start)
            .cloned())
    }

    async fn find_finished_approved(
        &self,
        item_id: Uuid,
        booker_id: Uuid,
        now: DateTime<Utc>,
    ) -> DomainResult<Option<Booking>> {
        let bookings = self.bookings.read().await;
        Ok(bookings
            .values()
            .find(|b| {
                b.item_id == item_id
                    && b.booker_id == booker_id
                    && b.status == BookingStatus::Approved
                    && b.end < now
            })
            .cloned())
    }
}
