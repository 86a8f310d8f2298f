//! Unit tests for the booking lifecycle against the mock repositories

use std::sync::Arc;

use chrono::{Duration, Utc};
use si_shared::types::Pagination;
use uuid::Uuid;

use crate::domain::entities::{Booking, BookingStatus, Item, User};
use crate::errors::DomainError;
use crate::repositories::{
    BookingRepository, ItemRepository, MockBookingRepository, MockItemRepository,
    MockUserRepository, UserRepository,
};

use super::BookingService;

struct Fixture {
    service: BookingService<MockBookingRepository, MockItemRepository, MockUserRepository>,
    bookings: Arc<MockBookingRepository>,
    items: Arc<MockItemRepository>,
    users: Arc<MockUserRepository>,
}

impl Fixture {
    fn new() -> Self {
        let bookings = Arc::new(MockBookingRepository::new());
        let items = Arc::new(MockItemRepository::new());
        let users = Arc::new(MockUserRepository::new());
        let service = BookingService::new(bookings.clone(), items.clone(), users.clone());
        Self {
            service,
            bookings,
            items,
            users,
        }
    }

    async fn user(&self, name: &str) -> User {
        self.users
            .create(User::new(
                name.to_string(),
                format!("{}@example.com", name.to_lowercase()),
            ))
            .await
            .unwrap()
    }

    async fn item(&self, owner: &User, available: bool) -> Item {
        self.items
            .create(Item::new(
                "Drill".to_string(),
                "Cordless power drill".to_string(),
                available,
                owner.id,
                None,
            ))
            .await
            .unwrap()
    }
}

#[tokio::test]
async fn test_create_persists_waiting_booking() {
    let f = Fixture::new();
    let owner = f.user("Owner").await;
    let booker = f.user("Booker").await;
    let item = f.item(&owner, true).await;

    let start = Utc::now() + Duration::hours(1);
    let end = start + Duration::hours(2);
    let view = f.service.create(booker.id, item.id, start, end).await.unwrap();

    assert_eq!(view.booking.status, BookingStatus::Waiting);
    assert_eq!(view.booking.booker_id, booker.id);
    assert_eq!(view.item_name, "Drill");
    assert_eq!(view.booker_name, "Booker");
}

#[tokio::test]
async fn test_owner_cannot_book_own_item() {
    let f = Fixture::new();
    let owner = f.user("Owner").await;
    let item = f.item(&owner, true).await;

    let start = Utc::now() + Duration::hours(1);
    let result = f
        .service
        .create(owner.id, item.id, start, start + Duration::hours(1))
        .await;
    assert!(matches!(result, Err(DomainError::Forbidden { .. })));
}

#[tokio::test]
async fn test_create_rejects_unavailable_item_and_bad_dates() {
    let f = Fixture::new();
    let owner = f.user("Owner").await;
    let booker = f.user("Booker").await;
    let unavailable = f.item(&owner, false).await;
    let available = f.item(&owner, true).await;
    let now = Utc::now();

    // unavailable item
    let result = f
        .service
        .create(
            booker.id,
            unavailable.id,
            now + Duration::hours(1),
            now + Duration::hours(2),
        )
        .await;
    assert!(matches!(result, Err(DomainError::Validation { .. })));

    // start in the past
    let result = f
        .service
        .create(
            booker.id,
            available.id,
            now - Duration::hours(1),
            now + Duration::hours(2),
        )
        .await;
    assert!(matches!(result, Err(DomainError::Validation { .. })));

    // end not after start
    let start = now + Duration::hours(1);
    let result = f.service.create(booker.id, available.id, start, start).await;
    assert!(matches!(result, Err(DomainError::Validation { .. })));
}

#[tokio::test]
async fn test_create_requires_existing_booker_and_item() {
    let f = Fixture::new();
    let owner = f.user("Owner").await;
    let booker = f.user("Booker").await;
    let item = f.item(&owner, true).await;
    let start = Utc::now() + Duration::hours(1);
    let end = start + Duration::hours(1);

    let result = f.service.create(Uuid::new_v4(), item.id, start, end).await;
    assert!(matches!(result, Err(DomainError::NotFound { .. })));

    let result = f.service.create(booker.id, Uuid::new_v4(), start, end).await;
    assert!(matches!(result, Err(DomainError::NotFound { .. })));
}

#[tokio::test]
async fn test_owner_approves_and_rejects() {
    let f = Fixture::new();
    let owner = f.user("Owner").await;
    let booker = f.user("Booker").await;
    let item = f.item(&owner, true).await;
    let start = Utc::now() + Duration::hours(1);

    let booking = f
        .service
        .create(booker.id, item.id, start, start + Duration::hours(1))
        .await
        .unwrap()
        .booking;

    let approved = f.service.update(booking.id, owner.id, true).await.unwrap();
    assert_eq!(approved.booking.status, BookingStatus::Approved);

    // a second decision is rejected: status is no longer WAITING
    let result = f.service.update(booking.id, owner.id, false).await;
    assert!(matches!(result, Err(DomainError::Validation { .. })));
}

#[tokio::test]
async fn test_booker_can_cancel_but_not_approve() {
    let f = Fixture::new();
    let owner = f.user("Owner").await;
    let booker = f.user("Booker").await;
    let item = f.item(&owner, true).await;
    let start = Utc::now() + Duration::hours(1);

    let booking = f
        .service
        .create(booker.id, item.id, start, start + Duration::hours(1))
        .await
        .unwrap()
        .booking;

    let result = f.service.update(booking.id, booker.id, true).await;
    assert!(matches!(result, Err(DomainError::Forbidden { .. })));

    let cancelled = f.service.update(booking.id, booker.id, false).await.unwrap();
    assert_eq!(cancelled.booking.status, BookingStatus::Cancelled);
}

#[tokio::test]
async fn test_stranger_cannot_decide() {
    let f = Fixture::new();
    let owner = f.user("Owner").await;
    let booker = f.user("Booker").await;
    let stranger = f.user("Stranger").await;
    let item = f.item(&owner, true).await;
    let start = Utc::now() + Duration::hours(1);

    let booking = f
        .service
        .create(booker.id, item.id, start, start + Duration::hours(1))
        .await
        .unwrap()
        .booking;

    let result = f.service.update(booking.id, stranger.id, true).await;
    assert!(matches!(result, Err(DomainError::Forbidden { .. })));
}

#[tokio::test]
async fn test_expired_booking_cannot_be_decided() {
    let f = Fixture::new();
    let owner = f.user("Owner").await;
    let booker = f.user("Booker").await;
    let item = f.item(&owner, true).await;
    let now = Utc::now();

    // seed an already expired waiting booking directly
    let expired = f
        .bookings
        .create(Booking::new(
            now - Duration::hours(3),
            now - Duration::hours(1),
            item.id,
            booker.id,
        ))
        .await
        .unwrap();

    let result = f.service.update(expired.id, owner.id, true).await;
    assert!(matches!(result, Err(DomainError::Validation { .. })));
}

#[tokio::test]
async fn test_view_restricted_to_owner_and_booker() {
    let f = Fixture::new();
    let owner = f.user("Owner").await;
    let booker = f.user("Booker").await;
    let stranger = f.user("Stranger").await;
    let item = f.item(&owner, true).await;
    let start = Utc::now() + Duration::hours(1);

    let booking = f
        .service
        .create(booker.id, item.id, start, start + Duration::hours(1))
        .await
        .unwrap()
        .booking;

    assert!(f.service.get(booking.id, owner.id).await.is_ok());
    assert!(f.service.get(booking.id, booker.id).await.is_ok());
    let result = f.service.get(booking.id, stranger.id).await;
    assert!(matches!(result, Err(DomainError::Forbidden { .. })));
}

#[tokio::test]
async fn test_state_filters_classify_bookings() {
    let f = Fixture::new();
    let owner = f.user("Owner").await;
    let booker = f.user("Booker").await;
    let item = f.item(&owner, true).await;
    let now = Utc::now();

    // seed one booking per classification directly through the repository
    let mut past = Booking::new(
        now - Duration::hours(4),
        now - Duration::hours(2),
        item.id,
        booker.id,
    );
    past.status = BookingStatus::Approved;
    let mut current = Booking::new(
        now - Duration::hours(1),
        now + Duration::hours(1),
        item.id,
        booker.id,
    );
    current.status = BookingStatus::Approved;
    let future_waiting = Booking::new(
        now + Duration::hours(2),
        now + Duration::hours(3),
        item.id,
        booker.id,
    );
    let mut future_rejected = Booking::new(
        now + Duration::hours(4),
        now + Duration::hours(5),
        item.id,
        booker.id,
    );
    future_rejected.status = BookingStatus::Rejected;
    let mut future_cancelled = Booking::new(
        now + Duration::hours(6),
        now + Duration::hours(7),
        item.id,
        booker.id,
    );
    future_cancelled.status = BookingStatus::Cancelled;

    for booking in [
        past.clone(),
        current.clone(),
        future_waiting.clone(),
        future_rejected.clone(),
        future_cancelled.clone(),
    ] {
        f.bookings.create(booking).await.unwrap();
    }

    assert_eq!(ids_for(&f, booker.id, "ALL").await.len(), 5);
    assert_eq!(ids_for(&f, booker.id, "PAST").await, vec![past.id]);
    assert_eq!(ids_for(&f, booker.id, "CURRENT").await, vec![current.id]);
    assert_eq!(
        ids_for(&f, booker.id, "FUTURE").await,
        vec![future_cancelled.id, future_rejected.id, future_waiting.id]
    );
    assert_eq!(ids_for(&f, booker.id, "WAITING").await, vec![future_waiting.id]);
    assert_eq!(ids_for(&f, booker.id, "REJECTED").await, vec![future_rejected.id]);
    assert_eq!(ids_for(&f, booker.id, "CANCELLED").await, vec![future_cancelled.id]);
}

async fn ids_for(f: &Fixture, booker_id: Uuid, state: &str) -> Vec<Uuid> {
    f.service
        .get_for_booker(booker_id, state, Pagination::default())
        .await
        .unwrap()
        .into_iter()
        .map(|v| v.booking.id)
        .collect()
}

#[tokio::test]
async fn test_unknown_state_is_an_error() {
    let f = Fixture::new();
    let booker = f.user("Booker").await;

    let result = f
        .service
        .get_for_booker(booker.id, "SOMEDAY", Pagination::default())
        .await;
    assert!(matches!(result, Err(DomainError::UnknownState { .. })));
}

#[tokio::test]
async fn test_owner_query_sees_bookings_of_owned_items_only() {
    let f = Fixture::new();
    let owner = f.user("Owner").await;
    let other_owner = f.user("Other").await;
    let booker = f.user("Booker").await;
    let own_item = f.item(&owner, true).await;
    let foreign_item = f.item(&other_owner, true).await;
    let start = Utc::now() + Duration::hours(1);

    let own = f
        .service
        .create(booker.id, own_item.id, start, start + Duration::hours(1))
        .await
        .unwrap()
        .booking;
    f.service
        .create(
            booker.id,
            foreign_item.id,
            start + Duration::hours(2),
            start + Duration::hours(3),
        )
        .await
        .unwrap();

    let found = f
        .service
        .get_for_owner(owner.id, "ALL", Pagination::default())
        .await
        .unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].booking.id, own.id);
}

#[tokio::test]
async fn test_booker_query_is_sorted_and_paginated() {
    let f = Fixture::new();
    let owner = f.user("Owner").await;
    let booker = f.user("Booker").await;
    let item = f.item(&owner, true).await;
    let base = Utc::now() + Duration::hours(1);

    let mut ids = Vec::new();
    for i in 0..5 {
        let start = base + Duration::hours(2 * i);
        let view = f
            .service
            .create(booker.id, item.id, start, start + Duration::hours(1))
            .await
            .unwrap();
        ids.push(view.booking.id);
    }

    let page = f
        .service
        .get_for_booker(booker.id, "ALL", Pagination::new(1, Some(2)))
        .await
        .unwrap();
    // sorted by start descending, so the page skips the latest booking
    assert_eq!(
        page.iter().map(|v| v.booking.id).collect::<Vec<_>>(),
        vec![ids[3], ids[2]]
    );
}
