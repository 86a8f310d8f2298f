//! Unit tests for ItemService against the mock repositories

use std::sync::Arc;

use chrono::{Duration, Utc};
use si_shared::types::Pagination;
use uuid::Uuid;

use crate::domain::entities::{Booking, BookingStatus, User};
use crate::errors::DomainError;
use crate::repositories::{
    BookingRepository, MockBookingRepository, MockCommentRepository, MockItemRepository,
    MockUserRepository, UserRepository,
};

use super::ItemService;

struct Fixture {
    service: ItemService<
        MockItemRepository,
        MockUserRepository,
        MockBookingRepository,
        MockCommentRepository,
    >,
    bookings: Arc<MockBookingRepository>,
    users: Arc<MockUserRepository>,
}

impl Fixture {
    fn new() -> Self {
        let items = Arc::new(MockItemRepository::new());
        let users = Arc::new(MockUserRepository::new());
        let bookings = Arc::new(MockBookingRepository::new());
        let comments = Arc::new(MockCommentRepository::new());
        let service = ItemService::new(items, users.clone(), bookings.clone(), comments);
        Self {
            service,
            bookings,
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
}

#[tokio::test]
async fn test_create_requires_existing_owner() {
    let f = Fixture::new();
    let result = f
        .service
        .create(
            Uuid::new_v4(),
            "Drill".to_string(),
            "Cordless".to_string(),
            true,
            None,
        )
        .await;
    assert!(matches!(result, Err(DomainError::NotFound { .. })));
}

#[tokio::test]
async fn test_create_rejects_blank_fields() {
    let f = Fixture::new();
    let owner = f.user("Owner").await;

    let result = f
        .service
        .create(owner.id, "".to_string(), "Cordless".to_string(), true, None)
        .await;
    assert!(matches!(result, Err(DomainError::Validation { .. })));

    let result = f
        .service
        .create(owner.id, "Drill".to_string(), "  ".to_string(), true, None)
        .await;
    assert!(matches!(result, Err(DomainError::Validation { .. })));
}

#[tokio::test]
async fn test_only_owner_may_update_or_delete() {
    let f = Fixture::new();
    let owner = f.user("Owner").await;
    let other = f.user("Other").await;
    let item = f
        .service
        .create(
            owner.id,
            "Drill".to_string(),
            "Cordless".to_string(),
            true,
            None,
        )
        .await
        .unwrap();

    let result = f
        .service
        .update(item.id, other.id, Some("Stolen".to_string()), None, None)
        .await;
    assert!(matches!(result, Err(DomainError::Forbidden { .. })));

    let result = f.service.delete(item.id, other.id).await;
    assert!(matches!(result, Err(DomainError::Forbidden { .. })));

    // the item is unchanged
    let view = f.service.get(item.id, other.id).await.unwrap();
    assert_eq!(view.item.name, "Drill");

    let updated = f
        .service
        .update(item.id, owner.id, None, None, Some(false))
        .await
        .unwrap();
    assert_eq!(updated.name, "Drill");
    assert!(!updated.available);

    f.service.delete(item.id, owner.id).await.unwrap();
    let result = f.service.get(item.id, owner.id).await;
    assert!(matches!(result, Err(DomainError::NotFound { .. })));
}

#[tokio::test]
async fn test_owner_view_carries_last_and_next_booking() {
    let f = Fixture::new();
    let owner = f.user("Owner").await;
    let booker = f.user("Booker").await;
    let item = f
        .service
        .create(
            owner.id,
            "Drill".to_string(),
            "Cordless".to_string(),
            true,
            None,
        )
        .await
        .unwrap();
    let now = Utc::now();

    let past = f
        .bookings
        .create(Booking::new(
            now - Duration::hours(3),
            now - Duration::hours(1),
            item.id,
            booker.id,
        ))
        .await
        .unwrap();
    let upcoming = f
        .bookings
        .create(Booking::new(
            now + Duration::hours(1),
            now + Duration::hours(2),
            item.id,
            booker.id,
        ))
        .await
        .unwrap();

    let owner_view = f.service.get(item.id, owner.id).await.unwrap();
    assert_eq!(owner_view.last_booking.as_ref().map(|b| b.id), Some(past.id));
    assert_eq!(
        owner_view.next_booking.as_ref().map(|b| b.id),
        Some(upcoming.id)
    );

    // a non-owner sees no booking info
    let booker_view = f.service.get(item.id, booker.id).await.unwrap();
    assert!(booker_view.last_booking.is_none());
    assert!(booker_view.next_booking.is_none());
}

#[tokio::test]
async fn test_search_is_case_insensitive_and_skips_empty_text() {
    let f = Fixture::new();
    let owner = f.user("Owner").await;
    f.service
        .create(
            owner.id,
            "Power Drill".to_string(),
            "800W".to_string(),
            true,
            None,
        )
        .await
        .unwrap();
    f.service
        .create(
            owner.id,
            "Ladder".to_string(),
            "A drill-free tool".to_string(),
            true,
            None,
        )
        .await
        .unwrap();
    f.service
        .create(
            owner.id,
            "Broken drill".to_string(),
            "Spares only".to_string(),
            false,
            None,
        )
        .await
        .unwrap();

    let found = f.service.search("DRILL", Pagination::default()).await.unwrap();
    // matches name or description, available items only
    assert_eq!(found.len(), 2);

    let found = f.service.search("  ", Pagination::default()).await.unwrap();
    assert!(found.is_empty());
}

#[tokio::test]
async fn test_comment_requires_finished_approved_booking() {
    let f = Fixture::new();
    let owner = f.user("Owner").await;
    let booker = f.user("Booker").await;
    let item = f
        .service
        .create(
            owner.id,
            "Drill".to_string(),
            "Cordless".to_string(),
            true,
            None,
        )
        .await
        .unwrap();
    let now = Utc::now();

    // no booking at all
    let result = f
        .service
        .add_comment(item.id, booker.id, "Great!".to_string())
        .await;
    assert!(matches!(result, Err(DomainError::Validation { .. })));

    // approved but still running
    let mut running = Booking::new(
        now - Duration::hours(1),
        now + Duration::hours(1),
        item.id,
        booker.id,
    );
    running.status = BookingStatus::Approved;
    f.bookings.create(running).await.unwrap();
    let result = f
        .service
        .add_comment(item.id, booker.id, "Great!".to_string())
        .await;
    assert!(matches!(result, Err(DomainError::Validation { .. })));

    // finished and approved
    let mut finished = Booking::new(
        now - Duration::hours(4),
        now - Duration::hours(2),
        item.id,
        booker.id,
    );
    finished.status = BookingStatus::Approved;
    f.bookings.create(finished).await.unwrap();

    let view = f
        .service
        .add_comment(item.id, booker.id, "Great!".to_string())
        .await
        .unwrap();
    assert_eq!(view.author_name, "Booker");
    assert_eq!(view.comment.text, "Great!");

    let comments = f.service.get_comments(item.id).await.unwrap();
    assert_eq!(comments.len(), 1);
    assert_eq!(comments[0].author_name, "Booker");
}
