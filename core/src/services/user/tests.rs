//! Unit tests for UserService against the mock repository

use std::sync::Arc;
use uuid::Uuid;

use crate::errors::DomainError;
use crate::repositories::MockUserRepository;

use super::UserService;

fn service() -> UserService<MockUserRepository> {
    UserService::new(Arc::new(MockUserRepository::new()))
}

#[tokio::test]
async fn test_create_and_get() {
    let service = service();
    let user = service
        .create("Alice".to_string(), "alice@example.com".to_string())
        .await
        .unwrap();

    let fetched = service.get(user.id).await.unwrap();
    assert_eq!(fetched, user);
}

#[tokio::test]
async fn test_create_rejects_bad_input() {
    let service = service();

    let result = service
        .create("  ".to_string(), "alice@example.com".to_string())
        .await;
    assert!(matches!(result, Err(DomainError::Validation { .. })));

    let result = service
        .create("Alice".to_string(), "not-an-email".to_string())
        .await;
    assert!(matches!(result, Err(DomainError::Validation { .. })));
}

#[tokio::test]
async fn test_duplicate_email_conflicts() {
    let service = service();
    service
        .create("Alice".to_string(), "a@example.com".to_string())
        .await
        .unwrap();

    let result = service
        .create("Bob".to_string(), "a@example.com".to_string())
        .await;
    assert!(matches!(result, Err(DomainError::Conflict { .. })));
}

#[tokio::test]
async fn test_partial_update_keeps_absent_fields() {
    let service = service();
    let user = service
        .create("Alice".to_string(), "alice@example.com".to_string())
        .await
        .unwrap();

    let updated = service
        .update(user.id, Some("Alicia".to_string()), None)
        .await
        .unwrap();
    assert_eq!(updated.name, "Alicia");
    assert_eq!(updated.email, "alice@example.com");
}

#[tokio::test]
async fn test_update_to_taken_email_conflicts() {
    let service = service();
    service
        .create("Alice".to_string(), "alice@example.com".to_string())
        .await
        .unwrap();
    let bob = service
        .create("Bob".to_string(), "bob@example.com".to_string())
        .await
        .unwrap();

    let result = service
        .update(bob.id, None, Some("alice@example.com".to_string()))
        .await;
    assert!(matches!(result, Err(DomainError::Conflict { .. })));

    // updating to the email the user already has is fine
    let kept = service
        .update(bob.id, None, Some("bob@example.com".to_string()))
        .await
        .unwrap();
    assert_eq!(kept.email, "bob@example.com");
}

#[tokio::test]
async fn test_missing_user_is_not_found() {
    let service = service();
    let id = Uuid::new_v4();

    assert!(matches!(
        service.get(id).await,
        Err(DomainError::NotFound { .. })
    ));
    assert!(matches!(
        service.delete(id).await,
        Err(DomainError::NotFound { .. })
    ));
    assert!(matches!(
        service.update(id, Some("X".to_string()), None).await,
        Err(DomainError::NotFound { .. })
    ));
}
