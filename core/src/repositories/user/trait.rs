//! User repository trait defining the interface for user persistence.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::User;
use crate::errors::DomainResult;

/// Repository trait for User entity persistence operations
///
/// Implementations handle the actual database operations while keeping
/// the abstraction boundary between domain and infrastructure layers.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by their unique identifier
    ///
    /// # Returns
    /// * `Ok(Some(User))` - User found
    /// * `Ok(None)` - No user with the given id
    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<User>>;

    /// Find a user by email address
    async fn find_by_email(&self, email: &str) -> DomainResult<Option<User>>;

    /// List all users
    async fn find_all(&self) -> DomainResult<Vec<User>>;

    /// Persist a new user
    ///
    /// # Returns
    /// * `Err(DomainError::Conflict)` - The email is already registered
    async fn create(&self, user: User) -> DomainResult<User>;

    /// Update an existing user
    ///
    /// # Returns
    /// * `Err(DomainError::NotFound)` - No user with the given id
    async fn update(&self, user: User) -> DomainResult<User>;

    /// Delete a user by id
    ///
    /// # Returns
    /// * `Ok(true)` - User was deleted
    /// * `Ok(false)` - User not found
    async fn delete(&self, id: Uuid) -> DomainResult<bool>;
}
