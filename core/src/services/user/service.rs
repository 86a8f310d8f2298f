//! User service: CRUD over user records with email uniqueness.

use std::sync::Arc;
use uuid::Uuid;

use si_shared::utils::validation::validators;

use crate::domain::entities::User;
use crate::errors::{DomainError, DomainResult};
use crate::repositories::UserRepository;

/// Service managing user records
pub struct UserService<U>
where
    U: UserRepository,
{
    /// User repository for database operations
    user_repository: Arc<U>,
}

impl<U> UserService<U>
where
    U: UserRepository,
{
    /// Create a new user service
    pub fn new(user_repository: Arc<U>) -> Self {
        Self { user_repository }
    }

    /// List all users
    pub async fn get_all(&self) -> DomainResult<Vec<User>> {
        self.user_repository.find_all().await
    }

    /// Fetch a user by id
    pub async fn get(&self, id: Uuid) -> DomainResult<User> {
        self.user_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found(format!("User id={}", id)))
    }

    /// Register a new user
    ///
    /// The email must be well-formed and not registered yet; duplicates
    /// surface as a conflict from the repository.
    pub async fn create(&self, name: String, email: String) -> DomainResult<User> {
        tracing::info!(name = %name, "creating user");

        if !validators::not_empty(&name) {
            return Err(DomainError::validation("User name must not be empty"));
        }
        if !validators::is_valid_email(&email) {
            return Err(DomainError::validation(format!("Invalid email: {}", email)));
        }

        self.user_repository.create(User::new(name, email)).await
    }

    /// Partially update a user; absent fields keep their old values
    pub async fn update(
        &self,
        id: Uuid,
        name: Option<String>,
        email: Option<String>,
    ) -> DomainResult<User> {
        tracing::info!(user_id = %id, "updating user");

        let mut user = self.get(id).await?;

        if let Some(ref name) = name {
            if !validators::not_empty(name) {
                return Err(DomainError::validation("User name must not be empty"));
            }
        }
        if let Some(ref email) = email {
            if !validators::is_valid_email(email) {
                return Err(DomainError::validation(format!("Invalid email: {}", email)));
            }
            if *email != user.email {
                if let Some(other) = self.user_repository.find_by_email(email).await? {
                    if other.id != id {
                        tracing::warn!(user_id = %id, "email already registered");
                        return Err(DomainError::Conflict {
                            message: "Email is already registered".to_string(),
                        });
                    }
                }
            }
        }

        user.apply_update(name, email);
        self.user_repository.update(user).await
    }

    /// Delete a user by id
    pub async fn delete(&self, id: Uuid) -> DomainResult<()> {
        tracing::info!(user_id = %id, "deleting user");

        if !self.user_repository.delete(id).await? {
            return Err(DomainError::not_found(format!("User id={}", id)));
        }
        Ok(())
    }
}
