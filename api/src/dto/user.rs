//! User DTOs

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use si_core::domain::entities::User;

/// Body of `POST /users`
#[derive(Debug, Deserialize, Validate)]
pub struct CreateUserRequest {
    #[validate(length(min = 1, message = "User name must not be empty"))]
    pub name: String,

    #[validate(email(message = "Invalid email"))]
    pub email: String,
}

/// Body of `PATCH /users/{userId}`; absent fields keep their values
#[derive(Debug, Deserialize)]
pub struct UpdateUserRequest {
    pub name: Option<String>,
    pub email: Option<String>,
}

/// User response body
#[derive(Debug, Serialize, Deserialize)]
pub struct UserDto {
    pub id: Uuid,
    pub name: String,
    pub email: String,
}

impl From<User> for UserDto {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
        }
    }
}
