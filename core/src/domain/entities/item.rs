//! Item entity: a shareable physical object listed by a user.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A shareable item listed in the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Unique identifier for the item
    pub id: Uuid,

    /// Short item name
    pub name: String,

    /// Free-form description
    pub description: String,

    /// Whether the item can currently be booked
    pub available: bool,

    /// The user who listed the item
    pub owner_id: Uuid,

    /// Request this item was created to fulfill, if any
    pub request_id: Option<Uuid>,
}

impl Item {
    /// Creates a new Item owned by `owner_id`
    pub fn new(
        name: String,
        description: String,
        available: bool,
        owner_id: Uuid,
        request_id: Option<Uuid>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            description,
            available,
            owner_id,
            request_id,
        }
    }

    /// Checks whether `user_id` owns this item
    pub fn is_owned_by(&self, user_id: Uuid) -> bool {
        self.owner_id == user_id
    }

    /// Applies a partial update, keeping absent fields unchanged
    pub fn apply_update(
        &mut self,
        name: Option<String>,
        description: Option<String>,
        available: Option<bool>,
    ) {
        if let Some(name) = name {
            self.name = name;
        }
        if let Some(description) = description {
            self.description = description;
        }
        if let Some(available) = available {
            self.available = available;
        }
    }

    /// Case-insensitive substring match over name and description
    pub fn matches_text(&self, text: &str) -> bool {
        let needle = text.to_lowercase();
        self.name.to_lowercase().contains(&needle)
            || self.description.to_lowercase().contains(&needle)
    }
}
