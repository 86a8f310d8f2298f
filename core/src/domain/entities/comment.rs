//! Comment left on an item by a past booker.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A comment on an item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub id: Uuid,
    pub text: String,
    /// The commented item
    pub item_id: Uuid,
    /// Author; must have a finished approved booking of the item
    pub author_id: Uuid,
    pub created: DateTime<Utc>,
}

impl Comment {
    /// Creates a new comment stamped with the current time
    pub fn new(text: String, item_id: Uuid, author_id: Uuid) -> Self {
        Self {
            id: Uuid::new_v4(),
            text,
            item_id,
            author_id,
            created: Utc::now(),
        }
    }
}
