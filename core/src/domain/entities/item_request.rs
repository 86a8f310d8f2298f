//! Item request: a user's public ask for an item that does not yet exist.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A broadcast request for an item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemRequest {
    pub id: Uuid,
    /// What the requester is looking for
    pub description: String,
    pub requester_id: Uuid,
    pub created: DateTime<Utc>,
}

impl ItemRequest {
    /// Creates a new request stamped with the current time
    pub fn new(description: String, requester_id: Uuid) -> Self {
        Self {
            id: Uuid::new_v4(),
            description,
            requester_id,
            created: Utc::now(),
        }
    }
}
