//! Comment repository trait.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::Comment;
use crate::errors::DomainResult;

/// Repository trait for Comment persistence operations
#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// Persist a new comment
    async fn create(&self, comment: Comment) -> DomainResult<Comment>;

    /// Comments on an item, newest first
    async fn find_by_item(&self, item_id: Uuid) -> DomainResult<Vec<Comment>>;
}
