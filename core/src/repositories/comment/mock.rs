//! Mock implementation of CommentRepository for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::Comment;
use crate::errors::DomainResult;

use super::trait_::CommentRepository;

/// Mock comment repository backed by an in-memory map
pub struct MockCommentRepository {
    comments: Arc<RwLock<HashMap<Uuid, Comment>>>,
}

impl MockCommentRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self {
            comments: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

impl Default for MockCommentRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CommentRepository for MockCommentRepository {
    async fn create(&self, comment: Comment) -> DomainResult<Comment> {
        let mut comments = self.comments.write().await;
        comments.insert(comment.id, comment.clone());
        Ok(comment)
    }

    async fn find_by_item(&self, item_id: Uuid) -> DomainResult<Vec<Comment>> {
        let comments = self.comments.read().await;
        let mut found: Vec<Comment> = comments
            .values()
            .filter(|c| c.item_id == item_id)
            .cloned()
            .collect();
        found.sort_by(|a, b| b.created.cmp(&a.created));
        Ok(found)
    }
}
