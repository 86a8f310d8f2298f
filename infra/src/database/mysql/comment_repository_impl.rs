//! MySQL implementation of the CommentRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use si_core::domain::entities::Comment;
use si_core::errors::{DomainError, DomainResult};
use si_core::repositories::CommentRepository;

/// MySQL implementation of CommentRepository
pub struct MySqlCommentRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlCommentRepository {
    /// Create a new MySQL comment repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert database row to Comment entity
    fn row_to_comment(row: &sqlx::mysql::MySqlRow) -> DomainResult<Comment> {
        let id: String = row
            .try_get("id")
            .map_err(|e| DomainError::Database(format!("Failed to get id: {}", e)))?;
        let item_id: String = row
            .try_get("item_id")
            .map_err(|e| DomainError::Database(format!("Failed to get item_id: {}", e)))?;
        let author_id: String = row
            .try_get("author_id")
            .map_err(|e| DomainError::Database(format!("Failed to get author_id: {}", e)))?;

        Ok(Comment {
            id: Uuid::parse_str(&id)
                .map_err(|e| DomainError::Database(format!("Invalid UUID: {}", e)))?,
            text: row
                .try_get("text")
                .map_err(|e| DomainError::Database(format!("Failed to get text: {}", e)))?,
            item_id: Uuid::parse_str(&item_id)
                .map_err(|e| DomainError::Database(format!("Invalid UUID: {}", e)))?,
            author_id: Uuid::parse_str(&author_id)
                .map_err(|e| DomainError::Database(format!("Invalid UUID: {}", e)))?,
            created: row
                .try_get::<DateTime<Utc>, _>("created")
                .map_err(|e| DomainError::Database(format!("Failed to get created: {}", e)))?,
        })
    }
}

#[async_trait]
impl CommentRepository for MySqlCommentRepository {
    async fn create(&self, comment: Comment) -> DomainResult<Comment> {
        let query = r#"
            INSERT INTO comments (id, text, item_id, author_id, created)
            VALUES (?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(comment.id.to_string())
            .bind(&comment.text)
            .bind(comment.item_id.to_string())
            .bind(comment.author_id.to_string())
            .bind(comment.created)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Database(format!("Failed to create comment: {}", e)))?;

        Ok(comment)
    }

    async fn find_by_item(&self, item_id: Uuid) -> DomainResult<Vec<Comment>> {
        let query = r#"
            SELECT id, text, item_id, author_id, created
            FROM comments
            WHERE item_id = ?
            ORDER BY created DESC
        "#;

        let rows = sqlx::query(query)
            .bind(item_id.to_string())
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::Database(format!("Database query failed: {}", e)))?;

        rows.iter().map(Self::row_to_comment).collect()
    }
}
