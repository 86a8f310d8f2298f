//! MySQL implementation of the RequestRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use si_core::domain::entities::ItemRequest;
use si_core::errors::{DomainError, DomainResult};
use si_core::repositories::RequestRepository;
use si_shared::types::Pagination;

/// MySQL implementation of RequestRepository
pub struct MySqlRequestRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlRequestRepository {
    /// Create a new MySQL request repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert database row to ItemRequest entity
    fn row_to_request(row: &sqlx::mysql::MySqlRow) -> DomainResult<ItemRequest> {
        let id: String = row
            .try_get("id")
            .map_err(|e| DomainError::Database(format!("Failed to get id: {}", e)))?;
        let requester_id: String = row
            .try_get("requester_id")
            .map_err(|e| DomainError::Database(format!("Failed to get requester_id: {}", e)))?;

        Ok(ItemRequest {
            id: Uuid::parse_str(&id)
                .map_err(|e| DomainError::Database(format!("Invalid UUID: {}", e)))?,
            description: row
                .try_get("description")
                .map_err(|e| DomainError::Database(format!("Failed to get description: {}", e)))?,
            requester_id: Uuid::parse_str(&requester_id)
                .map_err(|e| DomainError::Database(format!("Invalid UUID: {}", e)))?,
            created: row
                .try_get::<DateTime<Utc>, _>("created")
                .map_err(|e| DomainError::Database(format!("Failed to get created: {}", e)))?,
        })
    }
}

#[async_trait]
impl RequestRepository for MySqlRequestRepository {
    async fn create(&self, request: ItemRequest) -> DomainResult<ItemRequest> {
        let query = r#"
            INSERT INTO item_requests (id, description, requester_id, created)
            VALUES (?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(request.id.to_string())
            .bind(&request.description)
            .bind(request.requester_id.to_string())
            .bind(request.created)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Database(format!("Failed to create request: {}", e)))?;

        Ok(request)
    }

    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<ItemRequest>> {
        let query = r#"
            SELECT id, description, requester_id, created
            FROM item_requests
            WHERE id = ?
            LIMIT 1
        "#;

        let result = sqlx::query(query)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Database(format!("Database query failed: {}", e)))?;

        match result {
            Some(row) => Ok(Some(Self::row_to_request(&row)?)),
            None => Ok(None),
        }
    }

    async fn find_by_requester(&self, requester_id: Uuid) -> DomainResult<Vec<ItemRequest>> {
        let query = r#"
            SELECT id, description, requester_id, created
            FROM item_requests
            WHERE requester_id = ?
            ORDER BY created DESC
        "#;

        let rows = sqlx::query(query)
            .bind(requester_id.to_string())
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::Database(format!("Database query failed: {}", e)))?;

        rows.iter().map(Self::row_to_request).collect()
    }

    async fn find_all_except(
        &self,
        user_id: Uuid,
        page: Pagination,
    ) -> DomainResult<Vec<ItemRequest>> {
        let query = r#"
            SELECT id, description, requester_id, created
            FROM item_requests
            WHERE requester_id <> ?
            ORDER BY created DESC
            LIMIT ? OFFSET ?
        "#;

        let rows = sqlx::query(query)
            .bind(user_id.to_string())
            .bind(page.limit_i64())
            .bind(page.offset_i64())
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::Database(format!("Database query failed: {}", e)))?;

        rows.iter().map(Self::row_to_request).collect()
    }
}
