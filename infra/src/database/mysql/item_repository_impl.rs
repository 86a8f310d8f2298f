//! MySQL implementation of the ItemRepository trait.

use async_trait::async_trait;
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use si_core::domain::entities::Item;
use si_core::errors::{DomainError, DomainResult};
use si_core::repositories::ItemRepository;
use si_shared::types::Pagination;

/// MySQL implementation of ItemRepository
pub struct MySqlItemRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlItemRepository {
    /// Create a new MySQL item repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert database row to Item entity
    fn row_to_item(row: &sqlx::mysql::MySqlRow) -> DomainResult<Item> {
        let id: String = row
            .try_get("id")
            .map_err(|e| DomainError::Database(format!("Failed to get id: {}", e)))?;
        let owner_id: String = row
            .try_get("owner_id")
            .map_err(|e| DomainError::Database(format!("Failed to get owner_id: {}", e)))?;
        let request_id: Option<String> = row
            .try_get("request_id")
            .map_err(|e| DomainError::Database(format!("Failed to get request_id: {}", e)))?;

        Ok(Item {
            id: Uuid::parse_str(&id)
                .map_err(|e| DomainError::Database(format!("Invalid UUID: {}", e)))?,
            name: row
                .try_get("name")
                .map_err(|e| DomainError::Database(format!("Failed to get name: {}", e)))?,
            description: row
                .try_get("description")
                .map_err(|e| DomainError::Database(format!("Failed to get description: {}", e)))?,
            available: row
                .try_get("available")
                .map_err(|e| DomainError::Database(format!("Failed to get available: {}", e)))?,
            owner_id: Uuid::parse_str(&owner_id)
                .map_err(|e| DomainError::Database(format!("Invalid UUID: {}", e)))?,
            request_id: request_id
                .map(|r| Uuid::parse_str(&r))
                .transpose()
                .map_err(|e| DomainError::Database(format!("Invalid UUID: {}", e)))?,
        })
    }
}

#[async_trait]
impl ItemRepository for MySqlItemRepository {
    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<Item>> {
        let query = r#"
            SELECT id, name, description, available, owner_id, request_id
            FROM items
            WHERE id = ?
            LIMIT 1
        "#;

        let result = sqlx::query(query)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Database(format!("Database query failed: {}", e)))?;

        match result {
            Some(row) => Ok(Some(Self::row_to_item(&row)?)),
            None => Ok(None),
        }
    }

    async fn create(&self, item: Item) -> DomainResult<Item> {
        let query = r#"
            INSERT INTO items (id, name, description, available, owner_id, request_id)
            VALUES (?, ?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(item.id.to_string())
            .bind(&item.name)
            .bind(&item.description)
            .bind(item.available)
            .bind(item.owner_id.to_string())
            .bind(item.request_id.map(|r| r.to_string()))
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Database(format!("Failed to create item: {}", e)))?;

        Ok(item)
    }

    async fn update(&self, item: Item) -> DomainResult<Item> {
        let query = r#"
            UPDATE items SET
                name = ?,
                description = ?,
                available = ?,
                request_id = ?
            WHERE id = ?
        "#;

        let result = sqlx::query(query)
            .bind(&item.name)
            .bind(&item.description)
            .bind(item.available)
            .bind(item.request_id.map(|r| r.to_string()))
            .bind(item.id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Database(format!("Failed to update item: {}", e)))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::not_found(format!("Item id={}", item.id)));
        }

        Ok(item)
    }

    async fn delete(&self, id: Uuid) -> DomainResult<bool> {
        let query = "DELETE FROM items WHERE id = ?";

        let result = sqlx::query(query)
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Database(format!("Failed to delete item: {}", e)))?;

        Ok(result.rows_affected() > 0)
    }

    async fn find_by_owner(&self, owner_id: Uuid, page: Pagination) -> DomainResult<Vec<Item>> {
        let query = r#"
            SELECT id, name, description, available, owner_id, request_id
            FROM items
            WHERE owner_id = ?
            ORDER BY id
            LIMIT ? OFFSET ?
        "#;

        let rows = sqlx::query(query)
            .bind(owner_id.to_string())
            .bind(page.limit_i64())
            .bind(page.offset_i64())
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::Database(format!("Database query failed: {}", e)))?;

        rows.iter().map(Self::row_to_item).collect()
    }

    async fn search(&self, text: &str, page: Pagination) -> DomainResult<Vec<Item>> {
        let query = r#"
            SELECT id, name, description, available, owner_id, request_id
            FROM items
            WHERE available = TRUE
              AND (LOWER(name) LIKE ? OR LOWER(description) LIKE ?)
            ORDER BY id
            LIMIT ? OFFSET ?
        "#;

        let pattern = format!("%{}%", text.to_lowercase());

        let rows = sqlx::query(query)
            .bind(&pattern)
            .bind(&pattern)
            .bind(page.limit_i64())
            .bind(page.offset_i64())
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::Database(format!("Database query failed: {}", e)))?;

        rows.iter().map(Self::row_to_item).collect()
    }

    async fn find_by_request(&self, request_id: Uuid) -> DomainResult<Vec<Item>> {
        let query = r#"
            SELECT id, name, description, available, owner_id, request_id
            FROM items
            WHERE request_id = ?
            ORDER BY id
        "#;

        let rows = sqlx::query(query)
            .bind(request_id.to_string())
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::Database(format!("Database query failed: {}", e)))?;

        rows.iter().map(Self::row_to_item).collect()
    }
}
