//! Item repository trait defining the interface for item persistence.

use async_trait::async_trait;
use si_shared::types::Pagination;
use uuid::Uuid;

use crate::domain::entities::Item;
use crate::errors::DomainResult;

/// Repository trait for Item entity persistence operations
#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// Find an item by its unique identifier
    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<Item>>;

    /// Persist a new item
    async fn create(&self, item: Item) -> DomainResult<Item>;

    /// Update an existing item
    ///
    /// # Returns
    /// * `Err(DomainError::NotFound)` - No item with the given id
    async fn update(&self, item: Item) -> DomainResult<Item>;

    /// Delete an item by id
    ///
    /// # Returns
    /// * `Ok(true)` - Item was deleted
    /// * `Ok(false)` - Item not found
    async fn delete(&self, id: Uuid) -> DomainResult<bool>;

    /// Items listed by `owner_id`, stable order, paginated
    async fn find_by_owner(&self, owner_id: Uuid, page: Pagination) -> DomainResult<Vec<Item>>;

    /// Available items whose name or description contains `text`,
    /// case-insensitively, paginated
    async fn search(&self, text: &str, page: Pagination) -> DomainResult<Vec<Item>>;

    /// Items created to fulfill the given request
    async fn find_by_request(&self, request_id: Uuid) -> DomainResult<Vec<Item>>;
}
