//! Mock implementation of ItemRepository for testing

use async_trait::async_trait;
use si_shared::types::Pagination;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::Item;
use crate::errors::{DomainError, DomainResult};

use super::trait_::ItemRepository;

/// Mock item repository backed by an in-memory map
pub struct MockItemRepository {
    items: Arc<RwLock<HashMap<Uuid, Item>>>,
}

impl MockItemRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self {
            items: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

impl Default for MockItemRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ItemRepository for MockItemRepository {
    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<Item>> {
        let items = self.items.read().await;
        Ok(items.get(&id).cloned())
    }

    async fn create(&self, item: Item) -> DomainResult<Item> {
        let mut items = self.items.write().await;
        items.insert(item.id, item.clone());
        Ok(item)
    }

    async fn update(&self, item: Item) -> DomainResult<Item> {
        let mut items = self.items.write().await;

        if !items.contains_key(&item.id) {
            return Err(DomainError::not_found(format!("Item id={}", item.id)));
        }

        items.insert(item.id, item.clone());
        Ok(item)
    }

    async fn delete(&self, id: Uuid) -> DomainResult<bool> {
        let mut items = self.items.write().await;
        Ok(items.remove(&id).is_some())
    }

    async fn find_by_owner(&self, owner_id: Uuid, page: Pagination) -> DomainResult<Vec<Item>> {
        let items = self.items.read().await;
        let mut owned: Vec<Item> = items
            .values()
            .filter(|i| i.owner_id == owner_id)
            .cloned()
            .collect();
        owned.sort_by_key(|i| i.id);
        Ok(page.slice(owned))
    }

    async fn search(&self, text: &str, page: Pagination) -> DomainResult<Vec<Item>> {
        let items = self.items.read().await;
        let mut found: Vec<Item> = items
            .values()
            .filter(|i| i.available && i.matches_text(text))
            .cloned()
            .collect();
        found.sort_by_key(|i| i.id);
        Ok(page.slice(found))
    }

    async fn find_by_request(&self, request_id: Uuid) -> DomainResult<Vec<Item>> {
        let items = self.items.read().await;
        let mut linked: Vec<Item> = items
            .values()
            .filter(|i| i.request_id == Some(request_id))
            .cloned()
            .collect();
        linked.sort_by_key(|i| i.id);
        Ok(linked)
    }
}
