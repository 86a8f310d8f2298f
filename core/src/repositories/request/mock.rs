//! Mock implementation of RequestRepository for testing

use async_trait::async_trait;
use si_shared::types::Pagination;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::ItemRequest;
use crate::errors::DomainResult;

use super::trait_::RequestRepository;

/// Mock request repository backed by an in-memory map
pub struct MockRequestRepository {
    requests: Arc<RwLock<HashMap<Uuid, ItemRequest>>>,
}

impl MockRequestRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self {
            requests: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    fn sort_created_desc(requests: &mut [ItemRequest]) {
        requests.sort_by(|a, b| b.created.cmp(&a.created));
    }
}

impl Default for MockRequestRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RequestRepository for MockRequestRepository {
    async fn create(&self, request: ItemRequest) -> DomainResult<ItemRequest> {
        let mut requests = self.requests.write().await;
        requests.insert(request.id, request.clone());
        Ok(request)
    }

    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<ItemRequest>> {
        let requests = self.requests.read().await;
        Ok(requests.get(&id).cloned())
    }

    async fn find_by_requester(&self, requester_id: Uuid) -> DomainResult<Vec<ItemRequest>> {
        let requests = self.requests.read().await;
        let mut found: Vec<ItemRequest> = requests
            .values()
            .filter(|r| r.requester_id == requester_id)
            .cloned()
            .collect();
        Self::sort_created_desc(&mut found);
        Ok(found)
    }

    async fn find_all_except(
        &self,
        user_id: Uuid,
        page: Pagination,
    ) -> DomainResult<Vec<ItemRequest>> {
        let requests = self.requests.read().await;
        let mut found: Vec<ItemRequest> = requests
            .values()
            .filter(|r| r.requester_id != user_id)
            .cloned()
            .collect();
        Self::sort_created_desc(&mut found);
        Ok(page.slice(found))
    }
}
