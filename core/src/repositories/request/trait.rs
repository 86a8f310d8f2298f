//! Item request repository trait.

use async_trait::async_trait;
use si_shared::types::Pagination;
use uuid::Uuid;

use crate::domain::entities::ItemRequest;
use crate::errors::DomainResult;

/// Repository trait for ItemRequest persistence operations
#[async_trait]
pub trait RequestRepository: Send + Sync {
    /// Persist a new request
    async fn create(&self, request: ItemRequest) -> DomainResult<ItemRequest>;

    /// Find a request by its unique identifier
    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<ItemRequest>>;

    /// Requests posted by `requester_id`, newest first
    async fn find_by_requester(&self, requester_id: Uuid) -> DomainResult<Vec<ItemRequest>>;

    /// Requests posted by everyone except `user_id`, newest first, paginated
    async fn find_all_except(
        &self,
        user_id: Uuid,
        page: Pagination,
    ) -> DomainResult<Vec<ItemRequest>>;
}
