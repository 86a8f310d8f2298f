//! Item request service: broadcast asks and their fulfillment lists.

use std::sync::Arc;

use si_shared::types::Pagination;
use si_shared::utils::validation::validators;
use uuid::Uuid;

use crate::domain::entities::ItemRequest;
use crate::domain::value_objects::RequestView;
use crate::errors::{DomainError, DomainResult};
use crate::repositories::{ItemRepository, RequestRepository, UserRepository};

/// Service managing item requests
pub struct RequestService<R, U, I>
where
    R: RequestRepository,
    U: UserRepository,
    I: ItemRepository,
{
    /// Request repository for database operations
    request_repository: Arc<R>,
    /// User repository for requester checks
    user_repository: Arc<U>,
    /// Item repository for the fulfillment lookup
    item_repository: Arc<I>,
}

impl<R, U, I> RequestService<R, U, I>
where
    R: RequestRepository,
    U: UserRepository,
    I: ItemRepository,
{
    /// Create a new request service
    pub fn new(request_repository: Arc<R>, user_repository: Arc<U>, item_repository: Arc<I>) -> Self {
        Self {
            request_repository,
            user_repository,
            item_repository,
        }
    }

    /// Broadcast a new item request
    pub async fn create(&self, requester_id: Uuid, description: String) -> DomainResult<RequestView> {
        tracing::info!(requester_id = %requester_id, "creating item request");

        self.require_user(requester_id).await?;

        if !validators::not_empty(&description) {
            return Err(DomainError::validation(
                "Request description must not be empty",
            ));
        }

        let request = self
            .request_repository
            .create(ItemRequest::new(description, requester_id))
            .await?;
        Ok(RequestView {
            request,
            items: Vec::new(),
        })
    }

    /// The caller's own requests, newest first
    pub async fn get_own(&self, user_id: Uuid) -> DomainResult<Vec<RequestView>> {
        self.require_user(user_id).await?;

        let requests = self.request_repository.find_by_requester(user_id).await?;
        self.assemble(requests).await
    }

    /// Other users' requests, newest first, paginated
    pub async fn get_all(&self, user_id: Uuid, page: Pagination) -> DomainResult<Vec<RequestView>> {
        self.require_user(user_id).await?;

        let requests = self
            .request_repository
            .find_all_except(user_id, page)
            .await?;
        self.assemble(requests).await
    }

    /// Fetch one request by id; any existing user may view it
    pub async fn get(&self, request_id: Uuid, user_id: Uuid) -> DomainResult<RequestView> {
        self.require_user(user_id).await?;

        let request = self
            .request_repository
            .find_by_id(request_id)
            .await?
            .ok_or_else(|| DomainError::not_found(format!("Item request id={}", request_id)))?;

        let items = self.item_repository.find_by_request(request.id).await?;
        Ok(RequestView { request, items })
    }

    async fn require_user(&self, id: Uuid) -> DomainResult<()> {
        self.user_repository
            .find_by_id(id)
            .await?
            .map(|_| ())
            .ok_or_else(|| DomainError::not_found(format!("User id={}", id)))
    }

    async fn assemble(&self, requests: Vec<ItemRequest>) -> DomainResult<Vec<RequestView>> {
        let mut views = Vec::with_capacity(requests.len());
        for request in requests {
            let items = self.item_repository.find_by_request(request.id).await?;
            views.push(RequestView { request, items });
        }
        Ok(views)
    }
}
