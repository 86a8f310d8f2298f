//! Item service: catalog CRUD, search and comments.

use std::sync::Arc;

use chrono::Utc;
use si_shared::types::Pagination;
use si_shared::utils::validation::validators;
use uuid::Uuid;

use crate::domain::entities::{Comment, Item, User};
use crate::domain::value_objects::{CommentView, ItemView, ShortBookingInfo};
use crate::errors::{DomainError, DomainResult};
use crate::repositories::{BookingRepository, CommentRepository, ItemRepository, UserRepository};

/// Service managing the item catalog
pub struct ItemService<I, U, B, C>
where
    I: ItemRepository,
    U: UserRepository,
    B: BookingRepository,
    C: CommentRepository,
{
    /// Item repository for database operations
    item_repository: Arc<I>,
    /// User repository for owner and author checks
    user_repository: Arc<U>,
    /// Booking repository for the owner's item view and comment gating
    booking_repository: Arc<B>,
    /// Comment repository
    comment_repository: Arc<C>,
}

impl<I, U, B, C> ItemService<I, U, B, C>
where
    I: ItemRepository,
    U: UserRepository,
    B: BookingRepository,
    C: CommentRepository,
{
    /// Create a new item service
    pub fn new(
        item_repository: Arc<I>,
        user_repository: Arc<U>,
        booking_repository: Arc<B>,
        comment_repository: Arc<C>,
    ) -> Self {
        Self {
            item_repository,
            user_repository,
            booking_repository,
            comment_repository,
        }
    }

    /// List a new item owned by `owner_id`
    pub async fn create(
        &self,
        owner_id: Uuid,
        name: String,
        description: String,
        available: bool,
        request_id: Option<Uuid>,
    ) -> DomainResult<Item> {
        tracing::info!(owner_id = %owner_id, name = %name, "creating item");

        self.require_user(owner_id).await?;

        if !validators::not_empty(&name) {
            return Err(DomainError::validation("Item name must not be empty"));
        }
        if !validators::not_empty(&description) {
            return Err(DomainError::validation("Item description must not be empty"));
        }

        self.item_repository
            .create(Item::new(name, description, available, owner_id, request_id))
            .await
    }

    /// Partially update an item; only the owner may do this
    pub async fn update(
        &self,
        item_id: Uuid,
        user_id: Uuid,
        name: Option<String>,
        description: Option<String>,
        available: Option<bool>,
    ) -> DomainResult<Item> {
        tracing::info!(item_id = %item_id, user_id = %user_id, "updating item");

        let mut item = self.require_item(item_id).await?;
        if !item.is_owned_by(user_id) {
            tracing::warn!(item_id = %item_id, user_id = %user_id, "item update denied");
            return Err(DomainError::forbidden(format!(
                "User id={} is not allowed to update item id={}",
                user_id, item_id
            )));
        }

        if let Some(ref name) = name {
            if !validators::not_empty(name) {
                return Err(DomainError::validation("Item name must not be empty"));
            }
        }
        if let Some(ref description) = description {
            if !validators::not_empty(description) {
                return Err(DomainError::validation("Item description must not be empty"));
            }
        }

        item.apply_update(name, description, available);
        self.item_repository.update(item).await
    }

    /// Delete an item; only the owner may do this
    pub async fn delete(&self, item_id: Uuid, user_id: Uuid) -> DomainResult<()> {
        tracing::info!(item_id = %item_id, user_id = %user_id, "deleting item");

        let item = self.require_item(item_id).await?;
        if !item.is_owned_by(user_id) {
            tracing::warn!(item_id = %item_id, user_id = %user_id, "item delete denied");
            return Err(DomainError::forbidden(format!(
                "User id={} is not allowed to delete item id={}",
                user_id, item_id
            )));
        }

        self.item_repository.delete(item_id).await?;
        Ok(())
    }

    /// Fetch one item with comments; the owner additionally sees the
    /// last and next bookings
    pub async fn get(&self, item_id: Uuid, user_id: Uuid) -> DomainResult<ItemView> {
        let item = self.require_item(item_id).await?;
        let with_bookings = item.is_owned_by(user_id);
        self.assemble(item, with_bookings).await
    }

    /// All items of `user_id` in the extended (owner) view, paginated
    pub async fn get_all_of_user(
        &self,
        user_id: Uuid,
        page: Pagination,
    ) -> DomainResult<Vec<ItemView>> {
        let items = self.item_repository.find_by_owner(user_id, page).await?;
        let mut views = Vec::with_capacity(items.len());
        for item in items {
            views.push(self.assemble(item, true).await?);
        }
        Ok(views)
    }

    /// Search available items by a case-insensitive text match over
    /// name and description; empty text yields an empty list
    pub async fn search(&self, text: &str, page: Pagination) -> DomainResult<Vec<ItemView>> {
        if !validators::not_empty(text) {
            return Ok(Vec::new());
        }

        let items = self.item_repository.search(text, page).await?;
        let mut views = Vec::with_capacity(items.len());
        for item in items {
            views.push(self.assemble(item, false).await?);
        }
        Ok(views)
    }

    /// Comment on an item
    ///
    /// Only a user with an approved booking of the item that already
    /// ended may comment.
    pub async fn add_comment(
        &self,
        item_id: Uuid,
        user_id: Uuid,
        text: String,
    ) -> DomainResult<CommentView> {
        tracing::info!(item_id = %item_id, user_id = %user_id, "adding comment");

        let author = self.require_user(user_id).await?;
        self.require_item(item_id).await?;

        if !validators::not_empty(&text) {
            return Err(DomainError::validation("Comment text must not be empty"));
        }

        let booked = self
            .booking_repository
            .find_finished_approved(item_id, user_id, Utc::now())
            .await?;
        if booked.is_none() {
            tracing::warn!(item_id = %item_id, user_id = %user_id, "comment without finished booking");
            return Err(DomainError::validation(format!(
                "User id={} has never booked item id={}",
                user_id, item_id
            )));
        }

        let comment = self
            .comment_repository
            .create(Comment::new(text, item_id, user_id))
            .await?;
        Ok(CommentView {
            comment,
            author_name: author.name,
        })
    }

    /// Comments on an item, newest first
    pub async fn get_comments(&self, item_id: Uuid) -> DomainResult<Vec<CommentView>> {
        let comments = self.comment_repository.find_by_item(item_id).await?;
        let mut views = Vec::with_capacity(comments.len());
        for comment in comments {
            let author_name = self
                .user_repository
                .find_by_id(comment.author_id)
                .await?
                .map(|u| u.name)
                .unwrap_or_default();
            views.push(CommentView {
                comment,
                author_name,
            });
        }
        Ok(views)
    }

    async fn require_user(&self, id: Uuid) -> DomainResult<User> {
        self.user_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found(format!("User id={}", id)))
    }

    async fn require_item(&self, id: Uuid) -> DomainResult<Item> {
        self.item_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found(format!("Item id={}", id)))
    }

    async fn assemble(&self, item: Item, with_bookings: bool) -> DomainResult<ItemView> {
        let comments = self.get_comments(item.id).await?;

        let (last_booking, next_booking) = if with_bookings {
            let now = Utc::now();
            let last = self
                .booking_repository
                .find_last_for_item(item.id, now)
                .await?;
            let next = self
                .booking_repository
                .find_next_for_item(item.id, now)
                .await?;
            (
                last.as_ref().map(ShortBookingInfo::from),
                next.as_ref().map(ShortBookingInfo::from),
            )
        } else {
            (None, None)
        };

        Ok(ItemView {
            item,
            last_booking,
            next_booking,
            comments,
        })
    }
}
