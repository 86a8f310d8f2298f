//! Handlers for the `/items` endpoints.

use actix_web::{web, HttpRequest, HttpResponse};
use uuid::Uuid;
use validator::Validate;

use si_core::repositories::{
    BookingRepository, CommentRepository, ItemRepository, RequestRepository, UserRepository,
};
use si_shared::types::Pagination;

use crate::dto::{CommentDto, CreateCommentRequest, CreateItemRequest, ItemDto, UpdateItemRequest};
use crate::handlers::error;
use crate::routes::{page_from, sharer_user_id, SearchQuery};
use crate::state::AppState;

/// Handler for `POST /items`
pub async fn create<U, I, B, C, R>(
    req: HttpRequest,
    state: web::Data<AppState<U, I, B, C, R>>,
    body: web::Json<CreateItemRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    I: ItemRepository + 'static,
    B: BookingRepository + 'static,
    C: CommentRepository + 'static,
    R: RequestRepository + 'static,
{
    let user_id = match sharer_user_id(&req) {
        Ok(id) => id,
        Err(resp) => return resp,
    };
    if let Err(errors) = body.validate() {
        return error::validation_failed(&errors);
    }

    let body = body.into_inner();
    match state
        .item_service
        .create(
            user_id,
            body.name,
            body.description,
            body.available,
            body.request_id,
        )
        .await
    {
        Ok(item) => HttpResponse::Ok().json(ItemDto::from(item)),
        Err(e) => error::to_response(&e),
    }
}

/// Handler for `PATCH /items/{itemId}`
pub async fn update<U, I, B, C, R>(
    req: HttpRequest,
    state: web::Data<AppState<U, I, B, C, R>>,
    path: web::Path<Uuid>,
    body: web::Json<UpdateItemRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    I: ItemRepository + 'static,
    B: BookingRepository + 'static,
    C: CommentRepository + 'static,
    R: RequestRepository + 'static,
{
    let user_id = match sharer_user_id(&req) {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    let body = body.into_inner();
    match state
        .item_service
        .update(
            path.into_inner(),
            user_id,
            body.name,
            body.description,
            body.available,
        )
        .await
    {
        Ok(item) => HttpResponse::Ok().json(ItemDto::from(item)),
        Err(e) => error::to_response(&e),
    }
}

/// Handler for `DELETE /items/{itemId}`
pub async fn delete<U, I, B, C, R>(
    req: HttpRequest,
    state: web::Data<AppState<U, I, B, C, R>>,
    path: web::Path<Uuid>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    I: ItemRepository + 'static,
    B: BookingRepository + 'static,
    C: CommentRepository + 'static,
    R: RequestRepository + 'static,
{
    let user_id = match sharer_user_id(&req) {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    match state.item_service.delete(path.into_inner(), user_id).await {
        Ok(()) => HttpResponse::Ok().json(true),
        Err(e) => error::to_response(&e),
    }
}

/// Handler for `GET /items/{itemId}`
pub async fn get_by_id<U, I, B, C, R>(
    req: HttpRequest,
    state: web::Data<AppState<U, I, B, C, R>>,
    path: web::Path<Uuid>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    I: ItemRepository + 'static,
    B: BookingRepository + 'static,
    C: CommentRepository + 'static,
    R: RequestRepository + 'static,
{
    let user_id = match sharer_user_id(&req) {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    match state.item_service.get(path.into_inner(), user_id).await {
        Ok(view) => HttpResponse::Ok().json(ItemDto::from(view)),
        Err(e) => error::to_response(&e),
    }
}

/// Handler for `GET /items`
pub async fn get_all_of_user<U, I, B, C, R>(
    req: HttpRequest,
    state: web::Data<AppState<U, I, B, C, R>>,
    query: web::Query<Pagination>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    I: ItemRepository + 'static,
    B: BookingRepository + 'static,
    C: CommentRepository + 'static,
    R: RequestRepository + 'static,
{
    let user_id = match sharer_user_id(&req) {
        Ok(id) => id,
        Err(resp) => return resp,
    };
    let page = match page_from(query.from, query.size) {
        Ok(page) => page,
        Err(resp) => return resp,
    };

    match state.item_service.get_all_of_user(user_id, page).await {
        Ok(views) => {
            HttpResponse::Ok().json(views.into_iter().map(ItemDto::from).collect::<Vec<_>>())
        }
        Err(e) => error::to_response(&e),
    }
}

/// Handler for `GET /items/search`
pub async fn search<U, I, B, C, R>(
    state: web::Data<AppState<U, I, B, C, R>>,
    query: web::Query<SearchQuery>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    I: ItemRepository + 'static,
    B: BookingRepository + 'static,
    C: CommentRepository + 'static,
    R: RequestRepository + 'static,
{
    let page = match page_from(query.from, query.size) {
        Ok(page) => page,
        Err(resp) => return resp,
    };

    match state.item_service.search(&query.text, page).await {
        Ok(views) => {
            HttpResponse::Ok().json(views.into_iter().map(ItemDto::from).collect::<Vec<_>>())
        }
        Err(e) => error::to_response(&e),
    }
}

/// Handler for `POST /items/{itemId}/comment`
pub async fn add_comment<U, I, B, C, R>(
    req: HttpRequest,
    state: web::Data<AppState<U, I, B, C, R>>,
    path: web::Path<Uuid>,
    body: web::Json<CreateCommentRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    I: ItemRepository + 'static,
    B: BookingRepository + 'static,
    C: CommentRepository + 'static,
    R: RequestRepository + 'static,
{
    let user_id = match sharer_user_id(&req) {
        Ok(id) => id,
        Err(resp) => return resp,
    };
    if let Err(errors) = body.validate() {
        return error::validation_failed(&errors);
    }

    match state
        .item_service
        .add_comment(path.into_inner(), user_id, body.into_inner().text)
        .await
    {
        Ok(view) => HttpResponse::Ok().json(CommentDto::from(view)),
        Err(e) => error::to_response(&e),
    }
}
