//! Handlers for the `/requests` endpoints.

use actix_web::{web, HttpRequest, HttpResponse};
use uuid::Uuid;
use validator::Validate;

use si_core::repositories::{
    BookingRepository, CommentRepository, ItemRepository, RequestRepository, UserRepository,
};

use crate::dto::{CreateRequestRequest, ItemRequestDto};
use crate::handlers::error;
use crate::routes::{page_from, sharer_user_id};
use crate::state::AppState;

use si_shared::types::Pagination;

/// Handler for `POST /requests`
pub async fn create<U, I, B, C, R>(
    req: HttpRequest,
    state: web::Data<AppState<U, I, B, C, R>>,
    body: web::Json<CreateRequestRequest>,
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
        .request_service
        .create(user_id, body.into_inner().description)
        .await
    {
        Ok(view) => HttpResponse::Ok().json(ItemRequestDto::from(view)),
        Err(e) => error::to_response(&e),
    }
}

/// Handler for `GET /requests`
pub async fn get_own<U, I, B, C, R>(
    req: HttpRequest,
    state: web::Data<AppState<U, I, B, C, R>>,
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

    match state.request_service.get_own(user_id).await {
        Ok(views) => HttpResponse::Ok().json(
            views
                .into_iter()
                .map(ItemRequestDto::from)
                .collect::<Vec<_>>(),
        ),
        Err(e) => error::to_response(&e),
    }
}

/// Handler for `GET /requests/all?from=&size=`
pub async fn get_all<U, I, B, C, R>(
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

    match state.request_service.get_all(user_id, page).await {
        Ok(views) => HttpResponse::Ok().json(
            views
                .into_iter()
                .map(ItemRequestDto::from)
                .collect::<Vec<_>>(),
        ),
        Err(e) => error::to_response(&e),
    }
}

/// Handler for `GET /requests/{requestId}`
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

    match state
        .request_service
        .get(path.into_inner(), user_id)
        .await
    {
        Ok(view) => HttpResponse::Ok().json(ItemRequestDto::from(view)),
        Err(e) => error::to_response(&e),
    }
}
