//! Handlers for the `/users` endpoints.

use actix_web::{web, HttpResponse};
use uuid::Uuid;
use validator::Validate;

use si_core::repositories::{
    BookingRepository, CommentRepository, ItemRepository, RequestRepository, UserRepository,
};

use crate::dto::{CreateUserRequest, UpdateUserRequest, UserDto};
use crate::handlers::error;
use crate::state::AppState;

/// Handler for `POST /users`
pub async fn create<U, I, B, C, R>(
    state: web::Data<AppState<U, I, B, C, R>>,
    body: web::Json<CreateUserRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    I: ItemRepository + 'static,
    B: BookingRepository + 'static,
    C: CommentRepository + 'static,
    R: RequestRepository + 'static,
{
    if let Err(errors) = body.validate() {
        return error::validation_failed(&errors);
    }

    let body = body.into_inner();
    match state.user_service.create(body.name, body.email).await {
        Ok(user) => HttpResponse::Ok().json(UserDto::from(user)),
        Err(e) => error::to_response(&e),
    }
}

/// Handler for `PATCH /users/{userId}`
pub async fn update<U, I, B, C, R>(
    state: web::Data<AppState<U, I, B, C, R>>,
    path: web::Path<Uuid>,
    body: web::Json<UpdateUserRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    I: ItemRepository + 'static,
    B: BookingRepository + 'static,
    C: CommentRepository + 'static,
    R: RequestRepository + 'static,
{
    let body = body.into_inner();
    match state
        .user_service
        .update(path.into_inner(), body.name, body.email)
        .await
    {
        Ok(user) => HttpResponse::Ok().json(UserDto::from(user)),
        Err(e) => error::to_response(&e),
    }
}

/// Handler for `DELETE /users/{userId}`
pub async fn delete<U, I, B, C, R>(
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
    match state.user_service.delete(path.into_inner()).await {
        Ok(()) => HttpResponse::Ok().json(true),
        Err(e) => error::to_response(&e),
    }
}

/// Handler for `GET /users`
pub async fn get_all<U, I, B, C, R>(state: web::Data<AppState<U, I, B, C, R>>) -> HttpResponse
where
    U: UserRepository + 'static,
    I: ItemRepository + 'static,
    B: BookingRepository + 'static,
    C: CommentRepository + 'static,
    R: RequestRepository + 'static,
{
    match state.user_service.get_all().await {
        Ok(users) => {
            HttpResponse::Ok().json(users.into_iter().map(UserDto::from).collect::<Vec<_>>())
        }
        Err(e) => error::to_response(&e),
    }
}

/// Handler for `GET /users/{userId}`
pub async fn get_by_id<U, I, B, C, R>(
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
    match state.user_service.get(path.into_inner()).await {
        Ok(user) => HttpResponse::Ok().json(UserDto::from(user)),
        Err(e) => error::to_response(&e),
    }
}
