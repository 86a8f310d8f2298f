//! Handlers for the `/bookings` endpoints.

use actix_web::{web, HttpRequest, HttpResponse};
use uuid::Uuid;

use si_core::repositories::{
    BookingRepository, CommentRepository, ItemRepository, RequestRepository, UserRepository,
};

use crate::dto::{BookingDto, CreateBookingRequest};
use crate::handlers::error;
use crate::routes::{page_from, sharer_user_id, ApprovedQuery, StateQuery};
use crate::state::AppState;

/// Handler for `POST /bookings`
pub async fn create<U, I, B, C, R>(
    req: HttpRequest,
    state: web::Data<AppState<U, I, B, C, R>>,
    body: web::Json<CreateBookingRequest>,
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
        .booking_service
        .create(user_id, body.item_id, body.start, body.end)
        .await
    {
        Ok(view) => HttpResponse::Ok().json(BookingDto::from(view)),
        Err(e) => error::to_response(&e),
    }
}

/// Handler for `PATCH /bookings/{bookingId}?approved={bool}`
pub async fn update<U, I, B, C, R>(
    req: HttpRequest,
    state: web::Data<AppState<U, I, B, C, R>>,
    path: web::Path<Uuid>,
    query: web::Query<ApprovedQuery>,
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
    let approved = match query.approved {
        Some(approved) => approved,
        None => return error::bad_request("Query parameter 'approved' is required"),
    };

    match state
        .booking_service
        .update(path.into_inner(), user_id, approved)
        .await
    {
        Ok(view) => HttpResponse::Ok().json(BookingDto::from(view)),
        Err(e) => error::to_response(&e),
    }
}

/// Handler for `GET /bookings/{bookingId}`
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

    match state.booking_service.get(path.into_inner(), user_id).await {
        Ok(view) => HttpResponse::Ok().json(BookingDto::from(view)),
        Err(e) => error::to_response(&e),
    }
}

/// Handler for `GET /bookings?state=&from=&size=`
pub async fn get_for_booker<U, I, B, C, R>(
    req: HttpRequest,
    state: web::Data<AppState<U, I, B, C, R>>,
    query: web::Query<StateQuery>,
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

    match state
        .booking_service
        .get_for_booker(user_id, query.state(), page)
        .await
    {
        Ok(views) => {
            HttpResponse::Ok().json(views.into_iter().map(BookingDto::from).collect::<Vec<_>>())
        }
        Err(e) => error::to_response(&e),
    }
}

/// Handler for `GET /bookings/owner?state=&from=&size=`
pub async fn get_for_owner<U, I, B, C, R>(
    req: HttpRequest,
    state: web::Data<AppState<U, I, B, C, R>>,
    query: web::Query<StateQuery>,
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

    match state
        .booking_service
        .get_for_owner(user_id, query.state(), page)
        .await
    {
        Ok(views) => {
            HttpResponse::Ok().json(views.into_iter().map(BookingDto::from).collect::<Vec<_>>())
        }
        Err(e) => error::to_response(&e),
    }
}
