//! Application route wiring.

use actix_web::{web, HttpResponse};

use si_core::repositories::{
    BookingRepository, CommentRepository, ItemRepository, RequestRepository, UserRepository,
};
use si_shared::errors::{error_codes, ErrorResponse};

use crate::routes::{bookings, items, requests, users};

/// Register every route of the api server
///
/// Generic over the repository implementations carried by the
/// application state; production passes the MySQL types, tests the
/// mocks.
pub fn configure<U, I, B, C, R>(cfg: &mut web::ServiceConfig)
where
    U: UserRepository + 'static,
    I: ItemRepository + 'static,
    B: BookingRepository + 'static,
    C: CommentRepository + 'static,
    R: RequestRepository + 'static,
{
    cfg.route("/health", web::get().to(health_check))
        .service(
            web::scope("/users")
                .route("", web::post().to(users::create::<U, I, B, C, R>))
                .route("", web::get().to(users::get_all::<U, I, B, C, R>))
                .route("/{userId}", web::get().to(users::get_by_id::<U, I, B, C, R>))
                .route("/{userId}", web::patch().to(users::update::<U, I, B, C, R>))
                .route("/{userId}", web::delete().to(users::delete::<U, I, B, C, R>)),
        )
        .service(
            web::scope("/items")
                .route("", web::post().to(items::create::<U, I, B, C, R>))
                .route("", web::get().to(items::get_all_of_user::<U, I, B, C, R>))
                .route("/search", web::get().to(items::search::<U, I, B, C, R>))
                .route("/{itemId}", web::get().to(items::get_by_id::<U, I, B, C, R>))
                .route("/{itemId}", web::patch().to(items::update::<U, I, B, C, R>))
                .route("/{itemId}", web::delete().to(items::delete::<U, I, B, C, R>))
                .route(
                    "/{itemId}/comment",
                    web::post().to(items::add_comment::<U, I, B, C, R>),
                ),
        )
        .service(
            web::scope("/bookings")
                .route("", web::post().to(bookings::create::<U, I, B, C, R>))
                .route("", web::get().to(bookings::get_for_booker::<U, I, B, C, R>))
                .route("/owner", web::get().to(bookings::get_for_owner::<U, I, B, C, R>))
                .route("/{bookingId}", web::get().to(bookings::get_by_id::<U, I, B, C, R>))
                .route("/{bookingId}", web::patch().to(bookings::update::<U, I, B, C, R>)),
        )
        .service(
            web::scope("/requests")
                .route("", web::post().to(requests::create::<U, I, B, C, R>))
                .route("", web::get().to(requests::get_own::<U, I, B, C, R>))
                .route("/all", web::get().to(requests::get_all::<U, I, B, C, R>))
                .route("/{requestId}", web::get().to(requests::get_by_id::<U, I, B, C, R>)),
        )
        .default_service(web::route().to(not_found));
}

/// Health check endpoint
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "shareit-api",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse::new(
        error_codes::NOT_FOUND,
        "The requested resource was not found",
    ))
}
