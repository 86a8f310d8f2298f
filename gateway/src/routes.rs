//! Gateway route handlers: validate, then forward.

use actix_web::{web, HttpRequest, HttpResponse};
use chrono::Utc;
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use si_core::domain::value_objects::BookingState;

use crate::client::ServerClient;
use crate::dto::{
    BookItemRequest, CreateCommentRequest, CreateItemRequest, CreateRequestRequest,
    CreateUserRequest, UpdateItemRequest, UpdateUserRequest,
};
use crate::handlers::{bad_request, unknown_state, validation_failed};

/// Header identifying the acting user
pub const USER_ID_HEADER: &str = "X-Sharer-User-Id";

/// Query parameters of the booking list endpoints
#[derive(Debug, Deserialize)]
pub struct StateQuery {
    state: Option<String>,
    #[serde(default)]
    from: u32,
    size: Option<u32>,
}

/// Query parameters of the item search endpoint
#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    text: String,
    #[serde(default)]
    from: u32,
    size: Option<u32>,
}

/// Plain pagination query parameters
#[derive(Debug, Deserialize)]
pub struct PageQuery {
    #[serde(default)]
    from: u32,
    size: Option<u32>,
}

/// Query parameter of the booking decision endpoint
#[derive(Debug, Deserialize)]
pub struct ApprovedQuery {
    approved: Option<bool>,
}

/// Register every gateway route
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/users")
            .route("", web::post().to(create_user))
            .route("", web::get().to(get_all_users))
            .route("/{userId}", web::get().to(get_user))
            .route("/{userId}", web::patch().to(update_user))
            .route("/{userId}", web::delete().to(delete_user)),
    )
    .service(
        web::scope("/items")
            .route("", web::post().to(create_item))
            .route("", web::get().to(get_items_of_user))
            .route("/search", web::get().to(search_items))
            .route("/{itemId}", web::get().to(get_item))
            .route("/{itemId}", web::patch().to(update_item))
            .route("/{itemId}", web::delete().to(delete_item))
            .route("/{itemId}/comment", web::post().to(add_comment)),
    )
    .service(
        web::scope("/bookings")
            .route("", web::post().to(create_booking))
            .route("", web::get().to(get_bookings))
            .route("/owner", web::get().to(get_bookings_owner))
            .route("/{bookingId}", web::get().to(get_booking))
            .route("/{bookingId}", web::patch().to(update_booking)),
    )
    .service(
        web::scope("/requests")
            .route("", web::post().to(create_request))
            .route("", web::get().to(get_own_requests))
            .route("/all", web::get().to(get_all_requests))
            .route("/{requestId}", web::get().to(get_request)),
    );
}

/// Extract the acting user id from the `X-Sharer-User-Id` header
fn sharer_user_id(req: &HttpRequest) -> Result<Uuid, HttpResponse> {
    let value = req
        .headers()
        .get(USER_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| {
            bad_request(format!(
                "Required request header '{}' is not present",
                USER_ID_HEADER
            ))
        })?;

    Uuid::parse_str(value)
        .map_err(|_| bad_request(format!("Header '{}' must be a valid UUID", USER_ID_HEADER)))
}

/// Validate from/size and render them as forwardable query pairs
fn page_query(from: u32, size: Option<u32>) -> Result<Vec<(&'static str, String)>, HttpResponse> {
    if size == Some(0) {
        return Err(bad_request("Pagination parameter 'size' must be positive"));
    }

    let mut query = vec![("from", from.to_string())];
    if let Some(size) = size {
        query.push(("size", size.to_string()));
    }
    Ok(query)
}

/// Validate the state keyword and return its canonical form
fn state_param(state: Option<&str>) -> Result<&'static str, HttpResponse> {
    let raw = state.unwrap_or("ALL");
    match BookingState::parse(raw) {
        Some(state) => Ok(state.as_str()),
        None => Err(unknown_state(raw)),
    }
}

// --- /users ---

async fn create_user(
    client: web::Data<ServerClient>,
    body: web::Json<CreateUserRequest>,
) -> HttpResponse {
    if let Err(errors) = body.validate() {
        return validation_failed(&errors);
    }
    log::info!("POST /users name={}", body.name);
    client.post("/users", None, &body.into_inner()).await
}

async fn update_user(
    client: web::Data<ServerClient>,
    path: web::Path<Uuid>,
    body: web::Json<UpdateUserRequest>,
) -> HttpResponse {
    if let Err(errors) = body.validate() {
        return validation_failed(&errors);
    }
    client
        .patch(
            &format!("/users/{}", path.into_inner()),
            None,
            &[],
            Some(&body.into_inner()),
        )
        .await
}

async fn delete_user(client: web::Data<ServerClient>, path: web::Path<Uuid>) -> HttpResponse {
    client
        .delete(&format!("/users/{}", path.into_inner()), None)
        .await
}

async fn get_all_users(client: web::Data<ServerClient>) -> HttpResponse {
    client.get("/users", None, &[]).await
}

async fn get_user(client: web::Data<ServerClient>, path: web::Path<Uuid>) -> HttpResponse {
    client
        .get(&format!("/users/{}", path.into_inner()), None, &[])
        .await
}

// --- /items ---

async fn create_item(
    req: HttpRequest,
    client: web::Data<ServerClient>,
    body: web::Json<CreateItemRequest>,
) -> HttpResponse {
    let user_id = match sharer_user_id(&req) {
        Ok(id) => id,
        Err(resp) => return resp,
    };
    if let Err(errors) = body.validate() {
        return validation_failed(&errors);
    }
    log::info!("POST /items userId={} name={}", user_id, body.name);
    client.post("/items", Some(user_id), &body.into_inner()).await
}

async fn update_item(
    req: HttpRequest,
    client: web::Data<ServerClient>,
    path: web::Path<Uuid>,
    body: web::Json<UpdateItemRequest>,
) -> HttpResponse {
    let user_id = match sharer_user_id(&req) {
        Ok(id) => id,
        Err(resp) => return resp,
    };
    client
        .patch(
            &format!("/items/{}", path.into_inner()),
            Some(user_id),
            &[],
            Some(&body.into_inner()),
        )
        .await
}

async fn delete_item(
    req: HttpRequest,
    client: web::Data<ServerClient>,
    path: web::Path<Uuid>,
) -> HttpResponse {
    let user_id = match sharer_user_id(&req) {
        Ok(id) => id,
        Err(resp) => return resp,
    };
    client
        .delete(&format!("/items/{}", path.into_inner()), Some(user_id))
        .await
}

async fn get_item(
    req: HttpRequest,
    client: web::Data<ServerClient>,
    path: web::Path<Uuid>,
) -> HttpResponse {
    let user_id = match sharer_user_id(&req) {
        Ok(id) => id,
        Err(resp) => return resp,
    };
    client
        .get(&format!("/items/{}", path.into_inner()), Some(user_id), &[])
        .await
}

async fn get_items_of_user(
    req: HttpRequest,
    client: web::Data<ServerClient>,
    query: web::Query<PageQuery>,
) -> HttpResponse {
    let user_id = match sharer_user_id(&req) {
        Ok(id) => id,
        Err(resp) => return resp,
    };
    let page = match page_query(query.from, query.size) {
        Ok(page) => page,
        Err(resp) => return resp,
    };
    client.get("/items", Some(user_id), &page).await
}

async fn search_items(
    client: web::Data<ServerClient>,
    query: web::Query<SearchQuery>,
) -> HttpResponse {
    let mut pairs = match page_query(query.from, query.size) {
        Ok(pairs) => pairs,
        Err(resp) => return resp,
    };
    pairs.push(("text", query.text.clone()));
    log::info!("GET /items/search text='{}'", query.text);
    client.get("/items/search", None, &pairs).await
}

async fn add_comment(
    req: HttpRequest,
    client: web::Data<ServerClient>,
    path: web::Path<Uuid>,
    body: web::Json<CreateCommentRequest>,
) -> HttpResponse {
    let user_id = match sharer_user_id(&req) {
        Ok(id) => id,
        Err(resp) => return resp,
    };
    if let Err(errors) = body.validate() {
        return validation_failed(&errors);
    }
    client
        .post(
            &format!("/items/{}/comment", path.into_inner()),
            Some(user_id),
            &body.into_inner(),
        )
        .await
}

// --- /bookings ---

async fn create_booking(
    req: HttpRequest,
    client: web::Data<ServerClient>,
    body: web::Json<BookItemRequest>,
) -> HttpResponse {
    let user_id = match sharer_user_id(&req) {
        Ok(id) => id,
        Err(resp) => return resp,
    };
    if !body.dates_are_sane(Utc::now()) {
        return bad_request("Wrong start or end date");
    }
    log::info!("POST /bookings userId={} itemId={}", user_id, body.item_id);
    client
        .post("/bookings", Some(user_id), &body.into_inner())
        .await
}

async fn update_booking(
    req: HttpRequest,
    client: web::Data<ServerClient>,
    path: web::Path<Uuid>,
    query: web::Query<ApprovedQuery>,
) -> HttpResponse {
    let user_id = match sharer_user_id(&req) {
        Ok(id) => id,
        Err(resp) => return resp,
    };
    let approved = match query.approved {
        Some(approved) => approved,
        None => return bad_request("Query parameter 'approved' is required"),
    };
    client
        .patch::<()>(
            &format!("/bookings/{}", path.into_inner()),
            Some(user_id),
            &[("approved", approved.to_string())],
            None,
        )
        .await
}

async fn get_booking(
    req: HttpRequest,
    client: web::Data<ServerClient>,
    path: web::Path<Uuid>,
) -> HttpResponse {
    let user_id = match sharer_user_id(&req) {
        Ok(id) => id,
        Err(resp) => return resp,
    };
    client
        .get(
            &format!("/bookings/{}", path.into_inner()),
            Some(user_id),
            &[],
        )
        .await
}

async fn get_bookings(
    req: HttpRequest,
    client: web::Data<ServerClient>,
    query: web::Query<StateQuery>,
) -> HttpResponse {
    forward_booking_list(req, client, query, "/bookings").await
}

async fn get_bookings_owner(
    req: HttpRequest,
    client: web::Data<ServerClient>,
    query: web::Query<StateQuery>,
) -> HttpResponse {
    forward_booking_list(req, client, query, "/bookings/owner").await
}

async fn forward_booking_list(
    req: HttpRequest,
    client: web::Data<ServerClient>,
    query: web::Query<StateQuery>,
    path: &str,
) -> HttpResponse {
    let user_id = match sharer_user_id(&req) {
        Ok(id) => id,
        Err(resp) => return resp,
    };
    let state = match state_param(query.state.as_deref()) {
        Ok(state) => state,
        Err(resp) => return resp,
    };
    let mut pairs = match page_query(query.from, query.size) {
        Ok(pairs) => pairs,
        Err(resp) => return resp,
    };
    pairs.push(("state", state.to_string()));
    log::info!("GET {} userId={} state={}", path, user_id, state);
    client.get(path, Some(user_id), &pairs).await
}

// --- /requests ---

async fn create_request(
    req: HttpRequest,
    client: web::Data<ServerClient>,
    body: web::Json<CreateRequestRequest>,
) -> HttpResponse {
    let user_id = match sharer_user_id(&req) {
        Ok(id) => id,
        Err(resp) => return resp,
    };
    if let Err(errors) = body.validate() {
        return validation_failed(&errors);
    }
    client
        .post("/requests", Some(user_id), &body.into_inner())
        .await
}

async fn get_own_requests(req: HttpRequest, client: web::Data<ServerClient>) -> HttpResponse {
    let user_id = match sharer_user_id(&req) {
        Ok(id) => id,
        Err(resp) => return resp,
    };
    client.get("/requests", Some(user_id), &[]).await
}

async fn get_all_requests(
    req: HttpRequest,
    client: web::Data<ServerClient>,
    query: web::Query<PageQuery>,
) -> HttpResponse {
    let user_id = match sharer_user_id(&req) {
        Ok(id) => id,
        Err(resp) => return resp,
    };
    let page = match page_query(query.from, query.size) {
        Ok(page) => page,
        Err(resp) => return resp,
    };
    client.get("/requests/all", Some(user_id), &page).await
}

async fn get_request(
    req: HttpRequest,
    client: web::Data<ServerClient>,
    path: web::Path<Uuid>,
) -> HttpResponse {
    let user_id = match sharer_user_id(&req) {
        Ok(id) => id,
        Err(resp) => return resp,
    };
    client
        .get(&format!("/requests/{}", path.into_inner()), Some(user_id), &[])
        .await
}
