//! Handler tests for the /bookings endpoints

mod common;

use actix_web::{http::StatusCode, test};
use chrono::{Duration, Utc};
use serde_json::{json, Value};

/// Create an available item owned by `owner` and return its id
macro_rules! create_item {
    ($app:expr, $owner:expr) => {{
        let req = test::TestRequest::post()
            .uri("/items")
            .insert_header(("X-Sharer-User-Id", $owner.clone()))
            .set_json(json!({"name": "Drill", "description": "Cordless", "available": true}))
            .to_request();
        let body: Value = test::call_and_read_body_json(&$app, req).await;
        body["id"].as_str().unwrap().to_string()
    }};
}

fn booking_body(item_id: &str, start_hours: i64, end_hours: i64) -> Value {
    let now = Utc::now();
    json!({
        "itemId": item_id,
        "start": (now + Duration::hours(start_hours)).to_rfc3339(),
        "end": (now + Duration::hours(end_hours)).to_rfc3339(),
    })
}

#[actix_web::test]
async fn test_booking_flow_create_approve() {
    let state = common::mock_state();
    let app = init_app!(state);
    let owner = create_user!(app, "Owner");
    let booker = create_user!(app, "Booker");
    let item_id = create_item!(app, owner);

    // create
    let req = test::TestRequest::post()
        .uri("/bookings")
        .insert_header(("X-Sharer-User-Id", booker.clone()))
        .set_json(booking_body(&item_id, 1, 2))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let booking: Value = test::read_body_json(resp).await;
    assert_eq!(booking["status"], "WAITING");
    assert_eq!(booking["item"]["name"], "Drill");
    assert_eq!(booking["booker"]["name"], "Booker");
    let booking_id = booking["id"].as_str().unwrap().to_string();

    // the booker may not approve their own booking
    let req = test::TestRequest::patch()
        .uri(&format!("/bookings/{}?approved=true", booking_id))
        .insert_header(("X-Sharer-User-Id", booker.clone()))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    // the owner approves
    let req = test::TestRequest::patch()
        .uri(&format!("/bookings/{}?approved=true", booking_id))
        .insert_header(("X-Sharer-User-Id", owner.clone()))
        .to_request();
    let approved: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(approved["status"], "APPROVED");

    // both parties can view, a stranger cannot
    let stranger = create_user!(app, "Stranger");
    for (user, expected) in [
        (&owner, StatusCode::OK),
        (&booker, StatusCode::OK),
        (&stranger, StatusCode::FORBIDDEN),
    ] {
        let req = test::TestRequest::get()
            .uri(&format!("/bookings/{}", booking_id))
            .insert_header(("X-Sharer-User-Id", user.clone()))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), expected);
    }
}

#[actix_web::test]
async fn test_owner_cannot_book_own_item() {
    let state = common::mock_state();
    let app = init_app!(state);
    let owner = create_user!(app, "Owner");
    let item_id = create_item!(app, owner);

    let req = test::TestRequest::post()
        .uri("/bookings")
        .insert_header(("X-Sharer-User-Id", owner))
        .set_json(booking_body(&item_id, 1, 2))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
}

#[actix_web::test]
async fn test_bad_dates_are_rejected() {
    let state = common::mock_state();
    let app = init_app!(state);
    let owner = create_user!(app, "Owner");
    let booker = create_user!(app, "Booker");
    let item_id = create_item!(app, owner);

    // start in the past
    let req = test::TestRequest::post()
        .uri("/bookings")
        .insert_header(("X-Sharer-User-Id", booker.clone()))
        .set_json(booking_body(&item_id, -1, 2))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    // end before start
    let req = test::TestRequest::post()
        .uri("/bookings")
        .insert_header(("X-Sharer-User-Id", booker))
        .set_json(booking_body(&item_id, 3, 2))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_state_queries_and_unknown_state() {
    let state = common::mock_state();
    let app = init_app!(state);
    let owner = create_user!(app, "Owner");
    let booker = create_user!(app, "Booker");
    let item_id = create_item!(app, owner);

    let req = test::TestRequest::post()
        .uri("/bookings")
        .insert_header(("X-Sharer-User-Id", booker.clone()))
        .set_json(booking_body(&item_id, 1, 2))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    // booker sees it under FUTURE and WAITING, not under PAST
    for (uri, expected) in [
        ("/bookings?state=FUTURE", 1),
        ("/bookings?state=waiting", 1),
        ("/bookings?state=PAST", 0),
        ("/bookings", 1),
    ] {
        let req = test::TestRequest::get()
            .uri(uri)
            .insert_header(("X-Sharer-User-Id", booker.clone()))
            .to_request();
        let found: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(found.as_array().unwrap().len(), expected, "uri: {}", uri);
    }

    // the owner sees it through the owner endpoint
    let req = test::TestRequest::get()
        .uri("/bookings/owner?state=ALL")
        .insert_header(("X-Sharer-User-Id", owner.clone()))
        .to_request();
    let found: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(found.as_array().unwrap().len(), 1);

    // unknown state is a 400 with the envelope
    let req = test::TestRequest::get()
        .uri("/bookings?state=SOMEDAY")
        .insert_header(("X-Sharer-User-Id", booker))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "UNKNOWN_STATE");
}

#[actix_web::test]
async fn test_missing_approved_parameter() {
    let state = common::mock_state();
    let app = init_app!(state);
    let owner = create_user!(app, "Owner");
    let booker = create_user!(app, "Booker");
    let item_id = create_item!(app, owner);

    let req = test::TestRequest::post()
        .uri("/bookings")
        .insert_header(("X-Sharer-User-Id", booker))
        .set_json(booking_body(&item_id, 1, 2))
        .to_request();
    let booking: Value = test::call_and_read_body_json(&app, req).await;
    let booking_id = booking["id"].as_str().unwrap().to_string();

    let req = test::TestRequest::patch()
        .uri(&format!("/bookings/{}", booking_id))
        .insert_header(("X-Sharer-User-Id", owner))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}
