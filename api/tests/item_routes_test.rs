//! Handler tests for the /items endpoints

mod common;

use actix_web::{http::StatusCode, test};
use serde_json::{json, Value};

#[actix_web::test]
async fn test_item_create_requires_user_header() {
    let state = common::mock_state();
    let app = init_app!(state);

    let req = test::TestRequest::post()
        .uri("/items")
        .set_json(json!({"name": "Drill", "description": "Cordless", "available": true}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "BAD_REQUEST");
}

#[actix_web::test]
async fn test_item_lifecycle_with_ownership() {
    let state = common::mock_state();
    let app = init_app!(state);
    let owner = create_user!(app, "Owner");
    let other = create_user!(app, "Other");

    // create
    let req = test::TestRequest::post()
        .uri("/items")
        .insert_header(("X-Sharer-User-Id", owner.clone()))
        .set_json(json!({"name": "Drill", "description": "Cordless", "available": true}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let item: Value = test::read_body_json(resp).await;
    let item_id = item["id"].as_str().unwrap().to_string();

    // a non-owner cannot update
    let req = test::TestRequest::patch()
        .uri(&format!("/items/{}", item_id))
        .insert_header(("X-Sharer-User-Id", other.clone()))
        .set_json(json!({"available": false}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    // the owner can
    let req = test::TestRequest::patch()
        .uri(&format!("/items/{}", item_id))
        .insert_header(("X-Sharer-User-Id", owner.clone()))
        .set_json(json!({"available": false}))
        .to_request();
    let updated: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(updated["available"], false);
    assert_eq!(updated["name"], "Drill");

    // a non-owner cannot delete either
    let req = test::TestRequest::delete()
        .uri(&format!("/items/{}", item_id))
        .insert_header(("X-Sharer-User-Id", other))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
}

#[actix_web::test]
async fn test_search_finds_available_items_only() {
    let state = common::mock_state();
    let app = init_app!(state);
    let owner = create_user!(app, "Owner");

    for (name, available) in [("Power drill", true), ("Broken drill", false)] {
        let req = test::TestRequest::post()
            .uri("/items")
            .insert_header(("X-Sharer-User-Id", owner.clone()))
            .set_json(json!({"name": name, "description": "tool", "available": available}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
    }

    let req = test::TestRequest::get()
        .uri("/items/search?text=DRILL")
        .to_request();
    let found: Value = test::call_and_read_body_json(&app, req).await;
    let found = found.as_array().unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0]["name"], "Power drill");

    // empty text yields an empty list
    let req = test::TestRequest::get().uri("/items/search?text=").to_request();
    let found: Value = test::call_and_read_body_json(&app, req).await;
    assert!(found.as_array().unwrap().is_empty());
}

#[actix_web::test]
async fn test_comment_requires_finished_booking() {
    let state = common::mock_state();
    let app = init_app!(state);
    let owner = create_user!(app, "Owner");
    let other = create_user!(app, "Other");

    let req = test::TestRequest::post()
        .uri("/items")
        .insert_header(("X-Sharer-User-Id", owner.clone()))
        .set_json(json!({"name": "Drill", "description": "Cordless", "available": true}))
        .to_request();
    let item: Value = test::call_and_read_body_json(&app, req).await;
    let item_id = item["id"].as_str().unwrap().to_string();

    let req = test::TestRequest::post()
        .uri(&format!("/items/{}/comment", item_id))
        .insert_header(("X-Sharer-User-Id", other))
        .set_json(json!({"text": "Great drill"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "VALIDATION_ERROR");
}

#[actix_web::test]
async fn test_pagination_is_validated() {
    let state = common::mock_state();
    let app = init_app!(state);
    let owner = create_user!(app, "Owner");

    let req = test::TestRequest::get()
        .uri("/items?from=0&size=0")
        .insert_header(("X-Sharer-User-Id", owner))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}
