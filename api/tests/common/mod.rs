//! Shared helpers for handler tests: an application wired to the
//! in-memory mock repositories.

use std::sync::Arc;

use actix_web::web;

use si_api::AppState;
use si_core::repositories::{
    MockBookingRepository, MockCommentRepository, MockItemRepository, MockRequestRepository,
    MockUserRepository,
};

pub type MockState = AppState<
    MockUserRepository,
    MockItemRepository,
    MockBookingRepository,
    MockCommentRepository,
    MockRequestRepository,
>;

pub fn mock_state() -> web::Data<MockState> {
    web::Data::new(AppState::new(
        Arc::new(MockUserRepository::new()),
        Arc::new(MockItemRepository::new()),
        Arc::new(MockBookingRepository::new()),
        Arc::new(MockCommentRepository::new()),
        Arc::new(MockRequestRepository::new()),
    ))
}

/// Build the service under test from a mock-backed state
#[macro_export]
macro_rules! init_app {
    ($state:expr) => {
        actix_web::test::init_service(
            actix_web::App::new().app_data($state.clone()).configure(
                si_api::app::configure::<
                    si_core::repositories::MockUserRepository,
                    si_core::repositories::MockItemRepository,
                    si_core::repositories::MockBookingRepository,
                    si_core::repositories::MockCommentRepository,
                    si_core::repositories::MockRequestRepository,
                >,
            ),
        )
        .await
    };
}

/// Create a user through the API and return its id
#[macro_export]
macro_rules! create_user {
    ($app:expr, $name:expr) => {{
        let req = actix_web::test::TestRequest::post()
            .uri("/users")
            .set_json(serde_json::json!({
                "name": $name,
                "email": format!("{}@example.com", $name.to_lowercase())
            }))
            .to_request();
        let body: serde_json::Value =
            actix_web::test::call_and_read_body_json(&$app, req).await;
        body["id"].as_str().unwrap().to_string()
    }};
}
