use actix_web::{middleware::Logger, web, App, HttpServer};
use dotenv::dotenv;
use log::info;
use std::sync::Arc;

use si_api::{app, middleware, AppState};
use si_infra::database::{
    DatabasePool, MySqlBookingRepository, MySqlCommentRepository, MySqlItemRepository,
    MySqlRequestRepository, MySqlUserRepository,
};
use si_shared::config::{DatabaseConfig, ServerConfig};

type MySqlAppState = AppState<
    MySqlUserRepository,
    MySqlItemRepository,
    MySqlBookingRepository,
    MySqlCommentRepository,
    MySqlRequestRepository,
>;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables
    dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    info!("Starting ShareIt API Server");

    let server_config = ServerConfig::from_env();
    let database_config = DatabaseConfig::from_env();

    let pool = DatabasePool::new(database_config)
        .await
        .expect("Failed to create database pool");
    pool.run_migrations()
        .await
        .expect("Failed to run database migrations");

    let sqlx_pool = pool.get_pool().clone();
    let state = web::Data::new(MySqlAppState::new(
        Arc::new(MySqlUserRepository::new(sqlx_pool.clone())),
        Arc::new(MySqlItemRepository::new(sqlx_pool.clone())),
        Arc::new(MySqlBookingRepository::new(sqlx_pool.clone())),
        Arc::new(MySqlCommentRepository::new(sqlx_pool.clone())),
        Arc::new(MySqlRequestRepository::new(sqlx_pool)),
    ));

    let bind_address = server_config.bind_address();
    info!("Server will bind to: {}", bind_address);

    let mut server = HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(middleware::cors::create_cors())
            .app_data(state.clone())
            .configure(app::configure::<
                MySqlUserRepository,
                MySqlItemRepository,
                MySqlBookingRepository,
                MySqlCommentRepository,
                MySqlRequestRepository,
            >)
    })
    .bind(&bind_address)?;

    if server_config.workers > 0 {
        server = server.workers(server_config.workers);
    }

    server.run().await
}
