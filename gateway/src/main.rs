//! Validating gateway for the ShareIt backend.
//!
//! Checks headers, bodies and query parameters before requests ever
//! reach the core server, then forwards them verbatim and relays the
//! response.

use actix_web::{middleware::Logger, web, App, HttpServer};
use dotenv::dotenv;
use log::info;

use si_shared::config::GatewayConfig;

mod client;
mod dto;
mod handlers;
mod routes;

use client::ServerClient;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables
    dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    info!("Starting ShareIt Gateway");

    let config = GatewayConfig::from_env();
    let bind_address = config.bind_address();
    info!(
        "Gateway will bind to: {} and forward to: {}",
        bind_address, config.server_url
    );

    let client = web::Data::new(
        ServerClient::new(&config).expect("Failed to create the forwarding HTTP client"),
    );

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(client.clone())
            .configure(routes::configure)
    })
    .bind(&bind_address)?
    .run()
    .await
}
