//! HTTP client forwarding validated requests to the core server.

use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use reqwest::Method;
use serde::Serialize;
use std::time::Duration;
use uuid::Uuid;

use si_shared::config::GatewayConfig;
use si_shared::errors::{error_codes, ErrorResponse};

use crate::routes::USER_ID_HEADER;

/// Client for the core api server
///
/// Mirrors method, path, query, body and the user header of the
/// inbound request and relays the server's status and body unchanged.
pub struct ServerClient {
    http: reqwest::Client,
    base_url: String,
}

impl ServerClient {
    /// Create a new server client from the gateway configuration
    pub fn new(config: &GatewayConfig) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout))
            .build()?;

        Ok(Self {
            http,
            base_url: config.server_url.trim_end_matches('/').to_string(),
        })
    }

    /// Forward a GET request
    pub async fn get(
        &self,
        path: &str,
        user_id: Option<Uuid>,
        query: &[(&str, String)],
    ) -> HttpResponse {
        self.forward::<()>(Method::GET, path, user_id, query, None)
            .await
    }

    /// Forward a POST request with a JSON body
    pub async fn post<T: Serialize>(
        &self,
        path: &str,
        user_id: Option<Uuid>,
        body: &T,
    ) -> HttpResponse {
        self.forward(Method::POST, path, user_id, &[], Some(body))
            .await
    }

    /// Forward a PATCH request, optionally with a JSON body
    pub async fn patch<T: Serialize>(
        &self,
        path: &str,
        user_id: Option<Uuid>,
        query: &[(&str, String)],
        body: Option<&T>,
    ) -> HttpResponse {
        self.forward(Method::PATCH, path, user_id, query, body).await
    }

    /// Forward a DELETE request
    pub async fn delete(&self, path: &str, user_id: Option<Uuid>) -> HttpResponse {
        self.forward::<()>(Method::DELETE, path, user_id, &[], None)
            .await
    }

    async fn forward<T: Serialize>(
        &self,
        method: Method,
        path: &str,
        user_id: Option<Uuid>,
        query: &[(&str, String)],
        body: Option<&T>,
    ) -> HttpResponse {
        let url = format!("{}{}", self.base_url, path);
        let mut request = self.http.request(method.clone(), &url);

        if let Some(user_id) = user_id {
            request = request.header(USER_ID_HEADER, user_id.to_string());
        }
        if !query.is_empty() {
            request = request.query(query);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        match request.send().await {
            Ok(response) => {
                let status = StatusCode::from_u16(response.status().as_u16())
                    .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
                match response.bytes().await {
                    Ok(bytes) => HttpResponse::build(status)
                        .content_type("application/json")
                        .body(bytes),
                    Err(e) => {
                        log::error!("Failed to read server response from {} {}: {}", method, url, e);
                        server_unreachable()
                    }
                }
            }
            Err(e) => {
                log::error!("Failed to forward {} {}: {}", method, url, e);
                server_unreachable()
            }
        }
    }
}

fn server_unreachable() -> HttpResponse {
    HttpResponse::BadGateway().json(ErrorResponse::new(
        error_codes::INTERNAL_ERROR,
        "The server is unreachable",
    ))
}
