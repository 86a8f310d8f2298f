//! Gateway process configuration

use serde::{Deserialize, Serialize};

/// Configuration for the validating gateway
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GatewayConfig {
    /// Gateway host address
    pub host: String,

    /// Gateway port
    pub port: u16,

    /// Base URL of the core api server requests are forwarded to
    pub server_url: String,

    /// Forwarding request timeout in seconds
    pub request_timeout: u64,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            host: String::from("0.0.0.0"),
            port: 8081,
            server_url: String::from("http://localhost:8080"),
            request_timeout: 30,
        }
    }
}

impl GatewayConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let host = std::env::var("GATEWAY_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = std::env::var("GATEWAY_PORT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(8081);
        let server_url = std::env::var("SHAREIT_SERVER_URL")
            .unwrap_or_else(|_| "http://localhost:8080".to_string());
        let request_timeout = std::env::var("GATEWAY_REQUEST_TIMEOUT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(30);

        Self {
            host,
            port,
            server_url,
            request_timeout,
        }
    }

    /// Get the bind address
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
