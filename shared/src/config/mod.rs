//! Configuration module with per-process sub-modules
//!
//! This module organizes configuration into logical areas:
//! - `database` - Database connection and pool configuration
//! - `server` - HTTP server configuration for the api process
//! - `gateway` - Gateway process configuration

pub mod database;
pub mod gateway;
pub mod server;

// Re-export commonly used types
pub use database::DatabaseConfig;
pub use gateway::GatewayConfig;
pub use server::ServerConfig;
