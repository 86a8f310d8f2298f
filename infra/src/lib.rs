//! # Infrastructure Layer
//!
//! Concrete implementations for external resources of the ShareIt
//! backend: the MySQL database access layer built on SQLx.

pub mod database;

use thiserror::Error;

/// Errors raised while talking to infrastructure services
#[derive(Error, Debug)]
pub enum InfrastructureError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}
