//! Cross-cutting handler helpers

pub mod error;
