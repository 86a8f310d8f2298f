//! Pagination related types for list endpoints
//!
//! List endpoints accept `from` (offset into the result set) and `size`
//! (page size) query parameters. A missing `size` means "no limit".

use serde::{Deserialize, Serialize};

/// Offset/limit pagination parameters for list endpoints
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Pagination {
    /// Offset of the first returned element
    #[serde(default)]
    pub from: u32,

    /// Number of elements to return; `None` returns everything past `from`
    pub size: Option<u32>,
}

impl Default for Pagination {
    fn default() -> Self {
        Self { from: 0, size: None }
    }
}

impl Pagination {
    /// Create a new pagination with explicit values
    pub fn new(from: u32, size: Option<u32>) -> Self {
        Self { from, size }
    }

    /// Check that the parameters describe a valid page
    ///
    /// `from` is unsigned so only a zero `size` can be rejected here;
    /// negative values fail query-string deserialization upstream.
    pub fn is_valid(&self) -> bool {
        self.size.map_or(true, |s| s > 0)
    }

    /// Offset for database queries
    pub fn offset(&self) -> u32 {
        self.from
    }

    /// Limit for database queries; `u32::MAX` when unbounded
    pub fn limit(&self) -> u32 {
        self.size.unwrap_or(u32::MAX)
    }

    /// Offset as i64 for SQL binds
    pub fn offset_i64(&self) -> i64 {
        self.offset() as i64
    }

    /// Limit as i64 for SQL binds
    pub fn limit_i64(&self) -> i64 {
        self.limit() as i64
    }

    /// Apply this page to an already sorted in-memory result set
    pub fn slice<T>(&self, items: Vec<T>) -> Vec<T> {
        items
            .into_iter()
            .skip(self.from as usize)
            .take(self.limit() as usize)
            .collect()
    }
}
