//! Pagination utilities for service layer
//!
//! Provides a simple `Page` struct and a slicing helper. Pages are 0-based
//! and out-of-range pages yield an empty result rather than an error.

use crate::errors::ServiceError;

/// Pagination parameters
#[derive(Clone, Copy, Debug)]
pub struct Page {
    /// 0-based page index
    pub page: u32,
    /// items per page, must be >= 1
    pub size: u32,
}

impl Page {
    /// Build from optional query inputs, rejecting a zero page size.
    pub fn from_query(page: Option<u32>, size: Option<u32>) -> Result<Self, ServiceError> {
        let page = page.unwrap_or(0);
        let size = size.unwrap_or(2);
        if size == 0 {
            return Err(ServiceError::Validation("size must be a positive integer".into()));
        }
        Ok(Self { page, size })
    }

    /// Return the `[page*size, (page+1)*size)` window of `items`, clipped.
    pub fn slice<T>(self, items: Vec<T>) -> Vec<T> {
        let start = (self.page as usize).saturating_mul(self.size as usize);
        if start >= items.len() {
            return Vec::new();
        }
        items
            .into_iter()
            .skip(start)
            .take(self.size as usize)
            .collect()
    }
}

impl Default for Page {
    fn default() -> Self { Self { page: 0, size: 2 } }
}
