use serde::{Deserialize, Serialize};

use crate::errors::ModelError;

/// One course record. `id` is assigned by the store and never client-supplied.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Course {
    pub id: u64,
    pub title: String,
    pub description: String,
}

/// The full persisted catalog, serialized as `{"courses": [...]}`.
/// Order is insertion order; lookups are linear scans.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Catalog {
    pub courses: Vec<Course>,
}

impl Catalog {
    /// Next id to assign on create: `max(existing) + 1`, `1` when empty.
    ///
    /// A length-based counter would reuse ids after a delete; the max-based
    /// rule keeps ids unique across the catalog lifetime.
    pub fn next_id(&self) -> u64 {
        self.courses.iter().map(|c| c.id).max().unwrap_or(0) + 1
    }

    pub fn find(&self, id: u64) -> Option<&Course> {
        self.courses.iter().find(|c| c.id == id)
    }

    pub fn find_mut(&mut self, id: u64) -> Option<&mut Course> {
        self.courses.iter_mut().find(|c| c.id == id)
    }

    /// Remove every record with the given id; returns whether any existed.
    pub fn remove(&mut self, id: u64) -> bool {
        let before = self.courses.len();
        self.courses.retain(|c| c.id != id);
        self.courses.len() != before
    }
}

pub fn validate_title(t: &str) -> Result<String, ModelError> {
    let trimmed = t.trim();
    if trimmed.is_empty() {
        return Err(ModelError::Validation("Please provide a title".into()));
    }
    Ok(trimmed.to_string())
}

pub fn validate_description(d: &str) -> Result<String, ModelError> {
    let trimmed = d.trim();
    if trimmed.is_empty() {
        return Err(ModelError::Validation("Please provide a description".into()));
    }
    Ok(trimmed.to_string())
}
