//! Service layer providing business-oriented operations on top of models.
//! - Separates catalog logic from the persistence mechanism.
//! - Reuses validation and entity definitions in `models` crate.
//! - Provides clear error types and documented interfaces.

pub mod catalog;
pub mod errors;
pub mod pagination;
pub mod pricing;
pub mod runtime;
pub mod storage;
