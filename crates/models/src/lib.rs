//! Entity definitions and field validation for the course catalog.
//! - Keeps wire/disk shapes and validation rules in one place.
//! - Business operations live in the `service` crate.

pub mod course;
pub mod errors;
