//! Shared error and value types

pub mod errors;
pub mod types;
