//! Git operations module
//!
//! Validates the target repository and checks Git availability

pub mod repository;

pub use repository::*;
