//! Installation module
//!
//! Coordinates directory creation, file acquisition, and post-install
//! housekeeping

pub mod housekeeping;
pub mod installer;

pub use installer::*;
