//! Command-line interface module
//!
//! Handles argument parsing and per-run configuration

pub mod args;

pub use args::*;
