//! # feriae-core
//!
//! Error types and shared definitions for the feriae holiday engine.
//!
//! This crate provides the error hierarchy and the `ensure!` / `fail!`
//! convenience macros shared across all other crates in the workspace.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Error types and the `ensure!` / `fail!` macros.
pub mod errors;

pub use errors::{Error, Result};
