//! # feriae-time
//!
//! Calendar mathematics for the feriae holiday engine: the Gregorian
//! Easter computus, movable-feast offsets, and weekday search.
//!
//! This crate knows nothing about holidays as such — it only turns years
//! into dates.  Holiday semantics (keys, names, classifications) live in
//! `feriae-providers`.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Gregorian Easter computus and movable-feast arithmetic.
pub mod computus;

/// First-matching-weekday search within a day window.
pub mod search;

pub use computus::{easter_relative, easter_sunday};
pub use search::weekday_in_window;
