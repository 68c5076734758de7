//! # feriae
//!
//! A holiday calculation engine: turn a (region, year) query into the
//! dated, typed, localized holiday records applicable that year.
//!
//! This crate is a **façade** that re-exports the workspace crates.
//! Application code should depend on this crate rather than the
//! individual `feriae-*` crates.
//!
//! ## Quick start
//!
//! ```rust
//! use feriae::HolidayType;
//!
//! let set = feriae::holidays("Spain/CommunityOfMadrid", 2024).unwrap();
//!
//! let dos_de_mayo = set.get("dosdeMayoUprisingDay").unwrap();
//! assert_eq!(dos_de_mayo.date().to_string(), "2024-05-02");
//! assert_eq!(dos_de_mayo.name("es_ES"), "Fiesta de la Comunidad de Madrid");
//!
//! // Madrid re-classifies Corpus Christi as an observance.
//! assert_eq!(set.get("corpusChristi").unwrap().kind(), HolidayType::Observance);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Error types and shared definitions.
pub use feriae_core as core;

/// Calendar mathematics: Easter computus and weekday search.
pub use feriae_time as time;

/// Holiday records, primitives, and jurisdiction providers.
pub use feriae_providers as providers;

pub use feriae_core::{Error, Result};
pub use feriae_providers::{
    holidays, holidays_with, CalculationContext, Holiday, HolidaySet, HolidayType,
    Translations, DEFAULT_LOCALE, REGIONS,
};
