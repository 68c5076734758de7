//! # feriae-providers
//!
//! Holiday records, primitive holiday calculators, and the country /
//! region providers of the feriae holiday engine.
//!
//! The crate is layered leaves-first:
//!
//! 1. **Primitives** ([`primitives`]) — one pure function per well-known
//!    holiday, bundled into the [`CommonHolidays`] and
//!    [`ChristianHolidays`] capability traits.
//! 2. **Country providers** ([`providers`]) — select primitives, attach
//!    year-gating, and define country-unique calculated holidays.
//! 3. **Region providers** — merge the parent country's full output and
//!    overlay region-specific records, overriding classifications where
//!    the region diverges.
//!
//! The [`registry`] resolves region path strings such as
//! `"Spain/CommunityOfMadrid"` and supplies defaults for omitted
//! timezone / locale:
//!
//! ```
//! let set = feriae_providers::holidays("Finland", 1956).unwrap();
//! let midsummer = set.get("stJohnsDay").unwrap();
//! assert_eq!(midsummer.date().to_string(), "1956-06-23");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// The calculation context (year, timezone, locale).
pub mod context;

/// The holiday record, classification enum, and holiday set.
pub mod holiday;

/// Primitive holiday calculators and the capability traits.
pub mod primitives;

/// The `HolidayProvider` trait.
pub mod provider;

/// Concrete jurisdiction providers.
pub mod providers;

/// Region-string registry and entry points.
pub mod registry;

pub use context::{CalculationContext, DEFAULT_LOCALE};
pub use holiday::{Holiday, HolidaySet, HolidayType, Translations};
pub use primitives::{ChristianHolidays, CommonHolidays};
pub use provider::HolidayProvider;
pub use registry::{holidays, holidays_with, REGIONS};
