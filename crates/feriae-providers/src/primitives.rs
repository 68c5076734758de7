//! Holiday primitives: the shared toolkit of well-known holidays.
//!
//! The capability traits [`CommonHolidays`] and [`ChristianHolidays`]
//! expose one method per named holiday.  Every method is a pure function
//! of the calculation context (plus the classification the caller wants
//! to attach) and returns exactly one record — year-gating is a
//! *provider* concern, not a primitive one.
//!
//! Providers opt in by an empty `impl` block and then call the methods
//! from their `compute`; translations are literal data owned here.

use chrono::NaiveDate;
use feriae_core::errors::{Error, Result};
use feriae_time::easter_relative;

use crate::context::CalculationContext;
use crate::holiday::{translations, Holiday, HolidayType};

pub mod christian;
pub mod common;

pub use christian::ChristianHolidays;
pub use common::CommonHolidays;

/// Build a fixed-date holiday record for the context's year.
///
/// Shared by the primitive traits and by provider-specific calculators
/// (Independence Day, Dos de Mayo, …).
pub fn fixed(
    ctx: &CalculationContext,
    key: &'static str,
    month: u32,
    day: u32,
    names: &[(&str, &str)],
    kind: HolidayType,
) -> Result<Holiday> {
    let date = NaiveDate::from_ymd_opt(ctx.year(), month, day).ok_or_else(|| {
        Error::Date(format!(
            "no such date: {}-{month:02}-{day:02}",
            ctx.year()
        ))
    })?;
    Holiday::new(
        key,
        translations(names),
        date,
        ctx.timezone(),
        ctx.locale(),
        kind,
    )
}

/// Build an Easter-relative holiday record for the context's year.
pub fn easter_offset(
    ctx: &CalculationContext,
    key: &'static str,
    offset_days: i64,
    names: &[(&str, &str)],
    kind: HolidayType,
) -> Result<Holiday> {
    let date = easter_relative(ctx.year(), offset_days)?;
    Holiday::new(
        key,
        translations(names),
        date,
        ctx.timezone(),
        ctx.locale(),
        kind,
    )
}
