//! Gregorian Easter computus and movable-feast arithmetic.
//!
//! [`easter_sunday`] implements the anonymous Gregorian algorithm
//! (Meeus/Jones/Butcher): deterministic, no lookup table, defined for any
//! proleptic-Gregorian year.  Every Western movable feast is a fixed
//! day-offset from Easter Sunday and is obtained through
//! [`easter_relative`].

use chrono::NaiveDate;
use feriae_core::errors::{Error, Result};

/// Compute the Gregorian (Western) Easter Sunday date for `year`.
///
/// The result always falls between March 22 and April 25 inclusive.
/// The algorithm is meaningful for Gregorian years (≥ 1583 in practice)
/// but is defined over the whole representable year range.
///
/// # Panics
///
/// Panics if `year` lies outside the range representable by
/// [`chrono::NaiveDate`] (roughly ±262 000).  The calculation context
/// rejects such years at construction, so calculators never hit this.
pub fn easter_sunday(year: i32) -> NaiveDate {
    // div_euclid/rem_euclid keep the arithmetic correct for negative years.
    let y = i64::from(year);
    let a = y.rem_euclid(19);
    let b = y.div_euclid(100);
    let c = y.rem_euclid(100);
    let d = b.div_euclid(4);
    let e = b.rem_euclid(4);
    let f = (b + 8).div_euclid(25);
    let g = (b - f + 1).div_euclid(3);
    let h = (19 * a + b - d - g + 15).rem_euclid(30);
    let i = c.div_euclid(4);
    let k = c.rem_euclid(4);
    let l = (32 + 2 * e + 2 * i - h - k).rem_euclid(7);
    let m = (a + 11 * h + 22 * l).div_euclid(451);
    let month = (h + l - 7 * m + 114).div_euclid(31);
    let day = (h + l - 7 * m + 114).rem_euclid(31) + 1;

    NaiveDate::from_ymd_opt(year, month as u32, day as u32)
        .expect("computus always yields a valid March or April date")
}

/// Return the date `offset_days` away from Easter Sunday in `year`.
///
/// Offsets are applied with calendar-correct arithmetic and may cross
/// month boundaries (e.g. Corpus Christi, Easter + 60, lands in May or
/// June).  Returns a date error if the result is unrepresentable.
pub fn easter_relative(year: i32, offset_days: i64) -> Result<NaiveDate> {
    let easter = easter_sunday(year);
    easter
        .checked_add_signed(chrono::Duration::days(offset_days))
        .ok_or_else(|| {
            Error::Date(format!(
                "Easter {easter} offset by {offset_days} days is out of range"
            ))
        })
}
