//! The calculation context: the (year, timezone, locale) input bundle.

use chrono::{Datelike, NaiveDate};
use chrono_tz::Tz;
use feriae_core::ensure;
use feriae_core::errors::{Error, Result};

/// The base locale every calculator carries a translation for.
pub const DEFAULT_LOCALE: &str = "en_US";

/// The immutable input bundle flowing through every calculator.
///
/// Constructed fresh per (region, year) query; calculators treat it as
/// read-only shared state.  The timezone is validated here, once — no
/// calculator ever sees an unparsed zone identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalculationContext {
    year: i32,
    timezone: Tz,
    locale: String,
}

impl CalculationContext {
    /// Build a context from an IANA timezone identifier.
    ///
    /// Fails fast on an unknown identifier or a year outside the
    /// representable date range.
    pub fn new(year: i32, timezone: &str, locale: &str) -> Result<Self> {
        let tz: Tz = timezone
            .parse()
            .map_err(|_| Error::UnknownTimeZone(timezone.to_string()))?;
        Self::with_zone(year, tz, locale)
    }

    /// Build a context from an already-validated timezone.
    pub fn with_zone(year: i32, timezone: Tz, locale: &str) -> Result<Self> {
        ensure!(
            (NaiveDate::MIN.year()..=NaiveDate::MAX.year()).contains(&year),
            "year {year} outside the representable range"
        );
        Ok(CalculationContext {
            year,
            timezone,
            locale: locale.to_string(),
        })
    }

    /// The calendar year holidays are computed for.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// The validated timezone records are dated in.
    pub fn timezone(&self) -> Tz {
        self.timezone
    }

    /// The requested locale identifier.
    pub fn locale(&self) -> &str {
        &self.locale
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_timezone_accepted() {
        let ctx = CalculationContext::new(2024, "Europe/Helsinki", "fi_FI").unwrap();
        assert_eq!(ctx.year(), 2024);
        assert_eq!(ctx.timezone(), chrono_tz::Europe::Helsinki);
        assert_eq!(ctx.locale(), "fi_FI");
    }

    #[test]
    fn unknown_timezone_rejected_at_construction() {
        let err = CalculationContext::new(2024, "Mars/Olympus", "en_US").unwrap_err();
        assert_eq!(err, Error::UnknownTimeZone("Mars/Olympus".into()));
    }

    #[test]
    fn unrepresentable_year_rejected() {
        let err = CalculationContext::new(i32::MAX, "Europe/Madrid", "es_ES").unwrap_err();
        assert!(matches!(err, Error::Precondition(_)));
    }

    #[test]
    fn historical_years_accepted() {
        // Year-gating is per calculator; the context takes any sane year.
        assert!(CalculationContext::new(1583, "Europe/Madrid", "es_ES").is_ok());
        assert!(CalculationContext::new(1916, "Europe/Helsinki", "fi_FI").is_ok());
    }
}
