//! Holiday provider for Spain, plus its autonomous-community regions.

use chrono_tz::Tz;
use feriae_core::errors::Result;

use crate::context::CalculationContext;
use crate::holiday::{Holiday, HolidaySet, HolidayType};
use crate::primitives::{fixed, ChristianHolidays, CommonHolidays};
use crate::provider::HolidayProvider;

pub mod andalusia;
pub mod catalonia;
pub mod community_of_madrid;

pub use andalusia::Andalusia;
pub use catalonia::Catalonia;
pub use community_of_madrid::CommunityOfMadrid;

/// Provider for all holidays in Spain.
///
/// Regional providers compose on top of this one: they merge Spain's
/// full output and then overlay their own records.
#[derive(Debug, Clone, Copy, Default)]
pub struct Spain;

impl Spain {
    /// Region path string.
    pub const REGION: &'static str = "Spain";

    /// Default timezone.
    pub const TIMEZONE: Tz = chrono_tz::Europe::Madrid;

    /// Fiesta Nacional de España, October 12, observed since 1981.
    fn national_day(&self, ctx: &CalculationContext) -> Result<Option<Holiday>> {
        if ctx.year() < 1981 {
            return Ok(None);
        }
        fixed(
            ctx,
            "nationalDay",
            10,
            12,
            &[
                ("en_US", "National Day"),
                ("es_ES", "Fiesta Nacional de España"),
            ],
            HolidayType::National,
        )
        .map(Some)
    }

    /// Constitution Day, December 6, observed since the 1978
    /// constitutional referendum.
    fn constitution_day(&self, ctx: &CalculationContext) -> Result<Option<Holiday>> {
        if ctx.year() < 1978 {
            return Ok(None);
        }
        fixed(
            ctx,
            "constitutionDay",
            12,
            6,
            &[
                ("en_US", "Constitution Day"),
                ("es_ES", "Día de la Constitución Española"),
            ],
            HolidayType::National,
        )
        .map(Some)
    }
}

impl CommonHolidays for Spain {}
impl ChristianHolidays for Spain {}

impl HolidayProvider for Spain {
    fn region(&self) -> &'static str {
        Self::REGION
    }

    fn default_timezone(&self) -> Tz {
        Self::TIMEZONE
    }

    fn compute(&self, ctx: &CalculationContext) -> Result<HolidaySet> {
        let kind = HolidayType::National;
        let mut set = HolidaySet::new();

        // Common holidays
        set.add(self.new_years_day(ctx, kind)?);
        set.add(self.international_workers_day(ctx, kind)?);
        set.add(self.valentines_day(ctx, kind)?);

        // Christian holidays
        set.add(self.epiphany(ctx, kind)?);
        set.add(self.good_friday(ctx, kind)?);
        set.add(self.easter(ctx, kind)?);
        set.add(self.assumption_of_mary(ctx, kind)?);
        set.add(self.all_saints_day(ctx, kind)?);
        set.add(self.immaculate_conception(ctx, kind)?);
        set.add(self.christmas_day(ctx, kind)?);

        // Year-gated holidays
        set.add_if(self.national_day(ctx)?);
        set.add_if(self.constitution_day(ctx)?);

        Ok(set)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn compute(year: i32) -> HolidaySet {
        let ctx = CalculationContext::new(year, "Europe/Madrid", "es_ES").unwrap();
        Spain.compute(&ctx).unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn full_modern_year() {
        let set = compute(2024);
        let expected = [
            "newYearsDay",
            "internationalWorkersDay",
            "valentinesDay",
            "epiphany",
            "goodFriday",
            "easter",
            "assumptionOfMary",
            "allSaintsDay",
            "immaculateConception",
            "christmasDay",
            "nationalDay",
            "constitutionDay",
        ];
        assert_eq!(set.len(), expected.len());
        for key in expected {
            assert!(set.contains(key), "missing {key}");
        }
    }

    #[test]
    fn national_day_gated_at_1981() {
        assert!(!compute(1980).contains("nationalDay"));
        assert_eq!(
            compute(1981).get("nationalDay").unwrap().date(),
            date(1981, 10, 12)
        );
    }

    #[test]
    fn constitution_day_gated_at_1978() {
        assert!(!compute(1977).contains("constitutionDay"));
        assert_eq!(
            compute(1978).get("constitutionDay").unwrap().date(),
            date(1978, 12, 6)
        );
    }

    #[test]
    fn no_observances_at_country_scope() {
        // Spain itself classifies everything as national; observances
        // only appear through the regional providers.
        assert_eq!(compute(2024).of_kind(HolidayType::Observance).count(), 0);
    }
}
