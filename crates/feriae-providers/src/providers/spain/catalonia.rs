//! Holiday provider for Catalonia (Spain).

use chrono_tz::Tz;
use feriae_core::errors::Result;

use crate::context::CalculationContext;
use crate::holiday::{Holiday, HolidaySet, HolidayType};
use crate::primitives::{fixed, ChristianHolidays};
use crate::provider::HolidayProvider;
use crate::providers::spain::Spain;

/// Provider for all holidays in Catalonia (Spain).
#[derive(Debug, Clone, Copy, Default)]
pub struct Catalonia;

impl Catalonia {
    /// Region path string.
    pub const REGION: &'static str = "Spain/Catalonia";

    /// St. John's Day, June 24.  Unlike Finland's midsummer Saturday,
    /// the Catalan feast stays on the fixed calendar date.
    fn st_johns_day(&self, ctx: &CalculationContext) -> Result<Holiday> {
        fixed(
            ctx,
            "stJohnsDay",
            6,
            24,
            &[
                ("en_US", "St. John's Day"),
                ("es_ES", "Sant Joan"),
                ("ca_ES", "Sant Joan"),
            ],
            HolidayType::National,
        )
    }

    /// National Day of Catalonia (la Diada), September 11.
    fn national_catalonia_day(&self, ctx: &CalculationContext) -> Result<Holiday> {
        fixed(
            ctx,
            "nationalCataloniaDay",
            9,
            11,
            &[
                ("en_US", "National Day of Catalonia"),
                ("es_ES", "Día Nacional de Cataluña"),
                ("ca_ES", "Diada Nacional de Catalunya"),
            ],
            HolidayType::National,
        )
    }
}

impl ChristianHolidays for Catalonia {}

impl HolidayProvider for Catalonia {
    fn region(&self) -> &'static str {
        Self::REGION
    }

    fn default_timezone(&self) -> Tz {
        Spain::TIMEZONE
    }

    fn compute(&self, ctx: &CalculationContext) -> Result<HolidaySet> {
        let mut set = Spain.compute(ctx)?;

        set.add(self.easter_monday(ctx, HolidayType::National)?);
        set.add(self.st_johns_day(ctx)?);
        set.add(self.st_stephens_day(ctx, HolidayType::National)?);
        set.add(self.national_catalonia_day(ctx)?);

        Ok(set)
    }
}
