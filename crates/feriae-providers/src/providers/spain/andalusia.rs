//! Holiday provider for Andalusia (Spain).

use chrono_tz::Tz;
use feriae_core::errors::Result;

use crate::context::CalculationContext;
use crate::holiday::{Holiday, HolidaySet, HolidayType};
use crate::primitives::{fixed, ChristianHolidays};
use crate::provider::HolidayProvider;
use crate::providers::spain::Spain;

/// Provider for all holidays in Andalusia (Spain).
#[derive(Debug, Clone, Copy, Default)]
pub struct Andalusia;

impl Andalusia {
    /// Region path string.
    pub const REGION: &'static str = "Spain/Andalusia";

    /// Andalusia Day, February 28 — anniversary of the 1980 autonomy
    /// referendum.
    fn andalusia_day(&self, ctx: &CalculationContext) -> Result<Holiday> {
        fixed(
            ctx,
            "andalusiaDay",
            2,
            28,
            &[("en_US", "Andalusia Day"), ("es_ES", "Día de Andalucía")],
            HolidayType::National,
        )
    }
}

impl ChristianHolidays for Andalusia {}

impl HolidayProvider for Andalusia {
    fn region(&self) -> &'static str {
        Self::REGION
    }

    fn default_timezone(&self) -> Tz {
        Spain::TIMEZONE
    }

    fn compute(&self, ctx: &CalculationContext) -> Result<HolidaySet> {
        let mut set = Spain.compute(ctx)?;

        // Regional observances
        set.add(self.st_josephs_day(ctx, HolidayType::Observance)?);
        set.add(self.maundy_thursday(ctx, HolidayType::Observance)?);

        // Regional holidays
        set.add(self.andalusia_day(ctx)?);

        Ok(set)
    }
}
