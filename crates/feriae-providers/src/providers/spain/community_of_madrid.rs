//! Holiday provider for the Community of Madrid (Spain).

use chrono_tz::Tz;
use feriae_core::errors::Result;

use crate::context::CalculationContext;
use crate::holiday::{Holiday, HolidaySet, HolidayType};
use crate::primitives::{fixed, ChristianHolidays};
use crate::provider::HolidayProvider;
use crate::providers::spain::Spain;

/// Provider for all holidays in the Community of Madrid (Spain).
///
/// Inherits Spain's full rule set, re-classifies three Christian
/// holidays as observances at regional scope, and adds the Dos de Mayo
/// regional day.
#[derive(Debug, Clone, Copy, Default)]
pub struct CommunityOfMadrid;

impl CommunityOfMadrid {
    /// Region path string.
    pub const REGION: &'static str = "Spain/CommunityOfMadrid";

    /// Dos de Mayo Uprising Day, May 2 — the regional holiday of the
    /// Community of Madrid.
    fn dos_de_mayo_uprising_day(&self, ctx: &CalculationContext) -> Result<Holiday> {
        fixed(
            ctx,
            "dosdeMayoUprisingDay",
            5,
            2,
            &[
                ("en_US", "Dos de Mayo Uprising Day"),
                ("es_ES", "Fiesta de la Comunidad de Madrid"),
            ],
            HolidayType::National,
        )
    }
}

impl ChristianHolidays for CommunityOfMadrid {}

impl HolidayProvider for CommunityOfMadrid {
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
        set.add(self.corpus_christi(ctx, HolidayType::Observance)?);

        // Regional holidays
        set.add(self.dos_de_mayo_uprising_day(ctx)?);

        Ok(set)
    }
}
