//! Holiday provider for Finland.

use chrono::Weekday;
use chrono_tz::Tz;
use feriae_core::errors::Result;
use feriae_time::weekday_in_window;

use crate::context::CalculationContext;
use crate::holiday::{translations, Holiday, HolidaySet, HolidayType};
use crate::primitives::{fixed, ChristianHolidays, CommonHolidays};
use crate::provider::HolidayProvider;

/// Provider for all holidays in Finland.
#[derive(Debug, Clone, Copy, Default)]
pub struct Finland;

impl Finland {
    /// Region path string.
    pub const REGION: &'static str = "Finland";

    /// Default timezone.
    pub const TIMEZONE: Tz = chrono_tz::Europe::Helsinki;

    /// St. John's Day (Midsummer).
    ///
    /// Since 1955 the holiday falls on the Saturday between June 20 and
    /// 26; before that it was always June 24.  The two eras are handled
    /// as mutually exclusive branches on the threshold year.
    fn st_johns_day(&self, ctx: &CalculationContext) -> Result<Holiday> {
        let names = [("en_US", "St. John's Day"), ("fi_FI", "Juhannuspäivä")];
        if ctx.year() < 1955 {
            fixed(ctx, "stJohnsDay", 6, 24, &names, HolidayType::National)
        } else {
            let date = weekday_in_window(ctx.year(), 6, 20, 26, Weekday::Sat)?;
            Holiday::new(
                "stJohnsDay",
                translations(&names),
                date,
                ctx.timezone(),
                ctx.locale(),
                HolidayType::National,
            )
        }
    }

    /// Independence Day, December 6, first celebrated in 1917.
    ///
    /// Absent (not an error) for earlier years.
    fn independence_day(&self, ctx: &CalculationContext) -> Result<Option<Holiday>> {
        if ctx.year() < 1917 {
            return Ok(None);
        }
        fixed(
            ctx,
            "independenceDay",
            12,
            6,
            &[("en_US", "Independence Day"), ("fi_FI", "Itsenäisyyspäivä")],
            HolidayType::National,
        )
        .map(Some)
    }
}

impl CommonHolidays for Finland {}
impl ChristianHolidays for Finland {}

impl HolidayProvider for Finland {
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

        // Christian holidays common in Finland
        set.add(self.epiphany(ctx, kind)?);
        set.add(self.good_friday(ctx, kind)?);
        set.add(self.easter(ctx, kind)?);
        set.add(self.easter_monday(ctx, kind)?);
        set.add(self.ascension_day(ctx, kind)?);
        set.add(self.pentecost(ctx, kind)?);
        set.add(self.st_johns_day(ctx)?);
        set.add(self.all_saints_day(ctx, kind)?);
        set.add(self.christmas_day(ctx, kind)?);
        set.add(self.second_christmas_day(ctx, kind)?);

        // Year-gated holidays
        set.add_if(self.independence_day(ctx)?);

        Ok(set)
    }
}
