//! Common (secular) holiday primitives.

use feriae_core::errors::Result;

use super::fixed;
use crate::context::CalculationContext;
use crate::holiday::{Holiday, HolidayType};

/// Secular holidays shared across many jurisdictions.
///
/// Providers adopt the whole set with an empty `impl CommonHolidays for
/// … {}` and pick the ones that apply in their `compute`.
pub trait CommonHolidays {
    /// New Year's Day, January 1.
    fn new_years_day(&self, ctx: &CalculationContext, kind: HolidayType) -> Result<Holiday> {
        fixed(
            ctx,
            "newYearsDay",
            1,
            1,
            &[
                ("en_US", "New Year's Day"),
                ("fi_FI", "Uudenvuodenpäivä"),
                ("es_ES", "Año Nuevo"),
            ],
            kind,
        )
    }

    /// International Workers' Day, May 1.
    fn international_workers_day(
        &self,
        ctx: &CalculationContext,
        kind: HolidayType,
    ) -> Result<Holiday> {
        fixed(
            ctx,
            "internationalWorkersDay",
            5,
            1,
            &[
                ("en_US", "International Workers' Day"),
                ("fi_FI", "Vappu"),
                ("es_ES", "Día del Trabajador"),
            ],
            kind,
        )
    }

    /// Valentine's Day, February 14.
    fn valentines_day(&self, ctx: &CalculationContext, kind: HolidayType) -> Result<Holiday> {
        fixed(
            ctx,
            "valentinesDay",
            2,
            14,
            &[
                ("en_US", "Valentine's Day"),
                ("fi_FI", "Ystävänpäivä"),
                ("es_ES", "San Valentín"),
            ],
            kind,
        )
    }
}
