//! Christian holiday primitives: fixed feasts and Easter-relative
//! movable feasts.

use feriae_core::errors::Result;

use super::{easter_offset, fixed};
use crate::context::CalculationContext;
use crate::holiday::{Holiday, HolidayType};

/// Christian holidays shared across many jurisdictions.
///
/// Movable feasts are fixed day-offsets from Easter Sunday: Maundy
/// Thursday −3, Good Friday −2, Easter Monday +1, Ascension +39,
/// Pentecost +49, Corpus Christi +60.
pub trait ChristianHolidays {
    /// Epiphany, January 6.
    fn epiphany(&self, ctx: &CalculationContext, kind: HolidayType) -> Result<Holiday> {
        fixed(
            ctx,
            "epiphany",
            1,
            6,
            &[
                ("en_US", "Epiphany"),
                ("fi_FI", "Loppiainen"),
                ("es_ES", "Epifanía del Señor"),
            ],
            kind,
        )
    }

    /// St. Joseph's Day, March 19.
    fn st_josephs_day(&self, ctx: &CalculationContext, kind: HolidayType) -> Result<Holiday> {
        fixed(
            ctx,
            "stJosephsDay",
            3,
            19,
            &[("en_US", "St. Joseph's Day"), ("es_ES", "San José")],
            kind,
        )
    }

    /// Maundy Thursday, the Thursday before Easter (Easter − 3).
    fn maundy_thursday(&self, ctx: &CalculationContext, kind: HolidayType) -> Result<Holiday> {
        easter_offset(
            ctx,
            "maundyThursday",
            -3,
            &[("en_US", "Maundy Thursday"), ("es_ES", "Jueves Santo")],
            kind,
        )
    }

    /// Good Friday, the Friday before Easter (Easter − 2).
    fn good_friday(&self, ctx: &CalculationContext, kind: HolidayType) -> Result<Holiday> {
        easter_offset(
            ctx,
            "goodFriday",
            -2,
            &[
                ("en_US", "Good Friday"),
                ("fi_FI", "Pitkäperjantai"),
                ("es_ES", "Viernes Santo"),
            ],
            kind,
        )
    }

    /// Easter Sunday.
    fn easter(&self, ctx: &CalculationContext, kind: HolidayType) -> Result<Holiday> {
        easter_offset(
            ctx,
            "easter",
            0,
            &[
                ("en_US", "Easter Sunday"),
                ("fi_FI", "Pääsiäispäivä"),
                ("es_ES", "Domingo de Pascua"),
            ],
            kind,
        )
    }

    /// Easter Monday (Easter + 1).
    fn easter_monday(&self, ctx: &CalculationContext, kind: HolidayType) -> Result<Holiday> {
        easter_offset(
            ctx,
            "easterMonday",
            1,
            &[
                ("en_US", "Easter Monday"),
                ("fi_FI", "Toinen pääsiäispäivä"),
                ("es_ES", "Lunes de Pascua"),
                ("ca_ES", "Dilluns de Pasqua"),
            ],
            kind,
        )
    }

    /// Ascension Day, the Thursday 39 days after Easter.
    fn ascension_day(&self, ctx: &CalculationContext, kind: HolidayType) -> Result<Holiday> {
        easter_offset(
            ctx,
            "ascensionDay",
            39,
            &[("en_US", "Ascension Day"), ("fi_FI", "Helatorstai")],
            kind,
        )
    }

    /// Pentecost (Whitsunday), 49 days after Easter.
    fn pentecost(&self, ctx: &CalculationContext, kind: HolidayType) -> Result<Holiday> {
        easter_offset(
            ctx,
            "pentecost",
            49,
            &[
                ("en_US", "Whitsunday"),
                ("fi_FI", "Helluntaipäivä"),
                ("es_ES", "Pentecostés"),
            ],
            kind,
        )
    }

    /// Corpus Christi, the Thursday 60 days after Easter.
    fn corpus_christi(&self, ctx: &CalculationContext, kind: HolidayType) -> Result<Holiday> {
        easter_offset(
            ctx,
            "corpusChristi",
            60,
            &[("en_US", "Corpus Christi"), ("es_ES", "Corpus Christi")],
            kind,
        )
    }

    /// Assumption of Mary, August 15.
    fn assumption_of_mary(&self, ctx: &CalculationContext, kind: HolidayType) -> Result<Holiday> {
        fixed(
            ctx,
            "assumptionOfMary",
            8,
            15,
            &[
                ("en_US", "Assumption of Mary"),
                ("es_ES", "Asunción de la Virgen"),
            ],
            kind,
        )
    }

    /// All Saints' Day, November 1.
    fn all_saints_day(&self, ctx: &CalculationContext, kind: HolidayType) -> Result<Holiday> {
        fixed(
            ctx,
            "allSaintsDay",
            11,
            1,
            &[
                ("en_US", "All Saints' Day"),
                ("fi_FI", "Pyhäinpäivä"),
                ("es_ES", "Todos los Santos"),
            ],
            kind,
        )
    }

    /// Immaculate Conception, December 8.
    fn immaculate_conception(
        &self,
        ctx: &CalculationContext,
        kind: HolidayType,
    ) -> Result<Holiday> {
        fixed(
            ctx,
            "immaculateConception",
            12,
            8,
            &[
                ("en_US", "Immaculate Conception"),
                ("es_ES", "Inmaculada Concepción"),
            ],
            kind,
        )
    }

    /// Christmas Day, December 25.
    fn christmas_day(&self, ctx: &CalculationContext, kind: HolidayType) -> Result<Holiday> {
        fixed(
            ctx,
            "christmasDay",
            12,
            25,
            &[
                ("en_US", "Christmas"),
                ("fi_FI", "Joulupäivä"),
                ("es_ES", "Navidad"),
            ],
            kind,
        )
    }

    /// Second Christmas Day, December 26.
    fn second_christmas_day(
        &self,
        ctx: &CalculationContext,
        kind: HolidayType,
    ) -> Result<Holiday> {
        fixed(
            ctx,
            "secondChristmasDay",
            12,
            26,
            &[
                ("en_US", "Second Christmas Day"),
                ("fi_FI", "Tapaninpäivä"),
            ],
            kind,
        )
    }

    /// St. Stephen's Day, December 26.
    fn st_stephens_day(&self, ctx: &CalculationContext, kind: HolidayType) -> Result<Holiday> {
        fixed(
            ctx,
            "stStephensDay",
            12,
            26,
            &[
                ("en_US", "St. Stephen's Day"),
                ("es_ES", "San Esteban"),
                ("ca_ES", "Sant Esteve"),
            ],
            kind,
        )
    }
}
