//! Region-string registry: resolves region paths to providers and
//! applies defaults for omitted timezone / locale.

use feriae_core::errors::{Error, Result};

use crate::context::{CalculationContext, DEFAULT_LOCALE};
use crate::holiday::HolidaySet;
use crate::provider::HolidayProvider;
use crate::providers::{Andalusia, Catalonia, CommunityOfMadrid, Finland, Spain};

/// All region paths known to the registry.
pub const REGIONS: &[&str] = &[
    Finland::REGION,
    Spain::REGION,
    Andalusia::REGION,
    Catalonia::REGION,
    CommunityOfMadrid::REGION,
];

/// Resolve a region path to its provider.
pub fn provider_for(region: &str) -> Result<&'static dyn HolidayProvider> {
    match region {
        Finland::REGION => Ok(&Finland),
        Spain::REGION => Ok(&Spain),
        Andalusia::REGION => Ok(&Andalusia),
        Catalonia::REGION => Ok(&Catalonia),
        CommunityOfMadrid::REGION => Ok(&CommunityOfMadrid),
        _ => Err(Error::UnknownRegion(region.to_string())),
    }
}

/// Compute the holidays of `region` for `year` with the provider's
/// default timezone and the base locale.
pub fn holidays(region: &str, year: i32) -> Result<HolidaySet> {
    holidays_with(region, year, None, None)
}

/// Compute the holidays of `region` for `year`, overriding the timezone
/// and/or locale.
///
/// An explicit timezone must be a valid IANA identifier; an omitted one
/// falls back to the provider's default zone.  An omitted locale falls
/// back to [`DEFAULT_LOCALE`].
pub fn holidays_with(
    region: &str,
    year: i32,
    timezone: Option<&str>,
    locale: Option<&str>,
) -> Result<HolidaySet> {
    let provider = provider_for(region)?;
    let locale = locale.unwrap_or(DEFAULT_LOCALE);
    let ctx = match timezone {
        Some(tz) => CalculationContext::new(year, tz, locale)?,
        None => CalculationContext::with_zone(year, provider.default_timezone(), locale)?,
    };
    provider.compute(&ctx)
}
