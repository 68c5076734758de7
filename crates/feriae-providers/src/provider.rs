//! The `HolidayProvider` trait: one implementation per jurisdiction.

use chrono_tz::Tz;
use feriae_core::errors::Result;

use crate::context::CalculationContext;
use crate::holiday::HolidaySet;

/// A jurisdiction's holiday rule set.
///
/// Implementations are zero-sized, stateless values: `compute` is a
/// one-shot pure function of the context, so two concurrent queries for
/// different years or regions cannot interfere, and the individual
/// calculators invoked inside `compute` are independent of one another
/// and could be evaluated in any order.
///
/// A region provider composes on top of its parent country by calling
/// the parent's `compute` with the *same* context and then overlaying
/// its own records — inserting under an existing key overrides the
/// inherited record (used to re-type a national holiday as an observance
/// at regional scope), never duplicates it.
pub trait HolidayProvider: std::fmt::Debug + Send + Sync {
    /// The region path this provider answers for
    /// (e.g. `"Spain/CommunityOfMadrid"`).
    fn region(&self) -> &'static str;

    /// The timezone used when the caller does not supply one.
    fn default_timezone(&self) -> Tz;

    /// Compute the full holiday set for the context's year.
    ///
    /// Calculator failures other than "year out of range" (which is
    /// absence, not failure) propagate and abort the whole query — no
    /// partial holiday lists are returned.
    fn compute(&self, ctx: &CalculationContext) -> Result<HolidaySet>;
}
