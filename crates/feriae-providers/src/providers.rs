//! Concrete jurisdiction providers (country and region rule sets).

pub mod finland;
pub mod spain;

pub use finland::Finland;
pub use spain::{Andalusia, Catalonia, CommunityOfMadrid, Spain};
