//! Error types for the feriae workspace.
//!
//! All fallible engine functions return [`Result`].  Calculator-level
//! "holiday not applicable this year" is *not* an error — it is modelled
//! as `Ok(None)` by the year-gated calculators — so this enum only covers
//! genuine failures: malformed input and violated invariants.

use thiserror::Error;

/// The top-level error type used throughout the feriae workspace.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// General runtime error (maps to the `fail!` macro).
    #[error("{0}")]
    Runtime(String),

    /// Precondition or programming invariant violated (maps to `ensure!`).
    #[error("precondition not satisfied: {0}")]
    Precondition(String),

    /// Date-related error (out-of-range year, impossible calendar date).
    #[error("date error: {0}")]
    Date(String),

    /// A timezone identifier that is not a known IANA zone.
    #[error("unknown timezone: {0:?}")]
    UnknownTimeZone(String),

    /// A region path that no provider is registered for.
    #[error("unknown region: {0:?}")]
    UnknownRegion(String),
}

/// Shorthand `Result` type used throughout the feriae workspace.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Return `Err(Error::Precondition(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use feriae_core::ensure;
/// fn positive(x: i32) -> feriae_core::errors::Result<i32> {
///     ensure!(x > 0, "x must be positive, got {x}");
///     Ok(x)
/// }
/// assert!(positive(1).is_ok());
/// assert!(positive(-1).is_err());
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Precondition(
                format!($($msg)*)
            ));
        }
    };
}

/// Return `Err(Error::Runtime(...))` immediately.
///
/// # Example
/// ```
/// use feriae_core::fail;
/// fn always_err() -> feriae_core::errors::Result<()> {
///     fail!("something went wrong");
/// }
/// assert!(always_err().is_err());
/// ```
#[macro_export]
macro_rules! fail {
    ($($msg:tt)*) => {
        return Err($crate::errors::Error::Runtime(format!($($msg)*)))
    };
}
