//! Time handling for sky map requests.
//!
//! A request carries a free-form ISO-8601 string. [`TimeInstant::resolve`]
//! turns it into a UTC calendar instant, rejecting malformed text and years
//! outside the `[-2000, 2096)` window covered by the ephemeris and catalog.
//! From there the instant feeds [`JulianDate`], the [`UT1`]/[`TT`] scales and
//! the sidereal angle ([`GMST`]) that orients the observer's zenith.
//!
//! ```
//! use skymap_time::TimeInstant;
//!
//! let instant = TimeInstant::resolve("2023-12-30T15:55+00:00")?;
//! assert_eq!((instant.year, instant.month, instant.day), (2023, 12, 30));
//! assert_eq!((instant.hour, instant.minute), (15, 55));
//! # Ok::<(), skymap_time::TimeError>(())
//! ```

pub mod calendar;
pub mod delta_t;
pub mod instant;
pub mod julian;
pub mod parsing;
pub mod scales;
pub mod sidereal;

pub use instant::{TimeInstant, MAX_YEAR_EXCLUSIVE, MIN_YEAR};
pub use julian::JulianDate;
pub use parsing::{parse_iso8601, ParsedDateTime};
pub use scales::{TT, UT1};
pub use sidereal::GMST;

pub type TimeResult<T> = Result<T, TimeError>;

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TimeError {
    /// The input is not an ISO-8601 date/time this crate understands.
    InvalidTimeFormat(String),
    /// The resolved UTC year falls outside `[MIN_YEAR, MAX_YEAR_EXCLUSIVE)`.
    TimeOutOfRange { year: i32 },
    CalculationError(String),
}

impl TimeError {
    pub(crate) fn format(message: impl Into<String>) -> Self {
        TimeError::InvalidTimeFormat(message.into())
    }
}

impl std::fmt::Display for TimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TimeError::InvalidTimeFormat(msg) => write!(f, "Invalid ISO 8601 date format: {}", msg),
            TimeError::TimeOutOfRange { year } => write!(
                f,
                "Year {} out of range: must be between {} and {} (exclusive)",
                year, MIN_YEAR, MAX_YEAR_EXCLUSIVE
            ),
            TimeError::CalculationError(msg) => write!(f, "Calculation error: {}", msg),
        }
    }
}

impl std::error::Error for TimeError {}
