use crate::calendar::{civil_from_days, days_from_civil};
use crate::delta_t::delta_t_seconds;
use crate::parsing::parse_iso8601;
use crate::scales::{TT, UT1};
use crate::{JulianDate, TimeError, TimeResult};
use std::fmt;

/// Earliest UTC year a request may resolve to.
pub const MIN_YEAR: i32 = -2000;
/// First UTC year past the supported window.
pub const MAX_YEAR_EXCLUSIVE: i32 = 2096;

const MINUTES_PER_DAY: i64 = 1440;

/// A resolved UTC calendar instant.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TimeInstant {
    pub year: i32,
    pub month: u8,
    pub day: u8,
    pub hour: u8,
    pub minute: u8,
    pub second: f64,
}

impl TimeInstant {
    /// Parses an ISO-8601 string, applies its UTC offset and checks the year
    /// window.
    pub fn resolve(s: &str) -> TimeResult<Self> {
        let parsed = parse_iso8601(s)?;

        let local_minutes = days_from_civil(parsed.year as i64, parsed.month, parsed.day)
            * MINUTES_PER_DAY
            + parsed.hour as i64 * 60
            + parsed.minute as i64;
        let utc_minutes = local_minutes - parsed.offset_minutes as i64;

        let (year, month, day) = civil_from_days(utc_minutes.div_euclid(MINUTES_PER_DAY));
        let minute_of_day = utc_minutes.rem_euclid(MINUTES_PER_DAY);

        if year < MIN_YEAR as i64 || year >= MAX_YEAR_EXCLUSIVE as i64 {
            return Err(TimeError::TimeOutOfRange {
                year: year.clamp(i32::MIN as i64, i32::MAX as i64) as i32,
            });
        }

        Ok(Self {
            year: year as i32,
            month,
            day,
            hour: (minute_of_day / 60) as u8,
            minute: (minute_of_day % 60) as u8,
            second: parsed.second,
        })
    }

    pub fn to_julian_date(&self) -> JulianDate {
        JulianDate::from_calendar(
            self.year,
            self.month,
            self.day,
            self.hour,
            self.minute,
            self.second,
        )
    }

    /// `year + (month - 0.5) / 12`, the argument of the ΔT polynomials.
    pub fn decimal_year(&self) -> f64 {
        self.year as f64 + (self.month as f64 - 0.5) / 12.0
    }

    pub fn ut1(&self) -> UT1 {
        UT1::from_julian_date(self.to_julian_date())
    }

    pub fn tt(&self) -> TT {
        self.ut1().to_tt(delta_t_seconds(self.decimal_year()))
    }
}

impl fmt::Display for TimeInstant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if (0..=9999).contains(&self.year) {
            write!(f, "{:04}", self.year)?;
        } else {
            write!(f, "{:+05}", self.year)?;
        }
        write!(
            f,
            "-{:02}-{:02}T{:02}:{:02}",
            self.month, self.day, self.hour, self.minute
        )?;
        if self.second != 0.0 {
            if self.second.fract() == 0.0 {
                write!(f, ":{:02}", self.second as u8)?;
            } else {
                write!(f, ":{:06.3}", self.second)?;
            }
        }
        write!(f, "Z")
    }
}

impl std::str::FromStr for TimeInstant {
    type Err = TimeError;

    fn from_str(s: &str) -> TimeResult<Self> {
        Self::resolve(s)
    }
}
