//! UT1 and TT, the two scales the observer frame needs.
//!
//! UTC is taken as UT1: the difference never exceeds 0.9 s, far below what a
//! sky map can show, and no leap-second or EOP tables are carried.

use crate::JulianDate;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UT1(JulianDate);

impl UT1 {
    pub fn from_julian_date(jd: JulianDate) -> Self {
        Self(jd)
    }

    pub fn j2000() -> Self {
        Self(JulianDate::j2000())
    }

    pub fn to_julian_date(&self) -> JulianDate {
        self.0
    }

    /// TT for this instant given ΔT = TT − UT1 in seconds.
    pub fn to_tt(&self, delta_t_seconds: f64) -> TT {
        TT(self.0.add_seconds(delta_t_seconds))
    }
}

impl fmt::Display for UT1 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "UT1 {}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TT(JulianDate);

impl TT {
    pub fn from_julian_date(jd: JulianDate) -> Self {
        Self(jd)
    }

    pub fn j2000() -> Self {
        Self(JulianDate::j2000())
    }

    pub fn to_julian_date(&self) -> JulianDate {
        self.0
    }

    pub fn centuries_since_j2000(&self) -> f64 {
        self.0.centuries_since_j2000()
    }
}

impl fmt::Display for TT {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TT {}", self.0)
    }
}
