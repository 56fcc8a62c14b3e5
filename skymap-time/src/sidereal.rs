use crate::scales::{TT, UT1};
use crate::{TimeError, TimeResult};
use skymap_core::constants::{ARCSEC_TO_RAD, RAD_TO_DEG, TWOPI};
use skymap_core::math::{fmod, wrap_0_2pi};

/// Greenwich mean sidereal time, IAU 2006.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GMST(f64);

impl GMST {
    pub fn from_ut1_and_tt(ut1: &UT1, tt: &TT) -> TimeResult<Self> {
        let era = earth_rotation_angle(ut1)?;
        let t = tt.centuries_since_j2000();

        let polynomial_arcsec = 0.014506
            + t * (4612.156534
                + t * (1.3915817 + t * (-0.00000044 + t * (-0.000029956 + t * (-0.0000000368)))));

        Ok(Self(wrap_0_2pi(era + polynomial_arcsec * ARCSEC_TO_RAD)))
    }

    pub fn from_radians(radians: f64) -> Self {
        Self(wrap_0_2pi(radians))
    }

    pub fn j2000() -> TimeResult<Self> {
        Self::from_ut1_and_tt(&UT1::j2000(), &TT::j2000())
    }

    pub fn radians(&self) -> f64 {
        self.0
    }

    pub fn degrees(&self) -> f64 {
        self.0 * RAD_TO_DEG
    }

    pub fn hours(&self) -> f64 {
        self.degrees() / 15.0
    }

    /// Local mean sidereal time for an east-positive longitude in radians.
    pub fn local(&self, longitude: f64) -> f64 {
        wrap_0_2pi(self.0 + longitude)
    }
}

impl std::fmt::Display for GMST {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "GMST {:.6}h", self.hours())
    }
}

/// Earth rotation angle (IAU 2000), radians in `[0, 2π)`.
pub fn earth_rotation_angle(ut1: &UT1) -> TimeResult<f64> {
    let jd = ut1.to_julian_date();
    let (d1, d2) = if jd.jd1 < jd.jd2 {
        (jd.jd1, jd.jd2)
    } else {
        (jd.jd2, jd.jd1)
    };

    let t = jd.days_since_j2000();
    if !t.is_finite() || t.abs() > 1e12 {
        return Err(TimeError::CalculationError(format!(
            "Time value out of valid range: {} days from J2000",
            t
        )));
    }

    let f = fmod(d1, 1.0) + fmod(d2, 1.0);
    let theta = TWOPI * (f + 0.7790572732640 + 0.00273781191135448 * t);

    Ok(wrap_0_2pi(theta))
}
