//! IAU 2006 precession (Fukushima-Williams parameterization).
//!
//! The four angles gamb, phib, psib and epsa orient the mean equator and
//! equinox of date relative to the GCRS. Their polynomials are from Hilton
//! et al. (2006). Over the few thousand years a sky map may ask for, the
//! model stays well within the accuracy a screen-sized chart needs.
//!
//! # References
//!
//! - IERS Conventions (2010), Chapter 5
//! - Capitaine, N., Wallace, P.T., & Chapront, J. (2003), A&A 412, 567-586

use crate::constants::{ARCSEC_TO_RAD, DAYS_PER_JULIAN_CENTURY, J2000_JD};
use crate::matrix::RotationMatrix3;

#[derive(Debug, Clone, Copy)]
pub struct PrecessionIAU2006;

impl Default for PrecessionIAU2006 {
    fn default() -> Self {
        Self::new()
    }
}

impl PrecessionIAU2006 {
    pub fn new() -> Self {
        Self
    }

    /// Bias-precession matrix taking GCRS vectors to the mean equator and
    /// equinox of the TT date `date1 + date2`.
    ///
    /// ```
    /// use skymap_core::PrecessionIAU2006;
    /// use skymap_core::constants::J2000_JD;
    ///
    /// let bp = PrecessionIAU2006::new().bias_precession_matrix(J2000_JD, 3652.5);
    /// assert!(bp.is_rotation_matrix(1e-14));
    /// ```
    pub fn bias_precession_matrix(&self, date1: f64, date2: f64) -> RotationMatrix3 {
        let t = ((date1 - J2000_JD) + date2) / DAYS_PER_JULIAN_CENTURY;
        let (gamb, phib, psib, epsa) = self.fukushima_williams_angles(t);
        self.fw_angles_to_matrix(gamb, phib, psib, epsa)
    }

    /// The Fukushima-Williams angles `(gamb, phib, psib, epsa)` in radians
    /// for `t` Julian centuries of TT since J2000.0.
    pub fn fukushima_williams_angles(&self, t: f64) -> (f64, f64, f64, f64) {
        let gamb = (-0.052928
            + (10.556378
                + (0.4932044 + (-0.00031238 + (-0.000002788 + (0.0000000260) * t) * t) * t) * t)
                * t)
            * ARCSEC_TO_RAD;

        let phib = (84381.412819
            + (-46.811016
                + (0.0511268 + (0.00053289 + (-0.000000440 + (-0.0000000176) * t) * t) * t) * t)
                * t)
            * ARCSEC_TO_RAD;

        let psib = (-0.041775
            + (5038.481484
                + (1.5584175 + (-0.00018522 + (-0.000026452 + (-0.0000000148) * t) * t) * t) * t)
                * t)
            * ARCSEC_TO_RAD;

        let epsa = (84381.406
            + (-46.836769
                + (-0.0001831 + (0.00200340 + (-0.000000576 + (-0.0000000434) * t) * t) * t) * t)
                * t)
            * ARCSEC_TO_RAD;

        (gamb, phib, psib, epsa)
    }

    /// `Rx(-epsa) · Rz(-psib) · Rx(phib) · Rz(gamb)`.
    pub fn fw_angles_to_matrix(&self, gamb: f64, phib: f64, psib: f64, epsa: f64) -> RotationMatrix3 {
        let mut matrix = RotationMatrix3::identity();
        matrix.rotate_z(gamb);
        matrix.rotate_x(phib);
        matrix.rotate_z(-psib);
        matrix.rotate_x(-epsa);
        matrix
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{DEG_TO_RAD, MILLIARCSEC_TO_RAD};
    use crate::matrix::Vector3;

    #[test]
    fn test_j2000_matrix_is_frame_bias_only() {
        let bp = PrecessionIAU2006::new().bias_precession_matrix(J2000_JD, 0.0);
        let pole = bp * Vector3::z_axis();
        let offset = pole.angle_to(&Vector3::z_axis());
        assert!(
            offset < 30.0 * MILLIARCSEC_TO_RAD,
            "frame bias should tilt the pole by only ~17 mas, got {} rad",
            offset
        );
    }

    #[test]
    fn test_equinox_precesses_about_50_arcsec_per_year() {
        let bp = PrecessionIAU2006::new().bias_precession_matrix(J2000_JD, 36525.0);
        // Longitude of the J2000 equinox measured in the mean frame of 2100.
        let equinox = bp * Vector3::x_axis();
        let (ra, _) = equinox.to_spherical();
        let arcsec_per_year = ra / ARCSEC_TO_RAD / 100.0;
        assert!(
            (arcsec_per_year - 46.1).abs() < 0.5,
            "general precession in RA should be ~46.1\"/yr, got {}",
            arcsec_per_year
        );
    }

    #[test]
    fn test_pole_moves_tens_of_degrees_over_four_millennia() {
        let bp = PrecessionIAU2006::new().bias_precession_matrix(J2000_JD, -40.0 * 36525.0);
        assert!(bp.is_rotation_matrix(1e-12));
        let pole_of_date_in_gcrs = bp.transpose() * Vector3::z_axis();
        let shift_deg = pole_of_date_in_gcrs.angle_to(&Vector3::z_axis()) / DEG_TO_RAD;
        assert!(
            shift_deg > 20.0 && shift_deg < 30.0,
            "the celestial pole 4000 years ago was ~22-26 degrees away, got {}",
            shift_deg
        );
    }
}
