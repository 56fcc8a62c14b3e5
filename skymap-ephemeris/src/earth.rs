use skymap_core::constants::{ARCSEC_TO_RAD, DEG_TO_RAD};
use skymap_core::{AstroError, AstroResult, MathErrorKind, PrecessionIAU2006, Vector3};
use skymap_time::TT;

/// Earth's position relative to the Sun, ICRS axes, AU.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EarthPosition {
    pub heliocentric_au: Vector3,
}

impl EarthPosition {
    /// Barycentric position, taking the Sun to sit at the barycenter.
    ///
    /// The Sun wanders up to ~0.01 AU from the barycenter; that shifts the
    /// parallax of Proxima Centauri by under 10 µas.
    pub fn barycentric_au(&self) -> Vector3 {
        self.heliocentric_au
    }

    pub fn distance_au(&self) -> f64 {
        self.heliocentric_au.magnitude()
    }
}

#[derive(Debug, Clone, Default)]
pub struct EarthEphemeris {
    precession: PrecessionIAU2006,
}

impl EarthEphemeris {
    pub fn new() -> Self {
        Self {
            precession: PrecessionIAU2006::new(),
        }
    }

    pub fn position(&self, tt: &TT) -> AstroResult<EarthPosition> {
        let sun = self.geocentric_sun(tt)?;
        Ok(EarthPosition {
            heliocentric_au: -sun,
        })
    }

    /// Geometric geocentric Sun, ICRS axes, AU.
    pub fn geocentric_sun(&self, tt: &TT) -> AstroResult<Vector3> {
        let t = tt.centuries_since_j2000();
        if !t.is_finite() {
            return Err(AstroError::math_error(
                "geocentric_sun",
                MathErrorKind::NotFinite,
                "epoch is not finite",
            ));
        }

        let (longitude, distance) = solar_longitude_and_distance(t);
        let obliquity = mean_obliquity(t);

        let (sin_lon, cos_lon) = libm::sincos(longitude);
        let (sin_eps, cos_eps) = libm::sincos(obliquity);
        let of_date = Vector3::new(
            distance * cos_lon,
            distance * sin_lon * cos_eps,
            distance * sin_lon * sin_eps,
        );

        let jd = tt.to_julian_date();
        let to_icrs = self.precession.bias_precession_matrix(jd.jd1, jd.jd2).transpose();
        Ok(to_icrs * of_date)
    }
}

/// Geometric ecliptic longitude of date (radians) and Earth-Sun distance (AU).
fn solar_longitude_and_distance(t: f64) -> (f64, f64) {
    let mean_longitude = 280.46646 + t * (36000.76983 + t * 0.0003032);
    let mean_anomaly = (357.52911 + t * (35999.05029 - t * 0.0001537)) * DEG_TO_RAD;
    let eccentricity = 0.016708634 - t * (0.000042037 + t * 0.0000001267);

    let center = (1.914602 - t * (0.004817 + t * 0.000014)) * libm::sin(mean_anomaly)
        + (0.019993 - 0.000101 * t) * libm::sin(2.0 * mean_anomaly)
        + 0.000289 * libm::sin(3.0 * mean_anomaly);

    let true_longitude = (mean_longitude + center) * DEG_TO_RAD;
    let true_anomaly = mean_anomaly + center * DEG_TO_RAD;
    let distance = 1.000001018 * (1.0 - eccentricity * eccentricity)
        / (1.0 + eccentricity * libm::cos(true_anomaly));

    (true_longitude, distance)
}

fn mean_obliquity(t: f64) -> f64 {
    let eps0_arcsec = 84381.406
        + t * (-46.836769 + t * (-0.0001831 + t * (0.00200340 + t * (-0.000000576 - t * 0.0000000434))));
    eps0_arcsec * ARCSEC_TO_RAD
}
