//! The observer's reference frame at the requested instant.

use skymap_core::constants::AU_KM;
use skymap_core::{Location, PrecessionIAU2006, RotationMatrix3, Vector3};
use skymap_ephemeris::{EarthEphemeris, EarthPosition};
use skymap_time::{TimeInstant, GMST, TT};
use tracing::debug;

use crate::errors::SkyResult;

/// Where the observer stands and which way is up, in ICRS axes.
#[derive(Debug, Clone)]
pub struct ObserverFrame {
    pub location: Location,
    pub instant: TimeInstant,
    pub tt: TT,
    pub gmst: GMST,
    /// Unit vector toward altitude 90°.
    pub zenith: Vector3,
    /// Observer relative to the geocenter, km.
    pub geocentric_km: Vector3,
    pub earth: EarthPosition,
}

impl ObserverFrame {
    pub fn new(location: Location, instant: TimeInstant) -> SkyResult<Self> {
        Self::with_ephemeris(location, instant, &EarthEphemeris::new())
    }

    pub fn with_ephemeris(
        location: Location,
        instant: TimeInstant,
        ephemeris: &EarthEphemeris,
    ) -> SkyResult<Self> {
        let ut1 = instant.ut1();
        let tt = instant.tt();
        let gmst = GMST::from_ut1_and_tt(&ut1, &tt)?;

        let tt_jd = tt.to_julian_date();
        let to_icrs = PrecessionIAU2006::new()
            .bias_precession_matrix(tt_jd.jd1, tt_jd.jd2)
            .transpose();

        // Earth-fixed to mean equator of date: rotate by -GMST about the pole
        let mut spin = RotationMatrix3::identity();
        spin.rotate_z(-gmst.radians());
        let to_icrs = to_icrs * spin;

        let zenith = (to_icrs * location.zenith_earth_fixed()).normalize();
        let geocentric_km = to_icrs * location.earth_fixed_position_km()?;
        let earth = ephemeris.position(&tt)?;

        debug!(
            instant = %instant,
            gmst_hours = gmst.hours(),
            zenith_ra_deg = zenith.to_spherical().0.to_degrees(),
            zenith_dec_deg = zenith.to_spherical().1.to_degrees(),
            "observer frame"
        );

        Ok(Self {
            location,
            instant,
            tt,
            gmst,
            zenith,
            geocentric_km,
            earth,
        })
    }

    /// Observer position relative to the Solar System barycenter, AU.
    pub fn barycentric_au(&self) -> Vector3 {
        self.earth.barycentric_au() + self.geocentric_km / AU_KM
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skymap_core::constants::{PI, RAD_TO_DEG, TWOPI};

    fn frame(lat: f64, lon: f64, date: &str) -> ObserverFrame {
        let location = Location::from_degrees(lat, lon).unwrap();
        let instant = TimeInstant::resolve(date).unwrap();
        ObserverFrame::new(location, instant).unwrap()
    }

    #[test]
    fn zenith_declination_tracks_latitude() {
        let f = frame(34.0194736, -119.0355556, "2023-12-30T15:55Z");
        let (_, dec) = f.zenith.to_spherical();
        // Precession since J2000 and the geodetic normal shift it by < 0.2°
        assert!(
            (dec * RAD_TO_DEG - 34.02).abs() < 0.2,
            "zenith Dec {}° should be close to latitude",
            dec * RAD_TO_DEG
        );
        assert!((f.zenith.magnitude() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn zenith_right_ascension_is_local_sidereal_time() {
        let f = frame(34.0194736, -119.0355556, "2023-12-30T15:55Z");
        let (ra, _) = f.zenith.to_spherical();
        let lst = f.gmst.local(f.location.longitude);
        let mut diff = (ra - lst).abs();
        if diff > PI {
            diff = TWOPI - diff;
        }
        // Equinox of date vs ICRS differ by ~0.33° after 24 years of precession
        assert!(diff * RAD_TO_DEG < 0.5, "RA {} vs LST {}", ra, lst);
        let lst_hours = lst * RAD_TO_DEG / 15.0;
        assert!(lst_hours > 14.0 && lst_hours < 15.0, "LST {}h", lst_hours);
    }

    #[test]
    fn north_pole_zenith_is_celestial_pole() {
        let f = frame(90.0, 0.0, "2000-01-01T12:00Z");
        let (_, dec) = f.zenith.to_spherical();
        assert!(dec * RAD_TO_DEG > 89.99, "Dec {}", dec * RAD_TO_DEG);
    }

    #[test]
    fn geocentric_radius_on_ellipsoid() {
        let equator = frame(0.0, 0.0, "2000-01-01T00:00Z");
        assert!((equator.geocentric_km.magnitude() - 6378.137).abs() < 1e-6);

        let pole = frame(90.0, 0.0, "2000-01-01T00:00Z");
        assert!((pole.geocentric_km.magnitude() - 6356.752).abs() < 1e-2);
    }

    #[test]
    fn observer_is_about_one_au_from_barycenter() {
        let f = frame(51.4769, 0.0, "2023-06-21T12:00Z");
        let d = f.barycentric_au().magnitude();
        assert!(d > 1.01 && d < 1.02, "June distance {} AU", d);
        let earth = f.earth.barycentric_au();
        assert!((f.barycentric_au() - earth).magnitude() * AU_KM < 6400.0);
    }

    #[test]
    fn ancient_instant_is_supported() {
        let f = frame(40.0, 20.0, "-2000-03-21T00:00Z");
        assert!(f.zenith.is_finite());
        let (_, dec) = f.zenith.to_spherical();
        // Precession over 4000 years moves the pole by ~55° in longitude,
        // shifting ICRS declination of a fixed zenith by up to ~23°.
        assert!(dec.abs() * RAD_TO_DEG < 90.0);
    }
}
