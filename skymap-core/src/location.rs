//! Observer location on the WGS84 ellipsoid.
//!
//! **Geodetic coordinates** (what GPS gives you) are defined against the
//! WGS84 reference ellipsoid: latitude is the angle between the equatorial
//! plane and the ellipsoid surface normal. That normal is the direction of
//! the local zenith, which is what a sky map is centered on.
//!
//! Observers are always at sea level (height 0 on the ellipsoid).
//!
//! # Output Format
//!
//! [`Location::to_geocentric_km`] returns cylindrical `(u, v)`:
//! - `u`: distance from Earth's rotation axis
//! - `v`: distance from the equatorial plane (positive north)
//!
//! [`Location::earth_fixed_position_km`] and [`Location::zenith_earth_fixed`]
//! combine those with the longitude into Earth-fixed Cartesian vectors
//! (X toward the prime meridian, Z toward the north pole).

use crate::constants::{DEG_TO_RAD, HALF_PI, PI, WGS84_ECCENTRICITY_SQUARED, WGS84_SEMI_MAJOR_AXIS_KM};
use crate::errors::{AstroError, AstroResult, MathErrorKind};
use crate::matrix::Vector3;

/// A sea-level location on Earth in WGS84 geodetic coordinates.
///
/// Angles are stored in radians.
///
/// ```
/// use skymap_core::Location;
///
/// let malibu = Location::from_degrees(34.0194736, -119.0355556)?;
/// assert!((malibu.latitude.to_degrees() - 34.0194736).abs() < 1e-12);
/// # Ok::<(), skymap_core::AstroError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Location {
    /// Latitude in radians (positive north)
    pub latitude: f64,
    /// Longitude in radians (positive east)
    pub longitude: f64,
}

impl Location {
    /// Creates a location from radians, validating finiteness and range.
    pub fn new(latitude: f64, longitude: f64) -> AstroResult<Self> {
        if !latitude.is_finite() || !longitude.is_finite() {
            return Err(AstroError::math_error(
                "location_validation",
                MathErrorKind::NotFinite,
                "Latitude and longitude must be finite",
            ));
        }
        if latitude.abs() > HALF_PI {
            return Err(AstroError::math_error(
                "location_validation",
                MathErrorKind::OutOfRange,
                &format!("Latitude {:.6} rad outside valid range [-π/2, π/2]", latitude),
            ));
        }
        if longitude.abs() > PI {
            return Err(AstroError::math_error(
                "location_validation",
                MathErrorKind::OutOfRange,
                &format!("Longitude {:.6} rad outside valid range [-π, π]", longitude),
            ));
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Creates a location from degrees, the usual way coordinates arrive.
    ///
    /// Latitude must lie in `[-90, 90]` and longitude in `[-180, 180]`; both
    /// bounds are inclusive.
    pub fn from_degrees(lat_deg: f64, lon_deg: f64) -> AstroResult<Self> {
        if !lat_deg.is_finite() || !lon_deg.is_finite() {
            return Err(AstroError::math_error(
                "location_validation",
                MathErrorKind::NotFinite,
                "Latitude and longitude degrees must be finite",
            ));
        }
        if lat_deg.abs() > 90.0 {
            return Err(AstroError::math_error(
                "location_validation",
                MathErrorKind::OutOfRange,
                &format!("Latitude {:.6}° outside valid range [-90, 90]", lat_deg),
            ));
        }
        if lon_deg.abs() > 180.0 {
            return Err(AstroError::math_error(
                "location_validation",
                MathErrorKind::OutOfRange,
                &format!("Longitude {:.6}° outside valid range [-180, 180]", lon_deg),
            ));
        }
        // Clamp so that ±90° / ±180° survive the degree-to-radian rounding.
        let latitude = (lat_deg * DEG_TO_RAD).clamp(-HALF_PI, HALF_PI);
        let longitude = (lon_deg * DEG_TO_RAD).clamp(-PI, PI);
        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Converts to geocentric cylindrical coordinates `(u, v)` in kilometers.
    ///
    /// ```
    /// use skymap_core::Location;
    ///
    /// let obs = Location::from_degrees(45.0, 0.0)?;
    /// let (u, v) = obs.to_geocentric_km()?;
    /// assert!(u > 4500.0 && u < 4600.0);
    /// assert!(v > 4400.0 && v < 4500.0);
    /// # Ok::<(), skymap_core::AstroError>(())
    /// ```
    pub fn to_geocentric_km(&self) -> AstroResult<(f64, f64)> {
        let (sin_lat, cos_lat) = self.latitude.sin_cos();

        let denominator = 1.0 - WGS84_ECCENTRICITY_SQUARED * sin_lat * sin_lat;
        if denominator <= f64::EPSILON {
            return Err(AstroError::math_error(
                "geocentric_conversion",
                MathErrorKind::DivisionByZero,
                "Latitude too close to critical value causing division by zero",
            ));
        }

        let n = WGS84_SEMI_MAJOR_AXIS_KM / denominator.sqrt();
        let u = n * cos_lat;
        let v = n * (1.0 - WGS84_ECCENTRICITY_SQUARED) * sin_lat;

        Ok((u, v))
    }

    /// Earth-fixed Cartesian position in kilometers.
    pub fn earth_fixed_position_km(&self) -> AstroResult<Vector3> {
        let (u, v) = self.to_geocentric_km()?;
        let (sin_lon, cos_lon) = self.longitude.sin_cos();
        Ok(Vector3::new(u * cos_lon, u * sin_lon, v))
    }

    /// Unit ellipsoid normal in the Earth-fixed frame: the local zenith.
    ///
    /// This is the direction of altitude 90°. It differs from the geocentric
    /// radius vector by up to ~11 arcminutes at mid-latitudes.
    pub fn zenith_earth_fixed(&self) -> Vector3 {
        Vector3::from_spherical(self.longitude, self.latitude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_geocentric_at_equator() {
        let loc = Location::from_degrees(0.0, 0.0).unwrap();
        let (u, v) = loc.to_geocentric_km().unwrap();
        assert_eq!(u, WGS84_SEMI_MAJOR_AXIS_KM);
        assert_eq!(v, 0.0);
    }

    #[test]
    fn test_geocentric_at_north_pole() {
        let loc = Location::from_degrees(90.0, 0.0).unwrap();
        let (u, v) = loc.to_geocentric_km().unwrap();

        assert!(u.abs() < 1e-10, "u = {} km, expected very close to 0 km", u);
        let expected_polar_radius = 6356.752314245;
        assert!(
            (v - expected_polar_radius).abs() < 1e-6,
            "v = {} km, expected ~{} km",
            v,
            expected_polar_radius
        );
    }

    #[test]
    fn test_negative_latitude() {
        let loc = Location::from_degrees(-45.0, 0.0).unwrap();
        let (u, v) = loc.to_geocentric_km().unwrap();
        assert!(u > 0.0, "u should be positive: {}", u);
        assert!(v < 0.0, "v should be negative in southern hemisphere: {}", v);
    }

    #[test]
    fn test_zenith_differs_from_radius_vector() {
        let loc = Location::from_degrees(45.0, 30.0).unwrap();
        let zenith = loc.zenith_earth_fixed();
        let radial = loc.earth_fixed_position_km().unwrap().normalize();

        let separation_arcmin = zenith.angle_to(&radial) / DEG_TO_RAD * 60.0;
        assert!(
            separation_arcmin > 10.0 && separation_arcmin < 12.5,
            "geodetic vs geocentric zenith at 45° should differ by ~11.5', got {}",
            separation_arcmin
        );
        assert!(zenith.z > radial.z, "the normal tilts poleward of the radius");
    }

    #[test]
    fn test_boundary_degrees_accepted() {
        assert!(Location::from_degrees(90.0, 180.0).is_ok());
        assert!(Location::from_degrees(-90.0, -180.0).is_ok());
    }

    #[test]
    fn test_out_of_range_rejected() {
        let err = Location::from_degrees(90.0001, 0.0).unwrap_err();
        assert_eq!(err.math_kind(), Some(MathErrorKind::OutOfRange));
        assert!(Location::from_degrees(0.0, -180.5).is_err());
        assert!(Location::from_degrees(f64::NAN, 0.0).is_err());
        assert!(Location::new(0.0, 4.0).is_err());
    }
}
