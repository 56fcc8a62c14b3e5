//! Stereographic projection about the observer's zenith.
//!
//! For a unit direction `u` at angular distance θ from the center `c`, the
//! projected radius is `tan(θ/2)`: the zenith lands on the origin and the
//! horizon (θ = 90°) on the unit circle, so the visible hemisphere fills the
//! `[-1, 1]` square's inscribed disk. North is up and east is to the left, as
//! on a chart held overhead.

use skymap_core::{AstroError, AstroResult, MathErrorKind, Vector3};

/// A point on the projection plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlanePoint {
    pub x: f64,
    pub y: f64,
}

impl PlanePoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn radius(&self) -> f64 {
        self.x.hypot(self.y)
    }
}

/// Below this, `1 + u·c` is treated as zero: `u` is the antipode of the center.
const ANTIPODE_TOLERANCE: f64 = 1e-12;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StereographicProjection {
    center: Vector3,
    east: Vector3,
    north: Vector3,
}

impl StereographicProjection {
    /// Builds the projection about `center` (any non-zero vector).
    pub fn new(center: Vector3) -> AstroResult<Self> {
        if !center.is_finite() || center.magnitude() == 0.0 {
            return Err(AstroError::math_error(
                "stereographic_projection",
                MathErrorKind::InvalidInput,
                "projection center must be a finite non-zero vector",
            ));
        }
        let center = center.normalize();

        // At the celestial poles the east direction is arbitrary; use +y.
        let pole_axis = Vector3::z_axis().cross(&center);
        let east = if pole_axis.magnitude() < 1e-12 {
            Vector3::y_axis()
        } else {
            pole_axis.normalize()
        };
        let north = center.cross(&east);

        Ok(Self {
            center,
            east,
            north,
        })
    }

    pub fn center(&self) -> Vector3 {
        self.center
    }

    /// Projects a direction. Its length is irrelevant.
    pub fn project(&self, direction: &Vector3) -> AstroResult<PlanePoint> {
        let magnitude = direction.magnitude();
        if !magnitude.is_finite() || magnitude == 0.0 {
            return Err(AstroError::math_error(
                "stereographic_project",
                MathErrorKind::InvalidInput,
                "direction must be a finite non-zero vector",
            ));
        }
        let u = *direction / magnitude;

        let denominator = 1.0 + u.dot(&self.center);
        if denominator < ANTIPODE_TOLERANCE {
            return Err(AstroError::math_error(
                "stereographic_project",
                MathErrorKind::Singularity,
                "direction is the antipode of the projection center",
            ));
        }

        Ok(PlanePoint::new(
            -u.dot(&self.east) / denominator,
            u.dot(&self.north) / denominator,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skymap_core::constants::{DEG_TO_RAD, HALF_PI};

    fn zenith_at(ra_deg: f64, dec_deg: f64) -> StereographicProjection {
        StereographicProjection::new(Vector3::from_spherical(ra_deg * DEG_TO_RAD, dec_deg * DEG_TO_RAD)).unwrap()
    }

    #[test]
    fn center_maps_to_origin() {
        let proj = zenith_at(123.0, 34.0);
        let p = proj.project(&proj.center()).unwrap();
        assert!(p.x.abs() < 1e-15 && p.y.abs() < 1e-15);
    }

    #[test]
    fn radius_is_tan_half_angle() {
        let proj = zenith_at(200.0, 10.0);
        for sep_deg in [1.0_f64, 30.0, 60.0, 90.0, 120.0] {
            let u = Vector3::from_spherical(200.0 * DEG_TO_RAD, (10.0 - sep_deg) * DEG_TO_RAD);
            let p = proj.project(&u).unwrap();
            let expected = (sep_deg * DEG_TO_RAD / 2.0).tan();
            assert!(
                (p.radius() - expected).abs() < 1e-12,
                "separation {}°: radius {} expected {}",
                sep_deg,
                p.radius(),
                expected
            );
        }
    }

    #[test]
    fn horizon_on_unit_circle() {
        let proj = zenith_at(45.0, 30.0);
        let c = proj.center();
        let helper = c.cross(&Vector3::x_axis()).normalize();
        for k in 0..12 {
            let a = k as f64 * 30.0 * DEG_TO_RAD;
            let horizon = helper * a.cos() + c.cross(&helper) * a.sin();
            let p = proj.project(&horizon).unwrap();
            assert!((p.radius() - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn north_up_east_left() {
        let proj = zenith_at(90.0, 0.0);
        let north = proj.project(&Vector3::from_spherical(90.0 * DEG_TO_RAD, 10.0 * DEG_TO_RAD)).unwrap();
        assert!(north.y > 0.0 && north.x.abs() < 1e-12);

        let east = proj.project(&Vector3::from_spherical(100.0 * DEG_TO_RAD, 0.0)).unwrap();
        assert!(east.x < 0.0 && east.y.abs() < 1e-12);
    }

    #[test]
    fn stable_for_same_direction() {
        let proj = zenith_at(10.0, -45.0);
        let u = Vector3::from_spherical(20.0 * DEG_TO_RAD, -40.0 * DEG_TO_RAD);
        assert_eq!(proj.project(&u).unwrap(), proj.project(&(u * 42.0)).unwrap());
    }

    #[test]
    fn pole_center_uses_fallback_axes() {
        let proj = StereographicProjection::new(Vector3::z_axis()).unwrap();
        let p = proj
            .project(&Vector3::from_spherical(0.0, HALF_PI - 10.0 * DEG_TO_RAD))
            .unwrap();
        assert!(p.x.is_finite() && p.y.is_finite());
        assert!((p.radius() - (5.0 * DEG_TO_RAD).tan()).abs() < 1e-12);
    }

    #[test]
    fn antipode_is_singular() {
        let proj = zenith_at(0.0, 0.0);
        let err = proj.project(&-proj.center()).unwrap_err();
        assert_eq!(err.math_kind(), Some(MathErrorKind::Singularity));
    }

    #[test]
    fn rejects_degenerate_inputs() {
        assert!(StereographicProjection::new(Vector3::zeros()).is_err());
        assert!(StereographicProjection::new(Vector3::new(f64::NAN, 0.0, 1.0)).is_err());
        let proj = zenith_at(0.0, 0.0);
        assert!(proj.project(&Vector3::zeros()).is_err());
    }
}
