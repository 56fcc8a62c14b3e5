//! Low-level building blocks for projecting the sky above an observer.
//!
//! `skymap-core` holds the geometry that every other `skymap-*` crate leans on:
//! 3-vectors and rotation matrices, the WGS84 observer location, the IAU 2006
//! bias-precession matrix, and the shared [`AstroError`] type.
//!
//! # Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`matrix`] | [`Vector3`] and [`RotationMatrix3`] |
//! | [`location`] | Geodetic observer [`Location`], ellipsoid normal, geocentric position |
//! | [`precession`] | IAU 2006 Fukushima-Williams bias-precession matrix |
//! | [`constants`] | Astronomical constants (J2000, WGS84, unit conversions) |
//! | [`math`] | Angle wrapping helpers |
//! | [`errors`] | [`AstroError`] and [`AstroResult`] |
//!
//! # Design Notes
//!
//! - **Two-part Julian Dates**: functions accepting `(jd1, jd2)` keep the
//!   epoch and the day offset apart to preserve precision.
//! - **Radians internally**: [`Location`] stores radians; degree constructors
//!   validate and convert.
//! - **No implicit state**: every calculator is a pure function of its inputs.

pub mod constants;
pub mod errors;
pub mod location;
pub mod math;
pub mod matrix;
pub mod precession;

pub use errors::{AstroError, AstroResult, MathErrorKind};
pub use location::Location;
pub use matrix::{RotationMatrix3, Vector3};
pub use precession::PrecessionIAU2006;
