//! Failure modes of the geometric core.
//!
//! Everything in this crate reports through [`AstroError`]. Geometry that
//! cannot be evaluated (a latitude past the pole, a zero-length zenith, the
//! point opposite a projection center) is a [`MathError`](AstroError::MathError)
//! tagged with a [`MathErrorKind`] so callers can branch without matching on
//! message text:
//!
//! ```
//! use skymap_core::{AstroError, MathErrorKind};
//!
//! fn inverse_radius(r: f64) -> Result<f64, AstroError> {
//!     if r == 0.0 {
//!         return Err(AstroError::math_error(
//!             "inverse_radius",
//!             MathErrorKind::DivisionByZero,
//!             "radius is zero",
//!         ));
//!     }
//!     Ok(1.0 / r)
//! }
//!
//! let err = inverse_radius(0.0).unwrap_err();
//! assert_eq!(err.math_kind(), Some(MathErrorKind::DivisionByZero));
//! ```

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MathErrorKind {
    DivisionByZero,
    InvalidInput,
    /// NaN or infinity in an input or result.
    NotFinite,
    /// Outside the valid domain, e.g. latitude > 90°.
    OutOfRange,
    /// No defined result at this point, e.g. the antipode of a projection center.
    Singularity,
}

#[derive(Error, Debug)]
pub enum AstroError {
    #[error("{operation}: {message} ({kind:?})")]
    MathError {
        operation: String,
        kind: MathErrorKind,
        message: String,
    },
}

pub type AstroResult<T> = Result<T, AstroError>;

impl AstroError {
    pub fn math_error(
        operation: impl Into<String>,
        kind: MathErrorKind,
        message: impl Into<String>,
    ) -> Self {
        Self::MathError {
            operation: operation.into(),
            kind,
            message: message.into(),
        }
    }

    pub fn math_kind(&self) -> Option<MathErrorKind> {
        match self {
            Self::MathError { kind, .. } => Some(*kind),
        }
    }
}
