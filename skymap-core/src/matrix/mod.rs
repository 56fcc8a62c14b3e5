//! 3-vectors and 3×3 rotation matrices.
//!
//! Rotations follow the ERFA "passive" convention: `rotate_z(psi)` rotates the
//! frame, so a positive 90° rotation about Z takes `[1, 0, 0]` to `[0, -1, 0]`.
//! Compose with `B * A` to apply `A` first.

mod rotation_matrix;
mod vector3;

pub use rotation_matrix::RotationMatrix3;
pub use vector3::Vector3;
