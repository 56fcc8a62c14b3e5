use std::fmt;

use super::Vector3;

/// A 3×3 rotation matrix stored row-major.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RotationMatrix3 {
    elements: [[f64; 3]; 3],
}

impl RotationMatrix3 {
    pub fn identity() -> Self {
        Self {
            elements: [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]],
        }
    }

    /// Replaces `self` with `Rx(phi) * self`.
    ///
    /// ```text
    /// Rx(phi) = | 1    0         0       |
    ///           | 0    cos(phi)  sin(phi)|
    ///           | 0   -sin(phi)  cos(phi)|
    /// ```
    pub fn rotate_x(&mut self, phi: f64) {
        let (s, c) = phi.sin_cos();

        let a10 = c * self.elements[1][0] + s * self.elements[2][0];
        let a11 = c * self.elements[1][1] + s * self.elements[2][1];
        let a12 = c * self.elements[1][2] + s * self.elements[2][2];
        let a20 = -s * self.elements[1][0] + c * self.elements[2][0];
        let a21 = -s * self.elements[1][1] + c * self.elements[2][1];
        let a22 = -s * self.elements[1][2] + c * self.elements[2][2];

        self.elements[1] = [a10, a11, a12];
        self.elements[2] = [a20, a21, a22];
    }

    /// Replaces `self` with `Rz(psi) * self`.
    ///
    /// ```text
    /// Rz(psi) = | cos(psi)  sin(psi)  0 |
    ///           |-sin(psi)  cos(psi)  0 |
    ///           |    0         0      1 |
    /// ```
    pub fn rotate_z(&mut self, psi: f64) {
        let (s, c) = psi.sin_cos();

        let a00 = c * self.elements[0][0] + s * self.elements[1][0];
        let a01 = c * self.elements[0][1] + s * self.elements[1][1];
        let a02 = c * self.elements[0][2] + s * self.elements[1][2];
        let a10 = -s * self.elements[0][0] + c * self.elements[1][0];
        let a11 = -s * self.elements[0][1] + c * self.elements[1][1];
        let a12 = -s * self.elements[0][2] + c * self.elements[1][2];

        self.elements[0] = [a00, a01, a02];
        self.elements[1] = [a10, a11, a12];
    }

    pub fn multiply(&self, other: &Self) -> Self {
        let mut result = [[0.0; 3]; 3];
        for (i, row) in result.iter_mut().enumerate() {
            for (j, cell) in row.iter_mut().enumerate() {
                *cell = self.elements[i][0] * other.elements[0][j]
                    + self.elements[i][1] * other.elements[1][j]
                    + self.elements[i][2] * other.elements[2][j];
            }
        }
        Self { elements: result }
    }

    pub fn transpose(&self) -> Self {
        let e = &self.elements;
        Self {
            elements: [
                [e[0][0], e[1][0], e[2][0]],
                [e[0][1], e[1][1], e[2][1]],
                [e[0][2], e[1][2], e[2][2]],
            ],
        }
    }

    pub fn apply_to_vector(&self, vector: Vector3) -> Vector3 {
        let e = &self.elements;
        Vector3::new(
            e[0][0] * vector.x + e[0][1] * vector.y + e[0][2] * vector.z,
            e[1][0] * vector.x + e[1][1] * vector.y + e[1][2] * vector.z,
            e[2][0] * vector.x + e[2][1] * vector.y + e[2][2] * vector.z,
        )
    }

    /// Checks orthonormality and a +1 determinant within `tolerance`.
    pub fn is_rotation_matrix(&self, tolerance: f64) -> bool {
        let product = self.multiply(&self.transpose());
        let identity = Self::identity();
        for i in 0..3 {
            for j in 0..3 {
                if (product.elements[i][j] - identity.elements[i][j]).abs() > tolerance {
                    return false;
                }
            }
        }
        (self.determinant() - 1.0).abs() <= tolerance
    }

    pub fn determinant(&self) -> f64 {
        let e = &self.elements;
        e[0][0] * (e[1][1] * e[2][2] - e[1][2] * e[2][1])
            - e[0][1] * (e[1][0] * e[2][2] - e[1][2] * e[2][0])
            + e[0][2] * (e[1][0] * e[2][1] - e[1][1] * e[2][0])
    }
}

impl std::ops::Mul for RotationMatrix3 {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        self.multiply(&rhs)
    }
}

impl std::ops::Mul<Vector3> for RotationMatrix3 {
    type Output = Vector3;

    fn mul(self, rhs: Vector3) -> Vector3 {
        self.apply_to_vector(rhs)
    }
}

impl std::ops::Mul<Vector3> for &RotationMatrix3 {
    type Output = Vector3;

    fn mul(self, rhs: Vector3) -> Vector3 {
        self.apply_to_vector(rhs)
    }
}

impl fmt::Display for RotationMatrix3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.elements {
            writeln!(f, "[{:15.12} {:15.12} {:15.12}]", row[0], row[1], row[2])?;
        }
        Ok(())
    }
}
