use crate::constants::TWOPI;

#[inline]
pub fn fmod(x: f64, y: f64) -> f64 {
    libm::fmod(x, y)
}

/// Wraps an angle in radians into `[0, 2π)`.
#[inline]
pub fn wrap_0_2pi(angle: f64) -> f64 {
    let w = fmod(angle, TWOPI);
    if w < 0.0 {
        w + TWOPI
    } else {
        w
    }
}
