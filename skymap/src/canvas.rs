//! Plane coordinates to integer pixels.

use serde::{Deserialize, Serialize};

use crate::errors::{SkyMapError, SkyResult};
use crate::visibility::{VisibleConstellation, X_MAX, X_MIN, Y_MAX, Y_MIN};

/// Canvas dimensions in pixels, both positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CanvasSize {
    width: i64,
    height: i64,
}

impl CanvasSize {
    pub fn new(width: i64, height: i64) -> SkyResult<Self> {
        if width <= 0 || height <= 0 {
            return Err(SkyMapError::InvalidCanvasSize { width, height });
        }
        Ok(Self { width, height })
    }

    pub fn width(&self) -> i64 {
        self.width
    }

    pub fn height(&self) -> i64 {
        self.height
    }
}

/// A visible star in canvas space. `m` is the apparent magnitude.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConstellationStarOut {
    pub id: u32,
    pub x: i64,
    pub y: i64,
    pub m: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConstellationOut {
    pub code: String,
    pub stars: Vec<ConstellationStarOut>,
}

/// Linear map of the `[-1, 1]²` plane onto `[0, width] × [0, height]`, with
/// the y axis flipped so plane north is the top row. Halves round to even.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CanvasMapper {
    size: CanvasSize,
}

impl CanvasMapper {
    pub fn new(size: CanvasSize) -> Self {
        Self { size }
    }

    pub fn size(&self) -> CanvasSize {
        self.size
    }

    pub fn to_pixel(&self, x: f64, y: f64) -> (i64, i64) {
        let px = (x - X_MIN) / (X_MAX - X_MIN) * self.size.width as f64;
        let py = (Y_MAX - y) / (Y_MAX - Y_MIN) * self.size.height as f64;
        (px.round_ties_even() as i64, py.round_ties_even() as i64)
    }

    /// Consumes the plane-space constellations; there is no way back.
    pub fn map(&self, constellations: Vec<VisibleConstellation>) -> Vec<ConstellationOut> {
        constellations
            .into_iter()
            .map(|c| ConstellationOut {
                code: c.code,
                stars: c
                    .stars
                    .iter()
                    .map(|s| {
                        let (x, y) = self.to_pixel(s.x, s.y);
                        ConstellationStarOut {
                            id: s.id,
                            x,
                            y,
                            m: s.magnitude,
                        }
                    })
                    .collect(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projector::ProjectedStar;

    fn mapper(w: i64, h: i64) -> CanvasMapper {
        CanvasMapper::new(CanvasSize::new(w, h).unwrap())
    }

    #[test]
    fn corner_and_center_pixels() {
        let m = mapper(1024, 1024);
        assert_eq!(m.to_pixel(0.0, 0.0), (512, 512));
        assert_eq!(m.to_pixel(-1.0, -1.0), (0, 1024));
        assert_eq!(m.to_pixel(1.0, 1.0), (1024, 0));
        assert_eq!(m.to_pixel(-1.0, 1.0), (0, 0));
    }

    #[test]
    fn non_square_canvas() {
        let m = mapper(800, 600);
        assert_eq!(m.to_pixel(0.0, 0.0), (400, 300));
        assert_eq!(m.to_pixel(0.5, -0.5), (600, 450));
    }

    #[test]
    fn halves_round_to_even() {
        assert_eq!(mapper(1, 1).to_pixel(0.0, 0.0), (0, 0));
        assert_eq!(mapper(3, 3).to_pixel(0.0, 0.0), (2, 2));
        assert_eq!(mapper(5, 5).to_pixel(0.0, 0.0), (2, 2));
    }

    #[test]
    fn rejects_non_positive_sizes() {
        for (w, h) in [(0, 1024), (1024, 0), (-5, 10), (10, -1)] {
            match CanvasSize::new(w, h) {
                Err(SkyMapError::InvalidCanvasSize { width, height }) => {
                    assert_eq!((width, height), (w, h));
                }
                other => panic!("{}x{} should be rejected, got {:?}", w, h, other),
            }
        }
    }

    #[test]
    fn map_preserves_ids_magnitudes_and_order() {
        let visible = vec![
            VisibleConstellation {
                code: "Boo".into(),
                stars: vec![
                    ProjectedStar { id: 69673, x: 0.0, y: 0.0, magnitude: -0.05 },
                    ProjectedStar { id: 71075, x: 1.0, y: -1.0, magnitude: 3.04 },
                ],
            },
            VisibleConstellation {
                code: "CrB".into(),
                stars: vec![ProjectedStar { id: 76267, x: -0.5, y: 0.5, magnitude: 2.22 }],
            },
        ];
        let out = mapper(1024, 1024).map(visible);
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].code, "Boo");
        assert_eq!(
            out[0].stars,
            vec![
                ConstellationStarOut { id: 69673, x: 512, y: 512, m: -0.05 },
                ConstellationStarOut { id: 71075, x: 1024, y: 1024, m: 3.04 },
            ]
        );
        assert_eq!(out[1].stars[0], ConstellationStarOut { id: 76267, x: 256, y: 256, m: 2.22 });
    }

    #[test]
    fn pixels_stay_on_canvas_for_visible_points() {
        let m = mapper(1024, 768);
        for i in 0..=20 {
            for j in 0..=20 {
                let x = -1.0 + i as f64 * 0.1;
                let y = -1.0 + j as f64 * 0.1;
                let (px, py) = m.to_pixel(x.clamp(-1.0, 1.0), y.clamp(-1.0, 1.0));
                assert!((0..=1024).contains(&px) && (0..=768).contains(&py));
            }
        }
    }
}
