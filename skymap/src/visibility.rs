//! Keeps the constellation stars that fall inside the plane bounds.

use tracing::{debug, warn};

use crate::constellation::ConstellationStars;
use crate::projector::{ProjectedStar, ProjectedStars};

pub const X_MIN: f64 = -1.0;
pub const X_MAX: f64 = 1.0;
pub const Y_MIN: f64 = -1.0;
pub const Y_MAX: f64 = 1.0;

/// Inclusive on all four edges.
pub fn is_visible(x: f64, y: f64) -> bool {
    (X_MIN..=X_MAX).contains(&x) && (Y_MIN..=Y_MAX).contains(&y)
}

/// A constellation with at least one star inside the bounds, still in plane
/// coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct VisibleConstellation {
    pub code: String,
    pub stars: Vec<ProjectedStar>,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct VisibilityFilter;

impl VisibilityFilter {
    /// Constellation order and star order within each are preserved.
    /// Star ids absent from `projected` are skipped.
    pub fn filter(
        &self,
        constellations: &[ConstellationStars],
        projected: &ProjectedStars,
    ) -> Vec<VisibleConstellation> {
        let mut unknown = 0usize;
        let mut visible = Vec::new();

        for constellation in constellations {
            let mut stars = Vec::new();
            for &id in &constellation.star_ids {
                let Some(star) = projected.get(id) else {
                    debug!(code = %constellation.code, id, "figure references unknown star");
                    unknown += 1;
                    continue;
                };
                if is_visible(star.x, star.y) {
                    stars.push(*star);
                }
            }

            if !stars.is_empty() {
                visible.push(VisibleConstellation {
                    code: constellation.code.clone(),
                    stars,
                });
            }
        }

        if unknown > 0 {
            warn!(references = unknown, "constellation stars missing from projection");
        }
        debug!(
            visible = visible.len(),
            total = constellations.len(),
            "visible constellations"
        );
        visible
    }
}
