//! Per-star apparent direction and plane position.

use std::collections::HashMap;

use skymap_catalog::star::HIPPARCOS_EPOCH_JD;
use skymap_catalog::{CatalogEntry, StarCatalog};
use skymap_core::constants::{
    AU_PER_PARSEC, DAYS_PER_JULIAN_YEAR, DEG_TO_RAD, MILLIARCSEC_TO_RAD,
};
use skymap_core::Vector3;
use tracing::{debug, warn};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::observer::ObserverFrame;
use crate::projection::StereographicProjection;

/// Distance assigned to stars without a usable parallax: 1 Gpc in AU.
const DISTANT_STAR_AU: f64 = 1.0e9 * AU_PER_PARSEC;

/// A catalog star on the projection plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectedStar {
    pub id: u32,
    pub x: f64,
    pub y: f64,
    pub magnitude: f64,
}

/// Why a catalog entry produced no [`ProjectedStar`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum SkipReason {
    /// Position or magnitude missing or unreadable.
    MissingData,
    /// The direction could not be projected (the nadir point).
    Unprojectable,
}

#[derive(Debug, Clone, Default)]
pub struct ProjectedStars {
    stars: HashMap<u32, ProjectedStar>,
    skipped: Vec<(u32, SkipReason)>,
}

impl ProjectedStars {
    pub fn get(&self, id: u32) -> Option<&ProjectedStar> {
        self.stars.get(&id)
    }

    pub fn len(&self) -> usize {
        self.stars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stars.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ProjectedStar> {
        self.stars.values()
    }

    /// Catalog entries left out, sorted by id.
    pub fn skipped(&self) -> &[(u32, SkipReason)] {
        &self.skipped
    }
}

impl FromIterator<ProjectedStar> for ProjectedStars {
    fn from_iter<I: IntoIterator<Item = ProjectedStar>>(iter: I) -> Self {
        Self {
            stars: iter.into_iter().map(|s| (s.id, s)).collect(),
            skipped: Vec::new(),
        }
    }
}

/// Places every catalog star on the plane as seen by one observer.
#[derive(Debug, Clone)]
pub struct StarPositionProjector {
    projection: StereographicProjection,
    observer_au: Vector3,
    years_since_epoch: f64,
}

impl StarPositionProjector {
    pub fn new(frame: &ObserverFrame, projection: StereographicProjection) -> Self {
        let tt = frame.tt.to_julian_date();
        let years_since_epoch =
            ((tt.jd1 - HIPPARCOS_EPOCH_JD) + tt.jd2) / DAYS_PER_JULIAN_YEAR;
        Self {
            projection,
            observer_au: frame.barycentric_au(),
            years_since_epoch,
        }
    }

    pub fn project_catalog(&self, catalog: &StarCatalog, parallel: bool) -> ProjectedStars {
        let results: Vec<Result<ProjectedStar, (u32, SkipReason)>> = if parallel {
            self.project_all_parallel(catalog.entries())
        } else {
            catalog.entries().iter().map(|e| self.project_entry(e)).collect()
        };

        let mut stars = HashMap::with_capacity(results.len());
        let mut skipped = Vec::new();
        for result in results {
            match result {
                Ok(star) => {
                    stars.insert(star.id, star);
                }
                Err(skip) => skipped.push(skip),
            }
        }
        skipped.sort_unstable();

        if !skipped.is_empty() {
            let missing = skipped
                .iter()
                .filter(|(_, r)| *r == SkipReason::MissingData)
                .count();
            warn!(
                skipped = skipped.len(),
                missing_data = missing,
                unprojectable = skipped.len() - missing,
                "catalog entries skipped during projection"
            );
        }
        debug!(projected = stars.len(), "projected catalog");

        ProjectedStars { stars, skipped }
    }

    #[cfg(feature = "parallel")]
    fn project_all_parallel(
        &self,
        entries: &[CatalogEntry],
    ) -> Vec<Result<ProjectedStar, (u32, SkipReason)>> {
        entries.par_iter().map(|e| self.project_entry(e)).collect()
    }

    #[cfg(not(feature = "parallel"))]
    fn project_all_parallel(
        &self,
        entries: &[CatalogEntry],
    ) -> Vec<Result<ProjectedStar, (u32, SkipReason)>> {
        entries.iter().map(|e| self.project_entry(e)).collect()
    }

    fn project_entry(&self, entry: &CatalogEntry) -> Result<ProjectedStar, (u32, SkipReason)> {
        let Some((ra_deg, dec_deg, magnitude)) = entry.position_and_magnitude() else {
            debug!(id = entry.id, "catalog entry without position or magnitude");
            return Err((entry.id, SkipReason::MissingData));
        };

        let direction = self.apparent_direction(entry, ra_deg, dec_deg);
        match self.projection.project(&direction) {
            Ok(point) => Ok(ProjectedStar {
                id: entry.id,
                x: point.x,
                y: point.y,
                magnitude,
            }),
            Err(e) => {
                debug!(id = entry.id, error = %e, "star not projectable");
                Err((entry.id, SkipReason::Unprojectable))
            }
        }
    }

    /// Star position at the observation epoch relative to the observer, AU.
    fn apparent_direction(&self, entry: &CatalogEntry, ra_deg: f64, dec_deg: f64) -> Vector3 {
        let ra = ra_deg * DEG_TO_RAD;
        let dec = dec_deg * DEG_TO_RAD;
        let (sin_ra, cos_ra) = ra.sin_cos();
        let (sin_dec, cos_dec) = dec.sin_cos();

        let distance = match entry.parallax_mas {
            Some(plx) if plx > 0.0 => AU_PER_PARSEC * 1000.0 / plx,
            _ => DISTANT_STAR_AU,
        };

        let unit = Vector3::new(cos_dec * cos_ra, cos_dec * sin_ra, sin_dec);
        let east = Vector3::new(-sin_ra, cos_ra, 0.0);
        let north = Vector3::new(-sin_dec * cos_ra, -sin_dec * sin_ra, cos_dec);

        let pm_ra = entry.pm_ra_mas_yr.unwrap_or(0.0) * MILLIARCSEC_TO_RAD;
        let pm_dec = entry.pm_dec_mas_yr.unwrap_or(0.0) * MILLIARCSEC_TO_RAD;
        let velocity = (east * pm_ra + north * pm_dec) * distance;

        unit * distance + velocity * self.years_since_epoch - self.observer_au
    }
}
