//! Request to sky map, end to end.
//!
//! ```text
//! SkyMapRequest ─► ObserverFrame ─► StereographicProjection
//!                                        │
//!           StarCatalog ─► StarPositionProjector ─► ProjectedStars
//!                                                        │
//!   ConstellationDefs ─► ConstellationAssembler ─► VisibilityFilter ─► CanvasMapper ─► SkyMapResult
//! ```
//!
//! The datasets live in [`SkyData`], loaded once and shared; everything
//! downstream of the request is rebuilt per call.

use std::path::Path;
use std::sync::Arc;

use skymap_catalog::{
    ensure_dataset, load_constellationship, load_hipparcos, ConstellationDef, StarCatalog,
    CONSTELLATIONSHIP_FILENAME, HIPPARCOS_FILENAME,
};
use skymap_core::Location;
use skymap_ephemeris::EarthEphemeris;
use skymap_time::TimeInstant;
use tracing::{debug, info};

use crate::canvas::{CanvasMapper, CanvasSize};
use crate::config::SkyMapConfig;
use crate::constellation::ConstellationAssembler;
use crate::errors::{SkyMapError, SkyResult};
use crate::observer::ObserverFrame;
use crate::projection::StereographicProjection;
use crate::projector::StarPositionProjector;
use crate::result::SkyMapResult;
use crate::visibility::VisibilityFilter;

/// A validated request.
#[derive(Debug, Clone)]
pub struct SkyMapRequest {
    pub latitude: f64,
    pub longitude: f64,
    pub date_iso8601: String,
    pub location: Location,
    pub instant: TimeInstant,
}

impl SkyMapRequest {
    /// Checks latitude ∈ [-90, 90], longitude ∈ [-180, 180] and resolves the
    /// date.
    pub fn new(latitude: f64, longitude: f64, date_iso8601: &str) -> SkyResult<Self> {
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(SkyMapError::InvalidLocation(format!(
                "latitude {} outside [-90, 90]",
                latitude
            )));
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(SkyMapError::InvalidLocation(format!(
                "longitude {} outside [-180, 180]",
                longitude
            )));
        }

        let instant = TimeInstant::resolve(date_iso8601)?;
        let location = Location::from_degrees(latitude, longitude)?;

        Ok(Self {
            latitude,
            longitude,
            date_iso8601: date_iso8601.to_string(),
            location,
            instant,
        })
    }
}

/// Star catalog and constellation figures.
#[derive(Debug, Clone)]
pub struct SkyData {
    pub catalog: StarCatalog,
    pub constellations: Vec<ConstellationDef>,
}

impl SkyData {
    pub fn new(catalog: StarCatalog, constellations: Vec<ConstellationDef>) -> Self {
        Self {
            catalog,
            constellations,
        }
    }

    /// Loads both datasets from `dir`, which must already hold them.
    pub fn load_from_dir(dir: &Path) -> SkyResult<Self> {
        let catalog = load_hipparcos(&dir.join(HIPPARCOS_FILENAME))?;
        let constellations = load_constellationship(&dir.join(CONSTELLATIONSHIP_FILENAME))?;
        Ok(Self::new(catalog, constellations))
    }

    /// Loads both datasets, downloading any that are not cached yet.
    pub fn fetch(config: &SkyMapConfig) -> SkyResult<Self> {
        ensure_dataset(&config.data_dir, HIPPARCOS_FILENAME, &config.hipparcos_url)?;
        ensure_dataset(
            &config.data_dir,
            CONSTELLATIONSHIP_FILENAME,
            &config.constellation_url,
        )?;
        Self::load_from_dir(&config.data_dir)
    }
}

/// Computes sky maps against shared datasets.
#[derive(Debug, Clone)]
pub struct SkyMapper {
    data: Arc<SkyData>,
    canvas: CanvasMapper,
    ephemeris: EarthEphemeris,
    parallel: bool,
}

impl SkyMapper {
    pub fn new(data: Arc<SkyData>, canvas: CanvasSize) -> Self {
        Self {
            data,
            canvas: CanvasMapper::new(canvas),
            ephemeris: EarthEphemeris::new(),
            parallel: cfg!(feature = "parallel"),
        }
    }

    pub fn from_config(data: Arc<SkyData>, config: &SkyMapConfig) -> SkyResult<Self> {
        Ok(Self::new(data, config.canvas_size()?).with_parallel(config.parallel))
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn data(&self) -> &Arc<SkyData> {
        &self.data
    }

    pub fn compute(&self, request: &SkyMapRequest) -> SkyResult<SkyMapResult> {
        let frame =
            ObserverFrame::with_ephemeris(request.location, request.instant, &self.ephemeris)?;
        let projection = StereographicProjection::new(frame.zenith)?;

        let projected = StarPositionProjector::new(&frame, projection)
            .project_catalog(&self.data.catalog, self.parallel);

        let figures = ConstellationAssembler.assemble(&self.data.constellations);
        let visible = VisibilityFilter.filter(&figures, &projected);
        debug!(figures = figures.len(), visible = visible.len(), "filtered constellations");

        let constellations = self.canvas.map(visible);

        let result = SkyMapResult {
            latitude: request.latitude,
            longitude: request.longitude,
            date_iso8601: request.date_iso8601.clone(),
            constellations,
        };
        info!(
            date = %request.instant,
            latitude = request.latitude,
            longitude = request.longitude,
            constellations = result.constellations.len(),
            stars = result.star_count(),
            "computed sky map"
        );
        Ok(result)
    }
}

/// One-shot: validate, then compute.
pub fn compute_sky_map(
    data: Arc<SkyData>,
    canvas: CanvasSize,
    latitude: f64,
    longitude: f64,
    date_iso8601: &str,
) -> SkyResult<SkyMapResult> {
    let request = SkyMapRequest::new(latitude, longitude, date_iso8601)?;
    SkyMapper::new(data, canvas).compute(&request)
}

#[cfg(test)]
mod tests {
    use super::*;
    use skymap_time::TimeError;

    #[test]
    fn request_validation() {
        assert!(SkyMapRequest::new(34.0194736, -119.0355556, "2023-12-30T15:55+00:00").is_ok());
        assert!(SkyMapRequest::new(-90.0, -180.0, "-001999-12-21T23:55+00:00").is_ok());
        assert!(SkyMapRequest::new(90.0, 180.0, "2094-12-31T23:59+00:00").is_ok());

        for (lat, lon) in [(90.5, 0.0), (-91.0, 0.0), (0.0, 180.1), (0.0, -181.0), (f64::NAN, 0.0)] {
            let err = SkyMapRequest::new(lat, lon, "2023-12-30T15:55Z").unwrap_err();
            assert!(matches!(err, SkyMapError::InvalidLocation(_)), "{} {}", lat, lon);
            assert!(err.is_request_error());
        }

        assert!(matches!(
            SkyMapRequest::new(0.0, 0.0, "2096-01-01T00:00Z"),
            Err(SkyMapError::Time(TimeError::TimeOutOfRange { year: 2096 }))
        ));
        assert!(matches!(
            SkyMapRequest::new(0.0, 0.0, "not a date"),
            Err(SkyMapError::Time(TimeError::InvalidTimeFormat(_)))
        ));
    }

    #[test]
    fn empty_datasets_give_empty_map() {
        let data = Arc::new(SkyData::new(StarCatalog::new(), Vec::new()));
        let result = compute_sky_map(
            data,
            CanvasSize::new(1024, 1024).unwrap(),
            0.0,
            0.0,
            "2000-01-01T12:00Z",
        )
        .unwrap();
        assert!(result.constellations.is_empty());
        assert_eq!(result.date_iso8601, "2000-01-01T12:00Z");
    }

    #[test]
    fn load_from_dir_reports_missing_files() {
        let dir = tempfile::tempdir().unwrap();
        let err = SkyData::load_from_dir(dir.path()).unwrap_err();
        assert!(err.is_unavailable());
    }
}
