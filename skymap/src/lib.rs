//! Sky maps: which constellation stars are overhead, and where to draw them.
//!
//! Given a place on Earth and an instant, the pipeline finds the local zenith,
//! projects every catalog star stereographically about it, keeps the stars of
//! each constellation figure that land inside the `[-1, 1]²` plane, and maps
//! them onto an integer pixel canvas.
//!
//! ```no_run
//! use std::sync::Arc;
//! use skymap::{SkyData, SkyMapConfig, SkyMapRequest, SkyMapper};
//!
//! let config = SkyMapConfig::load()?;
//! let data = Arc::new(SkyData::load_from_dir(&config.data_dir)?);
//! let mapper = SkyMapper::from_config(data, &config)?;
//!
//! let request = SkyMapRequest::new(34.0194736, -119.0355556, "2023-12-30T15:55+00:00")?;
//! let map = mapper.compute(&request)?;
//! println!("{} constellations overhead", map.constellations.len());
//! # Ok::<(), skymap::SkyMapError>(())
//! ```
//!
//! # Modules
//!
//! | Module | Stage |
//! |--------|-------|
//! | [`observer`] | [`ObserverFrame`]: zenith direction and observer position at the instant |
//! | [`projection`] | [`StereographicProjection`] about the zenith |
//! | [`projector`] | [`StarPositionProjector`]: proper motion, parallax, projection per star |
//! | [`constellation`] | [`ConstellationAssembler`]: unique star ids per figure |
//! | [`visibility`] | [`VisibilityFilter`]: plane bounds |
//! | [`canvas`] | [`CanvasMapper`]: plane to pixels |
//! | [`pipeline`] | [`SkyMapRequest`], [`SkyData`], [`SkyMapper`] |
//! | [`config`] | [`SkyMapConfig`] via `figment` |
//!
//! # Features
//!
//! - `parallel` (default): project the catalog on the `rayon` pool.
//! - `download`: fetch missing datasets over HTTP.
//! - `cli`: the `skymap` binary.

pub mod canvas;
pub mod config;
pub mod constellation;
pub mod errors;
pub mod observer;
pub mod pipeline;
pub mod projection;
pub mod projector;
pub mod result;
pub mod visibility;

pub use canvas::{CanvasMapper, CanvasSize, ConstellationOut, ConstellationStarOut};
pub use config::SkyMapConfig;
pub use constellation::{ConstellationAssembler, ConstellationStars};
pub use errors::{SkyMapError, SkyResult};
pub use observer::ObserverFrame;
pub use pipeline::{compute_sky_map, SkyData, SkyMapRequest, SkyMapper};
pub use projection::{PlanePoint, StereographicProjection};
pub use projector::{ProjectedStar, ProjectedStars, SkipReason, StarPositionProjector};
pub use result::SkyMapResult;
pub use visibility::{is_visible, VisibilityFilter, VisibleConstellation};
