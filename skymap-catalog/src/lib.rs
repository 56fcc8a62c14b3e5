//! Star catalog and constellation figure data for sky maps.
//!
//! Two external datasets feed the projection pipeline:
//!
//! | Module | Dataset | Produces |
//! |--------|---------|----------|
//! | [`hipparcos`] | ESA Hipparcos main catalog (`hip_main.dat`, CDS I/239) | [`StarCatalog`] |
//! | [`constellations`] | Stellarium `constellationship.fab` | [`ConstellationDef`] list |
//! | [`fetch`] | both, downloaded once into a data directory | local file paths |
//!
//! Parsing is tolerant of data gaps: a catalog row with blank coordinates is
//! kept with `None` fields so the projector can skip and report it, while
//! structural corruption (an unparseable identifier) is a [`CatalogError::Parse`].
//!
//! # Features
//!
//! - `download`: enables [`fetch::ensure_dataset`] over HTTP (`reqwest`), with
//!   `.gz` decompression (`flate2`) and a progress bar (`indicatif`).
//! - `serde`: derives `Serialize`/`Deserialize` on the record types.

pub mod constellations;
pub mod errors;
pub mod fetch;
pub mod hipparcos;
pub mod star;

pub use constellations::{
    load_constellationship, parse_constellationship, ConstellationDef, CONSTELLATIONSHIP_FILENAME,
    CONSTELLATIONSHIP_URL,
};
pub use errors::{CatalogError, CatalogResult};
pub use fetch::ensure_dataset;
pub use hipparcos::{load_hipparcos, parse_hip_main, HIPPARCOS_FILENAME, HIPPARCOS_URL};
pub use star::{CatalogEntry, StarCatalog};
