//! Layered configuration.
//!
//! Sources, later ones winning:
//! 1. Built-in defaults
//! 2. `skymap.toml` in the working directory (or an explicit file)
//! 3. `SKYMAP_*` environment variables, e.g. `SKYMAP_CANVAS_WIDTH=2048`

use std::path::{Path, PathBuf};

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};
use skymap_catalog::{CONSTELLATIONSHIP_URL, HIPPARCOS_URL};

use crate::canvas::CanvasSize;
use crate::errors::SkyResult;

pub const CONFIG_FILENAME: &str = "skymap.toml";
pub const ENV_PREFIX: &str = "SKYMAP_";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SkyMapConfig {
    pub canvas_width: i64,
    pub canvas_height: i64,
    /// Where downloaded datasets are cached.
    pub data_dir: PathBuf,
    pub hipparcos_url: String,
    pub constellation_url: String,
    /// Project catalog stars on the rayon pool.
    pub parallel: bool,
}

impl Default for SkyMapConfig {
    fn default() -> Self {
        Self {
            canvas_width: 1024,
            canvas_height: 1024,
            data_dir: PathBuf::from("downloads"),
            hipparcos_url: HIPPARCOS_URL.to_string(),
            constellation_url: CONSTELLATIONSHIP_URL.to_string(),
            parallel: true,
        }
    }
}

impl SkyMapConfig {
    pub fn load() -> SkyResult<Self> {
        Ok(Self::figment(None).extract()?)
    }

    pub fn load_from(path: &Path) -> SkyResult<Self> {
        Ok(Self::figment(Some(path)).extract()?)
    }

    /// The provider chain. `file` replaces `./skymap.toml`; a missing file is
    /// not an error.
    pub fn figment(file: Option<&Path>) -> Figment {
        let file = file
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from(CONFIG_FILENAME));

        Figment::from(Serialized::defaults(Self::default()))
            .merge(Toml::file(file))
            .merge(Env::prefixed(ENV_PREFIX).ignore(&["log"]))
    }

    pub fn canvas_size(&self) -> SkyResult<CanvasSize> {
        CanvasSize::new(self.canvas_width, self.canvas_height)
    }
}
