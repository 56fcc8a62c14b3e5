use serde::{Deserialize, Serialize};

use crate::canvas::ConstellationOut;

/// The sky map returned for one request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkyMapResult {
    pub latitude: f64,
    pub longitude: f64,
    /// The date string exactly as requested.
    pub date_iso8601: String,
    pub constellations: Vec<ConstellationOut>,
}

impl SkyMapResult {
    pub fn star_count(&self) -> usize {
        self.constellations.iter().map(|c| c.stars.len()).sum()
    }
}
