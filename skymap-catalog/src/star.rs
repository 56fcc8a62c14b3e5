use std::collections::HashMap;
use tracing::warn;

/// Hipparcos reference epoch (J1991.25) as a Julian Date (TT).
pub const HIPPARCOS_EPOCH_JD: f64 = 2_448_349.0625;

/// One catalog row. Fields are `None` where the source left them blank or
/// unreadable.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CatalogEntry {
    pub id: u32,
    pub ra_deg: Option<f64>,
    pub dec_deg: Option<f64>,
    /// Apparent visual magnitude.
    pub magnitude: Option<f64>,
    pub parallax_mas: Option<f64>,
    /// Proper motion in RA, already multiplied by cos(Dec), mas/yr.
    pub pm_ra_mas_yr: Option<f64>,
    pub pm_dec_mas_yr: Option<f64>,
}

impl CatalogEntry {
    /// A star with position and magnitude only.
    pub fn new(id: u32, ra_deg: f64, dec_deg: f64, magnitude: f64) -> Self {
        Self {
            id,
            ra_deg: Some(ra_deg),
            dec_deg: Some(dec_deg),
            magnitude: Some(magnitude),
            parallax_mas: None,
            pm_ra_mas_yr: None,
            pm_dec_mas_yr: None,
        }
    }

    pub fn with_astrometry(mut self, parallax_mas: f64, pm_ra_mas_yr: f64, pm_dec_mas_yr: f64) -> Self {
        self.parallax_mas = Some(parallax_mas);
        self.pm_ra_mas_yr = Some(pm_ra_mas_yr);
        self.pm_dec_mas_yr = Some(pm_dec_mas_yr);
        self
    }

    /// `(ra_deg, dec_deg, magnitude)` when all three are present and finite.
    pub fn position_and_magnitude(&self) -> Option<(f64, f64, f64)> {
        let ra = self.ra_deg.filter(|v| v.is_finite())?;
        let dec = self.dec_deg.filter(|v| v.is_finite() && v.abs() <= 90.0)?;
        let mag = self.magnitude.filter(|v| v.is_finite())?;
        Some((ra, dec, mag))
    }
}

/// Star records keyed by identifier, in load order.
#[derive(Debug, Clone, Default)]
pub struct StarCatalog {
    entries: Vec<CatalogEntry>,
    index: HashMap<u32, usize>,
}

impl StarCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an entry. A repeated identifier keeps the first record.
    pub fn insert(&mut self, entry: CatalogEntry) -> bool {
        if self.index.contains_key(&entry.id) {
            warn!(id = entry.id, "duplicate catalog identifier, keeping first record");
            return false;
        }
        self.index.insert(entry.id, self.entries.len());
        self.entries.push(entry);
        true
    }

    pub fn get(&self, id: u32) -> Option<&CatalogEntry> {
        self.index.get(&id).map(|&i| &self.entries[i])
    }

    pub fn contains(&self, id: u32) -> bool {
        self.index.contains_key(&id)
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<CatalogEntry> for StarCatalog {
    fn from_iter<I: IntoIterator<Item = CatalogEntry>>(iter: I) -> Self {
        let mut catalog = Self::new();
        for entry in iter {
            catalog.insert(entry);
        }
        catalog
    }
}
