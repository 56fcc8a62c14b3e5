//! Hipparcos main catalog (ESA 1997, CDS I/239) reader.
//!
//! `hip_main.dat` is pipe-delimited with 78 fields per row. Only the
//! astrometry and the visual magnitude are kept:
//!
//! | Field | Label | Unit |
//! |-------|-------|------|
//! | 1 | HIP | identifier |
//! | 5 | Vmag | mag |
//! | 8 | RAdeg | deg, ICRS, J1991.25 |
//! | 9 | DEdeg | deg, ICRS, J1991.25 |
//! | 11 | Plx | mas |
//! | 12 | pmRA | mas/yr, × cos(Dec) |
//! | 13 | pmDE | mas/yr |
//!
//! About 260 rows carry no astrometric solution; they load with `None`
//! coordinates.

use crate::errors::{CatalogError, CatalogResult};
use crate::star::{CatalogEntry, StarCatalog};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{debug, info};

pub const HIPPARCOS_URL: &str = "https://cdsarc.cds.unistra.fr/ftp/cats/I/239/hip_main.dat";
pub const HIPPARCOS_FILENAME: &str = "hip_main.dat";

const FIELD_HIP: usize = 1;
const FIELD_VMAG: usize = 5;
const FIELD_RA_DEG: usize = 8;
const FIELD_DEC_DEG: usize = 9;
const FIELD_PARALLAX: usize = 11;
const FIELD_PM_RA: usize = 12;
const FIELD_PM_DEC: usize = 13;
const MIN_FIELDS: usize = FIELD_PM_DEC + 1;

pub fn load_hipparcos(path: &Path) -> CatalogResult<StarCatalog> {
    let file = File::open(path)?;
    let catalog = parse_hip_main(BufReader::new(file))?;
    info!(path = %path.display(), stars = catalog.len(), "loaded Hipparcos catalog");
    Ok(catalog)
}

pub fn parse_hip_main<R: BufRead>(reader: R) -> CatalogResult<StarCatalog> {
    let mut catalog = StarCatalog::new();
    for (line_idx, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let entry = parse_hip_line(&line, line_idx + 1)?;
        catalog.insert(entry);
    }
    Ok(catalog)
}

fn parse_hip_line(line: &str, line_num: usize) -> CatalogResult<CatalogEntry> {
    let fields: Vec<&str> = line.split('|').collect();
    if fields.len() < MIN_FIELDS {
        return Err(CatalogError::parse(
            line_num,
            format!("expected at least {} fields, found {}", MIN_FIELDS, fields.len()),
        ));
    }

    let hip_str = fields[FIELD_HIP].trim();
    let id: u32 = hip_str
        .parse()
        .map_err(|_| CatalogError::parse(line_num, format!("invalid HIP number '{}'", hip_str)))?;

    let entry = CatalogEntry {
        id,
        ra_deg: optional_f64(fields[FIELD_RA_DEG], id, "RAdeg"),
        dec_deg: optional_f64(fields[FIELD_DEC_DEG], id, "DEdeg"),
        magnitude: optional_f64(fields[FIELD_VMAG], id, "Vmag"),
        parallax_mas: optional_f64(fields[FIELD_PARALLAX], id, "Plx"),
        pm_ra_mas_yr: optional_f64(fields[FIELD_PM_RA], id, "pmRA"),
        pm_dec_mas_yr: optional_f64(fields[FIELD_PM_DEC], id, "pmDE"),
    };
    Ok(entry)
}

fn optional_f64(field: &str, id: u32, label: &str) -> Option<f64> {
    let trimmed = field.trim();
    if trimmed.is_empty() {
        return None;
    }
    match trimmed.parse::<f64>() {
        Ok(v) => Some(v),
        Err(_) => {
            debug!(hip = id, field = label, value = trimmed, "unreadable catalog field");
            None
        }
    }
}
