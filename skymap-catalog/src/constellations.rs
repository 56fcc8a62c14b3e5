//! Constellation figures as edge lists of star identifiers.
//!
//! The Stellarium `constellationship.fab` format has one figure per line:
//!
//! ```text
//! Boo 9 69673 71075 71075 71053 ...
//! ```
//!
//! a code, the number of line segments, then that many pairs of HIP numbers.
//! A code listed twice contributes the segments of both lines to one figure.

use crate::errors::{CatalogError, CatalogResult};
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{info, warn};

pub const CONSTELLATIONSHIP_URL: &str =
    "https://raw.githubusercontent.com/Stellarium/stellarium/master/skycultures/modern/constellationship.fab";
pub const CONSTELLATIONSHIP_FILENAME: &str = "constellationship.fab";

/// A named constellation figure.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConstellationDef {
    pub code: String,
    pub edges: Vec<(u32, u32)>,
}

impl ConstellationDef {
    pub fn new(code: impl Into<String>, edges: Vec<(u32, u32)>) -> Self {
        Self {
            code: code.into(),
            edges,
        }
    }
}

pub fn load_constellationship(path: &Path) -> CatalogResult<Vec<ConstellationDef>> {
    let file = File::open(path)?;
    let defs = parse_constellationship(BufReader::new(file))?;
    info!(path = %path.display(), constellations = defs.len(), "loaded constellation figures");
    Ok(defs)
}

/// Parses `constellationship.fab` content, keeping figures in file order.
pub fn parse_constellationship<R: BufRead>(reader: R) -> CatalogResult<Vec<ConstellationDef>> {
    let mut defs: Vec<ConstellationDef> = Vec::new();
    let mut positions: HashMap<String, usize> = HashMap::new();

    for (line_idx, line) in reader.lines().enumerate() {
        let line = line?;
        let line_num = line_idx + 1;
        let content = line.trim();
        if content.is_empty() || content.starts_with('#') {
            continue;
        }

        let mut tokens = content.split_whitespace();
        let Some(code) = tokens.next() else {
            continue;
        };

        let declared = tokens
            .next()
            .ok_or_else(|| CatalogError::parse(line_num, format!("'{}' has no segment count", code)))?;
        let declared: usize = declared.parse().map_err(|_| {
            CatalogError::parse(line_num, format!("invalid segment count '{}'", declared))
        })?;

        let ids = tokens
            .map(|t| {
                t.parse::<u32>()
                    .map_err(|_| CatalogError::parse(line_num, format!("invalid star id '{}'", t)))
            })
            .collect::<CatalogResult<Vec<u32>>>()?;

        if ids.len() % 2 != 0 {
            return Err(CatalogError::parse(
                line_num,
                format!("'{}' has an unpaired star id", code),
            ));
        }

        let edges: Vec<(u32, u32)> = ids.chunks_exact(2).map(|pair| (pair[0], pair[1])).collect();
        if edges.len() != declared {
            warn!(
                line = line_num,
                code,
                declared,
                found = edges.len(),
                "segment count does not match listed pairs"
            );
        }

        match positions.get(code) {
            Some(&pos) => defs[pos].edges.extend(edges),
            None => {
                positions.insert(code.to_string(), defs.len());
                defs.push(ConstellationDef::new(code, edges));
            }
        }
    }

    Ok(defs)
}
