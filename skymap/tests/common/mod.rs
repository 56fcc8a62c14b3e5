#![allow(dead_code)]

use skymap_catalog::{CatalogEntry, ConstellationDef, StarCatalog};

/// (HIP, RA°, Dec°, Vmag, parallax mas, pmRA mas/yr, pmDE mas/yr) at J1991.25.
pub const STARS: &[(u32, f64, f64, f64, f64, f64, f64)] = &[
    // Boötes
    (67927, 208.67116, 18.39777, 2.68, 88.17, -60.95, -356.29),
    (69673, 213.91811, 19.18727, -0.05, 88.85, -1093.45, -1999.40),
    (71053, 217.95745, 30.37143, 3.58, 20.02, -100.05, 119.74),
    (71075, 218.01946, 38.30825, 3.04, 38.29, -115.72, 151.87),
    (72105, 221.24674, 27.07422, 2.35, 15.55, -50.65, 20.00),
    (73555, 225.48651, 40.39057, 3.49, 14.91, -40.15, -28.86),
    (74666, 228.87568, 33.31483, 3.46, 27.94, 84.57, -113.81),
    // Orion
    (24436, 78.63447, -8.20164, 0.18, 4.22, 1.87, -0.56),
    (25930, 83.00167, -0.29909, 2.25, 3.56, 1.67, 0.56),
    (26311, 84.05339, -1.20192, 1.69, 2.43, 1.49, -1.06),
    (26727, 85.18969, -1.94257, 1.74, 3.99, 3.99, 2.54),
    (27989, 88.79294, 7.40706, 0.45, 7.63, 27.33, 10.86),
    // Ursa Minor
    (11767, 37.94614, 89.26411, 2.02, 7.56, 44.22, -11.74),
    (85822, 263.05413, 86.58646, 4.35, 17.92, 9.16, 55.94),
];

/// Catalog row without astrometry, referenced by the "Gap" figure.
pub const GAP_STAR: u32 = 55203;
/// Referenced by a figure but absent from the catalog.
pub const UNKNOWN_STAR: u32 = 999_999;

pub fn catalog() -> StarCatalog {
    let mut catalog: StarCatalog = STARS
        .iter()
        .map(|&(id, ra, dec, v, plx, pmra, pmde)| {
            CatalogEntry::new(id, ra, dec, v).with_astrometry(plx, pmra, pmde)
        })
        .collect();
    catalog.insert(CatalogEntry {
        id: GAP_STAR,
        ra_deg: None,
        dec_deg: None,
        magnitude: Some(4.33),
        parallax_mas: None,
        pm_ra_mas_yr: None,
        pm_dec_mas_yr: None,
    });
    catalog
}

pub const FAB: &str = "\
Ori 4 27989 26727 26727 24436 26727 26311 26311 25930
Boo 7 69673 72105 72105 74666 74666 73555 73555 71075 71075 71053 71053 69673 69673 67927
UMi 1 11767 85822
Gap 2 55203 999999 999999 69673
Nil 0
";

pub fn constellations() -> Vec<ConstellationDef> {
    skymap_catalog::parse_constellationship(std::io::Cursor::new(FAB)).unwrap()
}

/// Renders the fixture stars as `hip_main.dat` rows.
pub fn hip_main() -> String {
    let mut out = String::new();
    for &(id, ra, dec, v, plx, pmra, pmde) in STARS {
        out.push_str(&format!(
            "H|{:>12}| |00 00 00.00|+00 00 00.0|{:>5.2}| |H|{:>12.8}|{:>+12.8}| |{:>7.2}|{:>8.2}|{:>8.2}| 0.74| 0.50\n",
            id, v, ra, dec, plx, pmra, pmde
        ));
    }
    out.push_str(&format!(
        "H|{:>12}| |11 18 10.90|+31 31 44.9| 4.33| |H|            |            | |       |        |        |     |     \n",
        GAP_STAR
    ));
    out
}
