//! Unique star sets of constellation figures.

use std::collections::BTreeSet;

use skymap_catalog::ConstellationDef;

/// The distinct stars of one figure, ascending by id, plus its edges.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstellationStars {
    pub code: String,
    pub star_ids: Vec<u32>,
    pub edges: Vec<(u32, u32)>,
}

impl ConstellationStars {
    pub fn from_def(def: &ConstellationDef) -> Self {
        let ids: BTreeSet<u32> = def.edges.iter().flat_map(|&(a, b)| [a, b]).collect();
        Self {
            code: def.code.clone(),
            star_ids: ids.into_iter().collect(),
            edges: def.edges.clone(),
        }
    }

    pub fn len(&self) -> usize {
        self.star_ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.star_ids.is_empty()
    }

    /// Edges rewritten as positions in [`star_ids`](Self::star_ids).
    pub fn edge_indices(&self) -> Vec<(usize, usize)> {
        self.edges
            .iter()
            .filter_map(|&(a, b)| Some((self.index_of(a)?, self.index_of(b)?)))
            .collect()
    }

    fn index_of(&self, id: u32) -> Option<usize> {
        self.star_ids.binary_search(&id).ok()
    }
}

/// Reduces figure definitions to star sets, one per definition, in input order.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConstellationAssembler;

impl ConstellationAssembler {
    pub fn assemble(&self, defs: &[ConstellationDef]) -> Vec<ConstellationStars> {
        defs.iter().map(ConstellationStars::from_def).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shared_endpoints_counted_once() {
        let def = ConstellationDef::new("Tri", vec![(5, 6), (6, 7), (5, 7)]);
        let stars = ConstellationStars::from_def(&def);
        assert_eq!(stars.star_ids, vec![5, 6, 7]);
        assert_eq!(stars.len(), 3);
    }

    #[test]
    fn ids_ascending_regardless_of_edge_order() {
        let def = ConstellationDef::new("Boo", vec![(71075, 69673), (69673, 67927), (72105, 71075)]);
        let stars = ConstellationStars::from_def(&def);
        assert_eq!(stars.star_ids, vec![67927, 69673, 71075, 72105]);
    }

    #[test]
    fn edge_indices_point_into_sorted_ids() {
        let def = ConstellationDef::new("Ori", vec![(26727, 26311), (26311, 25930)]);
        let stars = ConstellationStars::from_def(&def);
        assert_eq!(stars.star_ids, vec![25930, 26311, 26727]);
        assert_eq!(stars.edge_indices(), vec![(2, 1), (1, 0)]);
    }

    #[test]
    fn no_edges_gives_empty_set() {
        let stars = ConstellationStars::from_def(&ConstellationDef::new("Nil", vec![]));
        assert!(stars.is_empty());
        assert!(stars.edge_indices().is_empty());
    }

    #[test]
    fn assembler_keeps_definition_order() {
        let defs = vec![
            ConstellationDef::new("UMa", vec![(54061, 53910)]),
            ConstellationDef::new("And", vec![(677, 3092)]),
            ConstellationDef::new("Peg", vec![(677, 1067)]),
        ];
        let assembled = ConstellationAssembler.assemble(&defs);
        let codes: Vec<&str> = assembled.iter().map(|c| c.code.as_str()).collect();
        assert_eq!(codes, ["UMa", "And", "Peg"]);
        // Alpheratz belongs to two figures
        assert!(assembled[1].star_ids.contains(&677));
        assert!(assembled[2].star_ids.contains(&677));
    }
}
