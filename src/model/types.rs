use std::fmt;

use super::species::SpeciesRegistry;

/// Index of an element in [`SpeciesRegistry::element_names`].
pub type ElementId = usize;

/// Unordered pair of element ids.
///
/// The pair is stored canonically with `i <= j`, so `BondType::new(1, 0)` and
/// `BondType::new(0, 1)` compare equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BondType {
    pub i: ElementId,
    pub j: ElementId,
}

impl BondType {
    pub fn new(e1: ElementId, e2: ElementId) -> Self {
        if e1 <= e2 {
            Self { i: e1, j: e2 }
        } else {
            Self { i: e2, j: e1 }
        }
    }

    #[inline]
    pub fn is_homonuclear(&self) -> bool {
        self.i == self.j
    }

    /// Renders the type as `"<sym_i>-<sym_j>"`, e.g. `"O-H"`.
    pub fn label(&self, registry: &SpeciesRegistry) -> String {
        format!(
            "{}-{}",
            registry.element_name(self.i),
            registry.element_name(self.j)
        )
    }
}

/// Pair of atom indices realizing one bond of a [`BondType`].
///
/// Unlike [`BondType`] the order is kept as generated by the topology.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AtomPair {
    pub i: usize,
    pub j: usize,
}

impl AtomPair {
    pub fn new(i: usize, j: usize) -> Self {
        Self { i, j }
    }
}

impl fmt::Display for AtomPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.i, self.j)
    }
}

/// A measured bond: its length and the two atoms it joins.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Bond {
    pub length: f64,
    pub i: usize,
    pub j: usize,
}

impl Bond {
    pub fn new(length: f64, i: usize, j: usize) -> Self {
        Self { length, i, j }
    }
}

impl fmt::Display for Bond {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, {}", self.i, self.j, self.length)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bond_type_is_canonical() {
        let a = BondType::new(2, 0);
        let b = BondType::new(0, 2);
        assert_eq!(a, b);
        assert_eq!(a.i, 0);
        assert_eq!(a.j, 2);
        assert!(!a.is_homonuclear());
        assert!(BondType::new(1, 1).is_homonuclear());
    }

    #[test]
    fn bond_type_inequality_compares_canonical_pair() {
        assert_ne!(BondType::new(0, 1), BondType::new(1, 1));
        assert_ne!(BondType::new(0, 1), BondType::new(0, 2));
    }

    #[test]
    fn bond_type_label_uses_registry_symbols() {
        let registry = SpeciesRegistry::new("water", ["O", "H"], ["O", "H", "H"]).unwrap();
        assert_eq!(BondType::new(1, 0).label(&registry), "O-H");
        assert_eq!(BondType::new(1, 1).label(&registry), "H-H");
    }

    #[test]
    fn atom_pair_keeps_generation_order() {
        let p = AtomPair::new(3, 1);
        assert_eq!((p.i, p.j), (3, 1));
        assert_eq!(p.to_string(), "(3, 1)");
    }

    #[test]
    fn bond_equality_covers_atoms() {
        assert_eq!(Bond::new(1.0, 0, 1), Bond::new(1.0, 0, 1));
        assert_ne!(Bond::new(1.0, 0, 1), Bond::new(1.0, 5, 6));
        assert_ne!(Bond::new(1.0, 0, 1), Bond::new(1.1, 0, 1));
    }

    #[test]
    fn bond_display_matches_index_then_length() {
        assert_eq!(Bond::new(1.25, 0, 2).to_string(), "0, 2, 1.25");
    }
}
