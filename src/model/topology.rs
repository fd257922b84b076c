use tracing::debug;

use super::species::SpeciesRegistry;
use super::types::{AtomPair, BondType};

/// Bond types of a molecule and the atom pairs realizing each of them.
///
/// The three sequences are index-aligned: `bond_types()[k]`, `bond_counts()[k]`
/// and `atom_pairs()[k]` describe the same type.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BondTopology {
    total_bonds: usize,
    bond_types: Vec<BondType>,
    bond_counts: Vec<usize>,
    atom_pairs: Vec<Vec<AtomPair>>,
}

impl BondTopology {
    /// Enumerates bond types in ascending element order.
    ///
    /// For each element `e` the homonuclear type `e-e` comes first, present
    /// only when `e` has more than one atom, followed by every cross type
    /// `e-e'` with `e' > e`. Cross types are emitted whatever their
    /// population, so a type may carry zero pairs.
    pub fn derive(registry: &SpeciesRegistry) -> Self {
        let n_atoms = registry.atom_count();
        let n_elem = registry.element_count();
        let counts = registry.count_per_element();

        let mut bond_types = Vec::new();
        let mut bond_counts = Vec::new();
        let mut atom_pairs = Vec::new();

        for ie in 0..n_elem {
            let atoms_i = registry.atoms_of_element(ie);

            if counts[ie] > 1 {
                let mut pairs = Vec::with_capacity(counts[ie] * (counts[ie] - 1) / 2);
                for (a, &ia) in atoms_i.iter().enumerate() {
                    for &ib in &atoms_i[a + 1..] {
                        pairs.push(AtomPair::new(ia, ib));
                    }
                }

                bond_types.push(BondType::new(ie, ie));
                bond_counts.push(counts[ie] * (counts[ie] - 1) / 2);
                atom_pairs.push(pairs);
            }

            for je in ie + 1..n_elem {
                let atoms_j = registry.atoms_of_element(je);

                let mut pairs = Vec::with_capacity(counts[ie] * counts[je]);
                for &ia in atoms_i {
                    for &jb in atoms_j {
                        pairs.push(AtomPair::new(ia, jb));
                    }
                }

                bond_types.push(BondType::new(ie, je));
                bond_counts.push(counts[ie] * counts[je]);
                atom_pairs.push(pairs);
            }
        }

        let topology = Self {
            total_bonds: n_atoms * n_atoms.saturating_sub(1) / 2,
            bond_types,
            bond_counts,
            atom_pairs,
        };
        topology.log_summary(registry);

        topology
    }

    /// Number of unordered atom pairs, N(N-1)/2.
    #[inline]
    pub fn total_bonds(&self) -> usize {
        self.total_bonds
    }

    #[inline]
    pub fn type_count(&self) -> usize {
        self.bond_types.len()
    }

    /// Sum of the per-type bond counts.
    pub fn enumerated_bonds(&self) -> usize {
        self.bond_counts.iter().sum()
    }

    pub fn bond_types(&self) -> &[BondType] {
        &self.bond_types
    }

    pub fn bond_counts(&self) -> &[usize] {
        &self.bond_counts
    }

    pub fn atom_pairs(&self) -> &[Vec<AtomPair>] {
        &self.atom_pairs
    }

    pub fn atom_pairs_of(&self, k: usize) -> &[AtomPair] {
        &self.atom_pairs[k]
    }

    pub fn position_of(&self, bond_type: BondType) -> Option<usize> {
        self.bond_types.iter().position(|t| *t == bond_type)
    }

    pub fn iter(&self) -> impl Iterator<Item = (BondType, usize, &[AtomPair])> + '_ {
        self.bond_types
            .iter()
            .zip(&self.bond_counts)
            .zip(&self.atom_pairs)
            .map(|((t, n), pairs)| (*t, *n, pairs.as_slice()))
    }

    fn log_summary(&self, registry: &SpeciesRegistry) {
        debug!(
            total_bonds = self.total_bonds,
            bond_types = self.type_count(),
            "bond topology derived"
        );
        for (t, n, pairs) in self.iter() {
            let pairs: Vec<String> = pairs.iter().map(|p| p.to_string()).collect();
            debug!("{}: {} bond(s) {}", t.label(registry), n, pairs.join(" "));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(list: &[(usize, usize)]) -> Vec<AtomPair> {
        list.iter().map(|&(i, j)| AtomPair::new(i, j)).collect()
    }

    #[test]
    fn water_has_hh_and_oh_types_only() {
        let reg = SpeciesRegistry::new("water", ["O", "H"], ["O", "H", "H"]).unwrap();
        let topo = BondTopology::derive(&reg);

        assert_eq!(topo.bond_types(), &[BondType::new(0, 1), BondType::new(1, 1)]);
        assert_eq!(topo.bond_counts(), &[2, 1]);
        assert_eq!(topo.atom_pairs_of(0), pairs(&[(0, 1), (0, 2)]).as_slice());
        assert_eq!(topo.atom_pairs_of(1), pairs(&[(1, 2)]).as_slice());
        assert_eq!(topo.position_of(BondType::new(0, 0)), None);
        assert_eq!(topo.position_of(BondType::new(1, 0)), Some(0));
        assert_eq!(topo.total_bonds(), 3);
        assert_eq!(topo.enumerated_bonds(), 3);
    }

    #[test]
    fn type_labels_follow_element_order() {
        let reg = SpeciesRegistry::new("water", ["O", "H"], ["O", "H", "H"]).unwrap();
        let topo = BondTopology::derive(&reg);
        let labels: Vec<String> = topo.bond_types().iter().map(|t| t.label(&reg)).collect();
        assert_eq!(labels, vec!["O-H", "H-H"]);
    }

    #[test]
    fn three_element_enumeration_order_and_counts() {
        // C C H H H O
        let reg =
            SpeciesRegistry::new("c2h3o", ["C", "H", "O"], ["C", "H", "C", "H", "O", "H"]).unwrap();
        let topo = BondTopology::derive(&reg);

        let expected_types = vec![
            BondType::new(0, 0),
            BondType::new(0, 1),
            BondType::new(0, 2),
            BondType::new(1, 1),
            BondType::new(1, 2),
        ];
        assert_eq!(topo.bond_types(), expected_types.as_slice());
        assert_eq!(topo.bond_counts(), &[1, 6, 2, 3, 3]);

        assert_eq!(topo.atom_pairs_of(0), pairs(&[(0, 2)]).as_slice());
        assert_eq!(
            topo.atom_pairs_of(1),
            pairs(&[(0, 1), (0, 3), (0, 5), (2, 1), (2, 3), (2, 5)]).as_slice()
        );
        assert_eq!(topo.atom_pairs_of(2), pairs(&[(0, 4), (2, 4)]).as_slice());
        assert_eq!(
            topo.atom_pairs_of(3),
            pairs(&[(1, 3), (1, 5), (3, 5)]).as_slice()
        );
        assert_eq!(
            topo.atom_pairs_of(4),
            pairs(&[(1, 4), (3, 4), (5, 4)]).as_slice()
        );

        for (_, n, p) in topo.iter() {
            assert_eq!(n, p.len());
        }
        assert_eq!(topo.enumerated_bonds(), topo.total_bonds());
    }

    #[test]
    fn counts_match_combinatorial_formula() {
        let reg = SpeciesRegistry::new(
            "ch4o",
            ["C", "H", "O"],
            ["C", "H", "H", "H", "H", "O"],
        )
        .unwrap();
        let topo = BondTopology::derive(&reg);
        let n = reg.count_per_element();

        let mut expected = 0;
        for e in 0..reg.element_count() {
            if n[e] > 1 {
                expected += n[e] * (n[e] - 1) / 2;
            }
            for f in e + 1..reg.element_count() {
                expected += n[e] * n[f];
            }
        }
        assert_eq!(topo.enumerated_bonds(), expected);
        assert_eq!(topo.type_count(), 4);
    }

    #[test]
    fn unpopulated_element_still_yields_cross_types() {
        let reg = SpeciesRegistry::new("co", ["C", "N", "O"], ["C", "O"]).unwrap();
        let topo = BondTopology::derive(&reg);

        assert_eq!(
            topo.bond_types(),
            &[BondType::new(0, 1), BondType::new(0, 2), BondType::new(1, 2)]
        );
        assert_eq!(topo.bond_counts(), &[0, 1, 0]);
        assert!(topo.atom_pairs_of(0).is_empty());
        assert_eq!(topo.atom_pairs_of(1), pairs(&[(0, 1)]).as_slice());
    }

    #[test]
    fn derive_is_idempotent() {
        let reg = SpeciesRegistry::new("water", ["O", "H"], ["O", "H", "H"]).unwrap();
        assert_eq!(BondTopology::derive(&reg), BondTopology::derive(&reg));
    }

    #[test]
    fn empty_registry_has_no_types() {
        let reg = SpeciesRegistry::default();
        let topo = BondTopology::derive(&reg);
        assert_eq!(topo.type_count(), 0);
        assert_eq!(topo.total_bonds(), 0);
    }
}
