use std::sync::Arc;

use super::species::SpeciesRegistry;
use super::topology::BondTopology;

/// Which derived per-sample buffers are allocated up front.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Usage {
    /// Allocate the N(N-1)/2 pairwise-distance vector.
    pub pairwise_distances: bool,
    /// Allocate one bond-length list per bond type.
    pub bonds: bool,
}

impl Usage {
    pub fn all() -> Self {
        Self {
            pairwise_distances: true,
            bonds: true,
        }
    }

    pub fn with_pairwise_distances(mut self) -> Self {
        self.pairwise_distances = true;
        self
    }

    pub fn with_bonds(mut self) -> Self {
        self.bonds = true;
        self
    }
}

/// Shared, read-only description of a molecule.
///
/// Bundles the species registry, the bond topology derived from it and the
/// buffer [`Usage`] that every [`Sample`](super::sample::Sample) built from
/// it follows. Samples hold an `Arc<Molecule>`, so a molecule cannot change
/// under existing samples.
#[derive(Debug, Clone, PartialEq)]
pub struct Molecule {
    registry: SpeciesRegistry,
    topology: BondTopology,
    usage: Usage,
}

impl Molecule {
    pub fn new(registry: SpeciesRegistry, usage: Usage) -> Arc<Self> {
        let topology = BondTopology::derive(&registry);
        Arc::new(Self {
            registry,
            topology,
            usage,
        })
    }

    pub fn registry(&self) -> &SpeciesRegistry {
        &self.registry
    }

    pub fn topology(&self) -> &BondTopology {
        &self.topology
    }

    pub fn usage(&self) -> Usage {
        self.usage
    }

    pub fn name(&self) -> &str {
        self.registry.name()
    }

    #[inline]
    pub fn atom_count(&self) -> usize {
        self.registry.atom_count()
    }

    /// Length of the pairwise-distance vector, N(N-1)/2.
    #[inline]
    pub fn pair_count(&self) -> usize {
        self.topology.total_bonds()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_topology_from_registry() {
        let reg = SpeciesRegistry::new("water", ["O", "H"], ["O", "H", "H"]).unwrap();
        let mol = Molecule::new(reg.clone(), Usage::default());

        assert_eq!(mol.name(), "water");
        assert_eq!(mol.atom_count(), 3);
        assert_eq!(mol.pair_count(), 3);
        assert_eq!(mol.topology(), &BondTopology::derive(&reg));
        assert_eq!(mol.usage(), Usage::default());
    }

    #[test]
    fn usage_builders_set_flags() {
        let usage = Usage::default().with_bonds();
        assert!(usage.bonds);
        assert!(!usage.pairwise_distances);
        assert_eq!(usage.with_pairwise_distances(), Usage::all());
    }

    #[test]
    fn molecule_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Arc<Molecule>>();
    }
}
