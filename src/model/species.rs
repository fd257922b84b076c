use std::collections::HashMap;

use tracing::debug;

use super::error::Error;
use super::types::ElementId;

/// Element list and atom-to-element assignment of one molecule.
///
/// Element ids are positions in [`element_names`](Self::element_names). Atom
/// indices run `0..atom_count()` in declaration order, and each element keeps
/// the ascending list of its atom indices so that per-element and per-pair
/// loops never have to regroup atoms.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SpeciesRegistry {
    name: String,
    element_names: Vec<String>,
    name_to_id: HashMap<String, ElementId>,
    atom_elements: Vec<ElementId>,
    count_per_element: Vec<usize>,
    atoms_of_element: Vec<Vec<usize>>,
}

impl SpeciesRegistry {
    /// Builds the registry from the declared element symbols and the
    /// per-atom element symbols.
    ///
    /// Repeated element symbols are collapsed onto their first occurrence.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownElement`] if an atom symbol is not among
    /// `element_symbols`.
    pub fn new<E, A>(
        name: impl Into<String>,
        element_symbols: E,
        atom_symbols: A,
    ) -> Result<Self, Error>
    where
        E: IntoIterator,
        E::Item: AsRef<str>,
        A: IntoIterator,
        A::Item: AsRef<str>,
    {
        let mut element_names = Vec::new();
        let mut name_to_id = HashMap::new();

        for symbol in element_symbols {
            let symbol = symbol.as_ref();
            if !name_to_id.contains_key(symbol) {
                name_to_id.insert(symbol.to_string(), element_names.len());
                element_names.push(symbol.to_string());
            }
        }

        let mut atom_elements = Vec::new();
        let mut count_per_element = vec![0; element_names.len()];
        let mut atoms_of_element = vec![Vec::new(); element_names.len()];

        for (atom, symbol) in atom_symbols.into_iter().enumerate() {
            let symbol = symbol.as_ref();
            let id = *name_to_id
                .get(symbol)
                .ok_or_else(|| Error::unknown_element(atom, symbol))?;

            atom_elements.push(id);
            count_per_element[id] += 1;
            atoms_of_element[id].push(atom);
        }

        let registry = Self {
            name: name.into(),
            element_names,
            name_to_id,
            atom_elements,
            count_per_element,
            atoms_of_element,
        };
        registry.log_summary();

        Ok(registry)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn element_count(&self) -> usize {
        self.element_names.len()
    }

    pub fn element_names(&self) -> &[String] {
        &self.element_names
    }

    pub fn element_name(&self, id: ElementId) -> &str {
        &self.element_names[id]
    }

    pub fn element_id(&self, symbol: &str) -> Option<ElementId> {
        self.name_to_id.get(symbol).copied()
    }

    #[inline]
    pub fn atom_count(&self) -> usize {
        self.atom_elements.len()
    }

    pub fn atom_elements(&self) -> &[ElementId] {
        &self.atom_elements
    }

    pub fn atom_element(&self, atom: usize) -> ElementId {
        self.atom_elements[atom]
    }

    pub fn count_per_element(&self) -> &[usize] {
        &self.count_per_element
    }

    /// Ascending atom indices of element `id`.
    pub fn atoms_of_element(&self, id: ElementId) -> &[usize] {
        &self.atoms_of_element[id]
    }

    fn log_summary(&self) {
        debug!(name = %self.name, elements = ?self.element_names, "species registry built");
        for (id, symbol) in self.element_names.iter().enumerate() {
            debug!(
                "{} <-> {}: {} atom(s) {:?}",
                id, symbol, self.count_per_element[id], self.atoms_of_element[id]
            );
        }
        debug!(atom_count = self.atom_count(), atom_elements = ?self.atom_elements);
    }
}
