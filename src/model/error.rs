//! Error type for building the molecule description model.

use thiserror::Error;

/// Errors that can occur while constructing a [`SpeciesRegistry`](super::species::SpeciesRegistry).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// An atom was declared with a symbol absent from the element list.
    #[error("atom {atom} uses element '{symbol}' which is not in the element list")]
    UnknownElement {
        /// Index of the offending atom.
        atom: usize,
        /// The undeclared element symbol.
        symbol: String,
    },
}

impl Error {
    /// Creates an [`UnknownElement`](Error::UnknownElement) error.
    pub fn unknown_element(atom: usize, symbol: impl Into<String>) -> Self {
        Self::UnknownElement {
            atom,
            symbol: symbol.into(),
        }
    }
}
