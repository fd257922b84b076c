//! Molecule descriptions: a name, the element list and the per-atom elements.
//!
//! Two text forms are accepted. The key/value form is line oriented:
//!
//! ```text
//! # water
//! molecule = water
//! elem_num = 2
//! elem_list = (O H)
//! atom_num = 3
//! atom_list = ("O" "H" "H")
//! ```
//!
//! The TOML form carries the same data:
//!
//! ```toml
//! molecule = "water"
//! elements = ["O", "H"]
//! atoms = ["O", "H", "H"]
//! ```

use std::io::{BufRead, Read};
use std::sync::Arc;

use serde::Deserialize;

use super::{Format, error::Error};
use crate::model::molecule::{Molecule, Usage};
use crate::model::species::SpeciesRegistry;

mod reader;

/// Parsed molecule description, not yet validated against itself.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Description {
    #[serde(default)]
    pub molecule: String,
    pub elements: Vec<String>,
    pub atoms: Vec<String>,
}

impl Description {
    /// Reads the key/value form.
    pub fn read<R: BufRead>(reader: R) -> Result<Self, Error> {
        reader::read(reader)
    }

    /// Reads the TOML form.
    pub fn read_toml<R: Read>(mut reader: R) -> Result<Self, Error> {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;
        Self::from_toml_str(&text)
    }

    pub fn from_toml_str(text: &str) -> Result<Self, Error> {
        Ok(toml::from_str(text)?)
    }

    /// Reads either form, as selected by `format`.
    pub fn read_as<R: BufRead>(reader: R, format: Format) -> Result<Self, Error> {
        match format {
            Format::Description => Self::read(reader),
            Format::DescriptionToml => Self::read_toml(reader),
            other => Err(Error::parse(
                other,
                0,
                "not a molecule description format",
            )),
        }
    }

    /// Resolves the atom symbols against the element list.
    pub fn to_registry(&self) -> Result<SpeciesRegistry, Error> {
        Ok(SpeciesRegistry::new(
            self.molecule.as_str(),
            &self.elements,
            &self.atoms,
        )?)
    }

    pub fn into_molecule(self, usage: Usage) -> Result<Arc<Molecule>, Error> {
        Ok(Molecule::new(self.to_registry()?, usage))
    }
}
