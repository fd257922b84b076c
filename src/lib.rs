//! Molecule species bookkeeping and sample geometry in pure Rust.
//!
//! A molecule is described once by its element list and the element of each
//! atom. From that description the crate derives the bond topology (every
//! unordered pair of element types and the atom pairs realizing it), then
//! reads geometries as [`Sample`]s: coordinates, an optional energy, the
//! pairwise-distance vector and per-type bond lengths.
//!
//! # Features
//!
//! - **Species registry** – element ids, per-element atom counts and atom
//!   lists, built from a key/value or TOML description
//! - **Bond topology** – bond types in a fixed order with their atom pairs
//! - **Geometry** – pairwise distances in `(i, j)`, `i < j` order, a distance
//!   metric between samples, and per-type bond lengths
//! - **Lossless records** – records are written back byte-for-byte as read
//!
//! # Quick Start
//!
//! ```
//! use std::io::Cursor;
//! use molgeom::io::Description;
//! use molgeom::{Sample, Usage};
//!
//! let description = Description::read(Cursor::new(
//!     "molecule = water\nelem_num = 2\nelem_list = (O H)\natom_num = 3\natom_list = (O H H)\n",
//! ))?;
//! let molecule = description.into_molecule(Usage::default().with_pairwise_distances())?;
//!
//! // O-H, then H-H
//! assert_eq!(molecule.topology().bond_counts(), &[2, 1]);
//!
//! let mut sample = Sample::new(molecule);
//! let mut records = Cursor::new("3\n-76.0\nO 0 0 0\nH 1 0 0\nH 0 1 0\n");
//! assert!(sample.load_record(&mut records)?);
//! assert_eq!(sample.energy(), Some(-76.0));
//!
//! sample.compute_distances();
//! assert_eq!(sample.distances().len(), 3);
//! assert!((sample.distances()[2] - 2f64.sqrt()).abs() < 1e-12);
//!
//! let mut out = Vec::new();
//! sample.write_record(&mut out)?;
//! assert_eq!(out, b"3\n-76.0\nO 0 0 0\nH 1 0 0\nH 0 1 0\n");
//! # Ok::<(), molgeom::io::Error>(())
//! ```
//!
//! # Module Organization
//!
//! - [`io`] – descriptions, records and coordinate blocks
//!
//! # Data Types
//!
//! - [`SpeciesRegistry`] – element list and atom-to-element mapping
//! - [`BondTopology`] – bond types, counts and atom pairs
//! - [`Molecule`] – registry, topology and [`Usage`] shared by samples
//! - [`Sample`] – one geometry with derived distances and bonds
//! - [`BondType`], [`AtomPair`], [`Bond`] – topology and measurement values

mod model;

pub mod io;

pub use model::error::Error as ModelError;
pub use model::molecule::{Molecule, Usage};
pub use model::sample::Sample;
pub use model::species::SpeciesRegistry;
pub use model::topology::BondTopology;
pub use model::types::{AtomPair, Bond, BondType, ElementId};
