//! Core data structures for molecule geometries.
//!
//! - [`species`] – element list and atom-to-element assignment.
//! - [`types`] – element ids, bond types, atom pairs and measured bonds.
//! - [`topology`] – bond types and atom pairs derived from a registry.
//! - [`molecule`] – the shared, read-only bundle of registry, topology and
//!   buffer usage.
//! - [`sample`] – one geometry with its derived distances and bonds.
//!
//! A [`Molecule`] is built once and shared through an `Arc`; every [`Sample`]
//! holds a handle to it, so samples built from different molecules never mix.
//!
//! [`Molecule`]: molecule::Molecule
//! [`Sample`]: sample::Sample

pub mod error;
pub mod molecule;
pub mod sample;
pub mod species;
pub mod topology;
pub mod types;
