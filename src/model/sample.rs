use std::io::{BufRead, Write};
use std::sync::Arc;

use nalgebra::{DVector, Matrix3xX, MatrixViewMut3xX, Vector3};

use super::molecule::Molecule;
use super::types::Bond;
use crate::io::error::Error;
use crate::io::record::{self, Record};
use crate::io::{TokenReader, coords};

/// One geometry of a [`Molecule`], with the raw text it was read from.
///
/// Coordinates are stored column-wise, column `i` being atom `i`. The raw
/// energy and atom lines are kept exactly as read so that
/// [`write_record`](Self::write_record) reproduces the input regardless of
/// later coordinate edits.
#[derive(Debug, Clone)]
pub struct Sample {
    molecule: Arc<Molecule>,
    coordinates: Matrix3xX<f64>,
    energy: Option<f64>,
    raw_energy_line: String,
    raw_atom_lines: Vec<String>,
    distances: DVector<f64>,
    bonds: Vec<Vec<Bond>>,
}

impl Sample {
    /// Creates a zeroed sample, allocating the buffers the molecule's
    /// [`Usage`](super::molecule::Usage) asks for.
    pub fn new(molecule: Arc<Molecule>) -> Self {
        let usage = molecule.usage();
        let atom_count = molecule.atom_count();

        let distances = if usage.pairwise_distances {
            DVector::zeros(molecule.pair_count())
        } else {
            DVector::zeros(0)
        };

        let bonds = if usage.bonds {
            empty_bonds(&molecule)
        } else {
            Vec::new()
        };

        Self {
            coordinates: Matrix3xX::zeros(atom_count),
            energy: None,
            raw_energy_line: String::new(),
            raw_atom_lines: Vec::new(),
            distances,
            bonds,
            molecule,
        }
    }

    pub fn molecule(&self) -> &Arc<Molecule> {
        &self.molecule
    }

    pub fn coordinates(&self) -> &Matrix3xX<f64> {
        &self.coordinates
    }

    /// Mutable view of the coordinates, one column per atom.
    ///
    /// The view has the molecule's atom count as width and cannot be resized.
    /// Derived distances and bonds are not refreshed.
    pub fn coordinates_mut(&mut self) -> MatrixViewMut3xX<'_, f64> {
        let n = self.coordinates.ncols();
        self.coordinates.columns_mut(0, n)
    }

    /// Moves atom `atom` to `position`.
    ///
    /// # Panics
    ///
    /// Panics if `atom` is not an atom index of the molecule.
    pub fn set_position(&mut self, atom: usize, position: Vector3<f64>) {
        self.coordinates.set_column(atom, &position);
    }

    pub fn position(&self, atom: usize) -> Vector3<f64> {
        self.coordinates.column(atom).into_owned()
    }

    pub fn energy(&self) -> Option<f64> {
        self.energy
    }

    pub fn set_energy(&mut self, energy: Option<f64>) {
        self.energy = energy;
    }

    /// Pairwise distances in `(0,1), (0,2), ..., (1,2), ...` order.
    pub fn distances(&self) -> &DVector<f64> {
        &self.distances
    }

    /// Bond lengths, one list per bond type of the molecule's topology.
    pub fn bonds(&self) -> &[Vec<Bond>] {
        &self.bonds
    }

    pub fn raw_energy_line(&self) -> &str {
        &self.raw_energy_line
    }

    pub fn raw_atom_lines(&self) -> &[String] {
        &self.raw_atom_lines
    }

    /// Reads an unlabelled coordinate block: a label and three reals per atom.
    pub fn load_coordinates<R: BufRead>(
        &mut self,
        tokens: &mut TokenReader<R>,
    ) -> Result<(), Error> {
        coords::read_block(tokens, &mut self.coordinates)
    }

    /// Reads one real as the energy.
    ///
    /// Returns `Ok(false)` and leaves the energy untouched at end of input or
    /// when the next token is not a number.
    pub fn load_energy<R: BufRead>(
        &mut self,
        tokens: &mut TokenReader<R>,
    ) -> Result<bool, Error> {
        match coords::read_energy(tokens)? {
            Some(energy) => {
                self.energy = Some(energy);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Reads the next record, returning `Ok(false)` once the stream is exhausted.
    ///
    /// Line numbers in errors count from the current reader position. Use
    /// [`RecordReader`](crate::io::record::RecordReader) to get absolute line
    /// numbers over a stream of records.
    pub fn load_record<R: BufRead>(&mut self, reader: &mut R) -> Result<bool, Error> {
        match record::read(reader, self.molecule.atom_count(), 1)? {
            Some(rec) => {
                self.apply_record(rec);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    pub(crate) fn apply_record(&mut self, record: Record) {
        self.coordinates = record.coordinates;
        self.energy = record.energy;
        self.raw_energy_line = record.energy_line;
        self.raw_atom_lines = record.atom_lines;
    }

    /// Writes the record exactly as it was read.
    pub fn write_record<W: Write>(&self, writer: W) -> Result<(), Error> {
        record::write(
            writer,
            self.molecule.atom_count(),
            &self.raw_energy_line,
            &self.raw_atom_lines,
        )
    }

    /// Writes the current coordinates as `<element> <x> <y> <z>` lines.
    pub fn write_coordinates<W: Write>(&self, writer: W) -> Result<(), Error> {
        coords::write_block(writer, self.molecule.registry(), &self.coordinates)
    }

    pub fn compute_distances(&mut self) {
        let pairs = self.molecule.pair_count();
        if self.distances.len() != pairs {
            self.distances = DVector::zeros(pairs);
        }
        fill_distances(
            &self.coordinates,
            self.molecule.atom_count(),
            self.distances.as_mut_slice(),
        );
    }

    /// Same as [`compute_distances`](Self::compute_distances) into `out`.
    ///
    /// # Panics
    ///
    /// Panics if `out.len()` is not `N(N-1)/2`.
    pub fn compute_distances_into(&self, out: &mut [f64]) {
        assert_eq!(
            out.len(),
            self.molecule.pair_count(),
            "distance buffer length must be N(N-1)/2"
        );
        fill_distances(&self.coordinates, self.molecule.atom_count(), out);
    }

    /// Euclidean norm of the difference of the two distance vectors.
    ///
    /// # Panics
    ///
    /// Panics if the distance vectors differ in length, e.g. when one of them
    /// was never computed.
    pub fn distance_to(&self, other: &Sample) -> f64 {
        assert_eq!(
            self.distances.len(),
            other.distances.len(),
            "distance vectors must have equal length"
        );
        (&self.distances - &other.distances).norm()
    }

    /// Fills each bond list from the topology pairs and current coordinates.
    pub fn compute_bonds(&mut self) {
        if self.bonds.len() != self.molecule.topology().type_count() {
            self.bonds = empty_bonds(&self.molecule);
        }

        let topology = self.molecule.topology();
        for (list, pairs) in self.bonds.iter_mut().zip(topology.atom_pairs()) {
            list.clear();
            list.extend(pairs.iter().map(|p| {
                let d = self.coordinates.column(p.i) - self.coordinates.column(p.j);
                Bond::new(d.norm(), p.i, p.j)
            }));
        }
    }

    /// Sorts every bond list by ascending length.
    pub fn sort_bonds(&mut self) {
        for list in &mut self.bonds {
            list.sort_by(|a, b| a.length.total_cmp(&b.length));
        }
    }
}

fn empty_bonds(molecule: &Molecule) -> Vec<Vec<Bond>> {
    molecule
        .topology()
        .atom_pairs()
        .iter()
        .map(|pairs| pairs.iter().map(|p| Bond::new(0.0, p.i, p.j)).collect())
        .collect()
}

fn fill_distances(coordinates: &Matrix3xX<f64>, n: usize, out: &mut [f64]) {
    let mut pos = 0;
    for i in 0..n {
        for j in (i + 1)..n {
            out[pos] = (coordinates.column(i) - coordinates.column(j)).norm();
            pos += 1;
        }
    }
}
