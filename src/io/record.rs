use std::io::{BufRead, Write};

use nalgebra::{Matrix3xX, Vector3};
use tracing::trace;

use crate::io::{Format, error::Error};
use crate::model::sample::Sample;

/// One record as read from a record stream.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub energy_line: String,
    pub atom_lines: Vec<String>,
    pub energy: Option<f64>,
    pub coordinates: Matrix3xX<f64>,
    /// Lines consumed, including blank lines skipped before the count line.
    pub line_count: usize,
}

/// Reads one `count / energy / atom lines` record of `atom_count` atoms.
///
/// Blank lines before the count line are skipped; the count line itself is
/// discarded unchecked. Lines are kept verbatim minus the trailing `\n`.
/// `first_line` is the line number of the first line read, used in error
/// messages. Returns `Ok(None)` when only blank lines remain.
pub fn read<R: BufRead>(
    reader: &mut R,
    atom_count: usize,
    first_line: usize,
) -> Result<Option<Record>, Error> {
    let mut count_line = String::new();
    let mut count_line_no = first_line;
    loop {
        if !read_line(reader, &mut count_line)? {
            return Ok(None);
        }
        if !count_line.trim().is_empty() {
            break;
        }
        count_line_no += 1;
    }

    let mut energy_line = String::new();
    if !read_line(reader, &mut energy_line)? {
        return Err(Error::malformed(
            Format::Record,
            count_line_no + 1,
            "record ended before its energy line",
        ));
    }
    let energy = energy_line
        .split_whitespace()
        .next()
        .and_then(|t| t.parse::<f64>().ok());

    let mut coordinates = Matrix3xX::zeros(atom_count);
    let mut atom_lines = Vec::with_capacity(atom_count);

    for i in 0..atom_count {
        let line_no = count_line_no + 2 + i;
        let mut raw = String::new();
        if !read_line(reader, &mut raw)? {
            return Err(Error::malformed(
                Format::Record,
                line_no,
                format!("record ended after {} of {} atom lines", i, atom_count),
            ));
        }

        coordinates.set_column(i, &parse_atom_line(&raw, line_no)?);
        atom_lines.push(raw);
    }

    trace!(line = count_line_no, energy = ?energy, "record read");

    Ok(Some(Record {
        energy_line,
        atom_lines,
        energy,
        coordinates,
        line_count: count_line_no - first_line + 2 + atom_count,
    }))
}

/// Writes `atom_count`, the energy line and the atom lines, one per line.
pub fn write<W: Write>(
    mut writer: W,
    atom_count: usize,
    energy_line: &str,
    atom_lines: &[String],
) -> Result<(), Error> {
    writeln!(writer, "{}", atom_count)?;
    writeln!(writer, "{}", energy_line)?;
    for line in atom_lines {
        writeln!(writer, "{}", line)?;
    }
    Ok(())
}

/// Sequential record reader that keeps absolute line numbers for errors.
pub struct RecordReader<R> {
    reader: R,
    lines_read: usize,
    records_read: usize,
}

impl<R: BufRead> RecordReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            lines_read: 0,
            records_read: 0,
        }
    }

    /// Loads the next record into `sample`; `Ok(false)` at end of stream.
    pub fn read_into(&mut self, sample: &mut Sample) -> Result<bool, Error> {
        let atom_count = sample.molecule().atom_count();
        match read(&mut self.reader, atom_count, self.lines_read + 1)? {
            Some(record) => {
                self.lines_read += record.line_count;
                self.records_read += 1;
                sample.apply_record(record);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    pub fn lines_read(&self) -> usize {
        self.lines_read
    }

    pub fn records_read(&self) -> usize {
        self.records_read
    }

    pub fn into_inner(self) -> R {
        self.reader
    }
}

fn read_line<R: BufRead>(reader: &mut R, buf: &mut String) -> Result<bool, Error> {
    buf.clear();
    if reader.read_line(buf)? == 0 {
        return Ok(false);
    }
    if buf.ends_with('\n') {
        buf.pop();
    }
    Ok(true)
}

fn parse_atom_line(raw: &str, line_no: usize) -> Result<Vector3<f64>, Error> {
    let mut tokens = raw.split_whitespace();
    if tokens.next().is_none() {
        return Err(Error::malformed(
            Format::Record,
            line_no,
            "empty atom line",
        ));
    }

    let mut pos = Vector3::zeros();
    for (k, axis) in ["x", "y", "z"].iter().enumerate() {
        let token = tokens.next().ok_or_else(|| {
            Error::malformed(
                Format::Record,
                line_no,
                format!("atom line is missing its {} coordinate", axis),
            )
        })?;
        pos[k] = token.parse::<f64>().map_err(|_| {
            Error::malformed(
                Format::Record,
                line_no,
                format!("invalid {} coordinate '{}'", axis, token),
            )
        })?;
    }

    Ok(pos)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const WATER: &str = "3\n-76.02  step 1\nO  0.000000  0.000000  0.117300\nH  0.000000  0.757200 -0.469200\nH  0.000000 -0.757200 -0.469200\n";

    #[test]
    fn reads_raw_lines_and_coordinates() {
        let mut input = Cursor::new(WATER);
        let rec = read(&mut input, 3, 1).unwrap().expect("one record");

        assert_eq!(rec.energy_line, "-76.02  step 1");
        assert_eq!(rec.energy, Some(-76.02));
        assert_eq!(rec.atom_lines[1], "H  0.000000  0.757200 -0.469200");
        assert_eq!(rec.coordinates[(1, 1)], 0.7572);
        assert_eq!(rec.coordinates[(2, 2)], -0.4692);

        assert!(read(&mut input, 3, 6).unwrap().is_none());
    }

    #[test]
    fn written_record_is_byte_identical() {
        let rec = read(&mut Cursor::new(WATER), 3, 1).unwrap().unwrap();
        let mut out = Vec::new();
        write(&mut out, 3, &rec.energy_line, &rec.atom_lines).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), WATER);
    }

    #[test]
    fn keeps_carriage_returns_verbatim() {
        let text = "1\r\nE=1.0\r\nHe 1 2 3\r\n";
        let rec = read(&mut Cursor::new(text), 1, 1).unwrap().unwrap();
        assert_eq!(rec.coordinates.column(0).as_slice(), &[1.0, 2.0, 3.0]);
        assert_eq!(rec.energy, None);

        let mut out = Vec::new();
        write(&mut out, 1, &rec.energy_line, &rec.atom_lines).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), text);
    }

    #[test]
    fn count_line_is_not_validated() {
        let text = "99\nenergy\nH 0 0 0\nH 0 0 0.74\n";
        let rec = read(&mut Cursor::new(text), 2, 1).unwrap().unwrap();
        assert_eq!(rec.atom_lines.len(), 2);
        assert_eq!(rec.coordinates[(2, 1)], 0.74);
    }

    #[test]
    fn empty_stream_and_blank_tail_end_the_stream() {
        assert!(read(&mut Cursor::new(""), 3, 1).unwrap().is_none());
        assert!(read(&mut Cursor::new("\n"), 3, 1).unwrap().is_none());
        assert!(read(&mut Cursor::new("\n\n  \n"), 3, 1).unwrap().is_none());

        let mut input = Cursor::new(format!("{WATER}\n\n"));
        assert!(read(&mut input, 3, 1).unwrap().is_some());
        assert!(read(&mut input, 3, 6).unwrap().is_none());
    }

    #[test]
    fn blank_lines_between_records_are_skipped() {
        let text = format!("{WATER}\n{WATER}");
        let mut reader = RecordReader::new(Cursor::new(text.as_str()));
        let molecule = crate::model::molecule::Molecule::new(
            crate::model::species::SpeciesRegistry::new("water", ["O", "H"], ["O", "H", "H"])
                .unwrap(),
            Default::default(),
        );
        let mut sample = Sample::new(molecule);

        assert!(reader.read_into(&mut sample).unwrap());
        assert!(reader.read_into(&mut sample).unwrap());
        assert_eq!(reader.lines_read(), 11);
        assert_eq!(sample.raw_energy_line(), "-76.02  step 1");
        assert!(!reader.read_into(&mut sample).unwrap());
    }

    #[test]
    fn error_lines_count_skipped_blank_lines() {
        let err = read(&mut Cursor::new("\n\n3\n"), 3, 1).unwrap_err();
        assert!(matches!(err, Error::MalformedInput { line: 4, .. }));
    }

    #[test]
    fn truncated_record_reports_line() {
        let text = "3\n-1.0\nO 0 0 0\nH 1 0 0\n";
        let err = read(&mut Cursor::new(text), 3, 10).unwrap_err();
        match err {
            Error::MalformedInput { format, line, details } => {
                assert_eq!(format, Format::Record);
                assert_eq!(line, 14);
                assert!(details.contains("2 of 3"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn bad_atom_lines_are_malformed() {
        let missing = read(&mut Cursor::new("1\ne\nH 0 0\n"), 1, 1).unwrap_err();
        assert!(missing.to_string().contains("missing its z coordinate"));

        let invalid = read(&mut Cursor::new("1\ne\nH 0 x 0\n"), 1, 1).unwrap_err();
        assert!(invalid.to_string().contains("invalid y coordinate 'x'"));

        let empty = read(&mut Cursor::new("1\ne\n   \n"), 1, 1).unwrap_err();
        assert!(empty.to_string().contains("empty atom line"));
    }
}
