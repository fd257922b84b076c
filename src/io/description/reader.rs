use std::io::BufRead;

use tracing::debug;

use super::Description;
use crate::io::{Format, error::Error};

const SEPARATORS: [char; 5] = ['=', '(', ')', '\'', '"'];

pub fn read<R: BufRead>(reader: R) -> Result<Description, Error> {
    let mut molecule = String::new();
    let mut elem_num: Option<usize> = None;
    let mut atom_num: Option<usize> = None;
    let mut elements: Option<Vec<String>> = None;
    let mut atoms: Option<Vec<String>> = None;
    let mut last_line = 0;

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let line_no = idx + 1;
        last_line = line_no;

        if is_skipped(&line) {
            continue;
        }

        let cleaned = line.replace(SEPARATORS, " ");
        let mut fields = cleaned.split_whitespace();
        let Some(key) = fields.next() else {
            continue;
        };

        match key {
            "molecule" => {
                molecule = value(&mut fields, key, line_no)?.to_string();
            }
            "elem_num" => {
                elem_num = Some(count(value(&mut fields, key, line_no)?, key, line_no)?);
            }
            "atom_num" => {
                atom_num = Some(count(value(&mut fields, key, line_no)?, key, line_no)?);
            }
            "elem_list" => {
                let n = elem_num.ok_or_else(|| {
                    Error::parse(Format::Description, line_no, "elem_list before elem_num")
                })?;
                elements = Some(symbols(fields, n, key, line_no)?);
            }
            "atom_list" => {
                let n = atom_num.ok_or_else(|| {
                    Error::parse(Format::Description, line_no, "atom_list before atom_num")
                })?;
                atoms = Some(symbols(fields, n, key, line_no)?);
            }
            other => {
                debug!(line = line_no, key = other, "ignoring unknown description key");
            }
        }
    }

    let elements = elements
        .ok_or_else(|| Error::parse(Format::Description, last_line, "missing elem_list"))?;
    let atoms =
        atoms.ok_or_else(|| Error::parse(Format::Description, last_line, "missing atom_list"))?;

    Ok(Description {
        molecule,
        elements,
        atoms,
    })
}

fn is_skipped(line: &str) -> bool {
    match line.chars().next() {
        None => true,
        Some(c) => c == '#' || c.is_whitespace(),
    }
}

fn value<'a>(
    fields: &mut impl Iterator<Item = &'a str>,
    key: &str,
    line_no: usize,
) -> Result<&'a str, Error> {
    fields.next().ok_or_else(|| {
        Error::parse(
            Format::Description,
            line_no,
            format!("missing value for '{}'", key),
        )
    })
}

fn count(token: &str, key: &str, line_no: usize) -> Result<usize, Error> {
    token.parse::<usize>().map_err(|_| {
        Error::parse(
            Format::Description,
            line_no,
            format!("invalid integer '{}' for '{}'", token, key),
        )
    })
}

fn symbols<'a>(
    fields: impl Iterator<Item = &'a str>,
    expected: usize,
    key: &str,
    line_no: usize,
) -> Result<Vec<String>, Error> {
    let list: Vec<String> = fields.take(expected).map(str::to_string).collect();
    if list.len() < expected {
        return Err(Error::parse(
            Format::Description,
            line_no,
            format!(
                "'{}' lists {} symbols but {} were declared",
                key,
                list.len(),
                expected
            ),
        ));
    }
    Ok(list)
}
