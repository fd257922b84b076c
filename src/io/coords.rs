use std::io::{BufRead, Write};

use nalgebra::Matrix3xX;

use crate::io::{Format, TokenReader, error::Error};
use crate::model::species::SpeciesRegistry;

/// Reads one `<label> <x> <y> <z>` group per column of `coordinates`.
///
/// Labels are discarded. Groups are taken from the token stream, so line
/// breaks inside a group are tolerated. `coordinates` is only written once the
/// whole block has parsed.
pub fn read_block<R: BufRead>(
    tokens: &mut TokenReader<R>,
    coordinates: &mut Matrix3xX<f64>,
) -> Result<(), Error> {
    let atom_count = coordinates.ncols();
    let mut block = Matrix3xX::zeros(atom_count);

    for i in 0..atom_count {
        if tokens.next_token()?.is_none() {
            return Err(Error::malformed(
                Format::Coordinates,
                tokens.line(),
                format!("missing label for atom {} of {}", i + 1, atom_count),
            ));
        }

        for k in 0..3 {
            let token = tokens.next_token()?.ok_or_else(|| {
                Error::malformed(
                    Format::Coordinates,
                    tokens.line(),
                    format!("block ended inside the coordinates of atom {}", i + 1),
                )
            })?;
            block[(k, i)] = token.parse::<f64>().map_err(|_| {
                Error::malformed(
                    Format::Coordinates,
                    tokens.line(),
                    format!("invalid coordinate '{}' for atom {}", token, i + 1),
                )
            })?;
        }
    }

    coordinates.copy_from(&block);
    Ok(())
}

/// Reads a single real number.
///
/// Returns `None` at end of input or when the next token is not a number; in
/// the latter case the token is left in the stream.
pub fn read_energy<R: BufRead>(tokens: &mut TokenReader<R>) -> Result<Option<f64>, Error> {
    let value = match tokens.peek()? {
        Some(token) => token.parse::<f64>().ok(),
        None => None,
    };

    if value.is_some() {
        tokens.next_token()?;
    }

    Ok(value)
}

/// Writes the coordinates as `<element> <x> <y> <z>` lines.
pub fn write_block<W: Write>(
    mut writer: W,
    registry: &SpeciesRegistry,
    coordinates: &Matrix3xX<f64>,
) -> Result<(), Error> {
    for (i, col) in coordinates.column_iter().enumerate() {
        let symbol = registry.element_name(registry.atom_element(i));
        writeln!(writer, "{} {} {} {}", symbol, col[0], col[1], col[2])?;
    }
    Ok(())
}
