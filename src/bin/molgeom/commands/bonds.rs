use std::io::Write;

use anyhow::Result;
use molgeom::{Sample, Usage};

use super::records;
use crate::cli::RecordArgs;
use crate::display::Context as DisplayContext;
use crate::util::text::join_reals;

const PRECISION: usize = 6;

pub fn run_bonds(args: RecordArgs, ctx: DisplayContext) -> Result<()> {
    let mut index = 0usize;
    records::run(
        &args,
        Usage::default().with_bonds(),
        ctx,
        "bonds",
        |sample, out| {
            index += 1;
            write_bonds(index, sample, out)
        },
    )?;
    Ok(())
}

/// A `# record N` header, then one `<type> <lengths...>` line per bond type.
fn write_bonds(index: usize, sample: &mut Sample, out: &mut dyn Write) -> Result<bool> {
    sample.compute_bonds();
    sample.sort_bonds();

    let molecule = sample.molecule();
    let registry = molecule.registry();

    writeln!(out, "# record {}", index)?;
    for (bond_type, bonds) in molecule.topology().bond_types().iter().zip(sample.bonds()) {
        let lengths = join_reals(bonds.iter().map(|b| b.length), PRECISION);
        if lengths.is_empty() {
            writeln!(out, "{}", bond_type.label(registry))?;
        } else {
            writeln!(out, "{} {}", bond_type.label(registry), lengths)?;
        }
    }

    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::records::tests::{TWO_RECORDS, water};
    use crate::commands::records::for_each_record;
    use crate::display::Progress;
    use std::io::Cursor;

    #[test]
    fn prints_sorted_lengths_per_type() {
        let mut out = Vec::new();
        let mut index = 0;
        for_each_record(
            &water(Usage::default().with_bonds()),
            Cursor::new(TWO_RECORDS),
            &mut out,
            &mut Progress::new(false, 1),
            |sample, out| {
                index += 1;
                write_bonds(index, sample, out)
            },
        )
        .unwrap();

        let text = String::from_utf8(out).unwrap();
        let expected = "# record 1\nO-H 1.000000 1.000000\nH-H 1.414214\n\
                        # record 2\nO-H 1.000000 2.000000\nH-H 2.236068\n";
        assert_eq!(text, expected);
    }
}
