use std::io::Write;

use anyhow::Result;
use molgeom::{Sample, Usage};

use super::records;
use crate::cli::RecordArgs;
use crate::display::Context as DisplayContext;
use crate::util::text::join_reals;

const PRECISION: usize = 6;

pub fn run_distances(args: RecordArgs, ctx: DisplayContext) -> Result<()> {
    records::run(
        &args,
        Usage::default().with_pairwise_distances(),
        ctx,
        "distances",
        write_distances,
    )?;
    Ok(())
}

/// One line per record: the energy, if any, then the pairwise distances.
fn write_distances(sample: &mut Sample, out: &mut dyn Write) -> Result<bool> {
    sample.compute_distances();

    let distances = join_reals(sample.distances().iter().copied(), PRECISION);
    match sample.energy() {
        Some(energy) => writeln!(out, "{:.*} {}", PRECISION, energy, distances)?,
        None => writeln!(out, "{}", distances)?,
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
    fn prints_energy_then_distances_per_record() {
        let mut out = Vec::new();
        for_each_record(
            &water(Usage::default().with_pairwise_distances()),
            Cursor::new(TWO_RECORDS),
            &mut out,
            &mut Progress::new(false, 1),
            write_distances,
        )
        .unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "-1.500000 1.000000 1.000000 1.414214");
        assert_eq!(lines[1], "-1.000000 2.000000 1.000000 2.236068");
    }

    #[test]
    fn energyless_records_print_distances_only() {
        let mut out = Vec::new();
        for_each_record(
            &water(Usage::default()),
            Cursor::new("3\nno energy\nO 0 0 0\nH 1 0 0\nH 0 1 0\n"),
            &mut out,
            &mut Progress::new(false, 1),
            write_distances,
        )
        .unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "1.000000 1.000000 1.414214\n");
    }
}
