use std::io::{BufRead, Write};
use std::sync::Arc;

use anyhow::{Context, Result, bail};
use molgeom::io::record::RecordReader;
use molgeom::{Molecule, Sample, Usage};
use tracing::{debug, info};

use crate::cli::RecordArgs;
use crate::display::{Context as DisplayContext, Progress};
use crate::io::{create_output, load_molecule, open_input, stdin_is_tty};

const TOTAL_STEPS: u8 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Summary {
    pub read: usize,
    pub written: usize,
}

/// Loads the molecule, then feeds every record of the input to `handle`.
///
/// `handle` returns whether it wrote the record out.
pub fn run<F>(
    args: &RecordArgs,
    usage: Usage,
    ctx: DisplayContext,
    action: &str,
    handle: F,
) -> Result<Summary>
where
    F: FnMut(&mut Sample, &mut dyn Write) -> Result<bool>,
{
    if args.input.is_none() && stdin_is_tty() {
        bail!(
            "No record file specified and stdin is a terminal.\n\nUsage: molgeom {} -d <DESCRIPTION> -i <RECORDS> or pipe records via stdin.",
            action
        );
    }

    let mut progress = Progress::new(ctx.interactive, TOTAL_STEPS);

    progress.step("Loading molecule");
    let molecule = load_molecule(&args.desc, usage)?;
    let desc_substeps = [
        format!(
            "{} atoms, {} elements",
            molecule.atom_count(),
            molecule.registry().element_count()
        ),
        format!("{} bond types", molecule.topology().type_count()),
    ];
    let desc_substeps_ref: Vec<&str> = desc_substeps.iter().map(|s| s.as_str()).collect();
    progress.complete_step("Loading molecule", &desc_substeps_ref);

    progress.step(action);
    let input = open_input(args.input.as_deref())?;
    let mut output = create_output(args.output.as_deref())?;
    let summary = for_each_record(&molecule, input, &mut output, &mut progress, handle)?;
    output.flush().context("Failed to flush output")?;

    let record_substeps = [
        format!("Read {} records", summary.read),
        format!("Wrote {} records", summary.written),
    ];
    let record_substeps_ref: Vec<&str> = record_substeps.iter().map(|s| s.as_str()).collect();
    progress.complete_step(action, &record_substeps_ref);
    progress.finish();

    info!(read = summary.read, written = summary.written, "{} finished", action);

    Ok(summary)
}

/// Record loop over arbitrary streams, one reused [`Sample`].
pub fn for_each_record<R, W, F>(
    molecule: &Arc<Molecule>,
    input: R,
    output: &mut W,
    progress: &mut Progress,
    mut handle: F,
) -> Result<Summary>
where
    R: BufRead,
    W: Write,
    F: FnMut(&mut Sample, &mut dyn Write) -> Result<bool>,
{
    let mut reader = RecordReader::new(input);
    let mut sample = Sample::new(Arc::clone(molecule));
    let mut summary = Summary::default();

    loop {
        let more = reader
            .read_into(&mut sample)
            .with_context(|| format!("Failed to read record {}", summary.read + 1))?;
        if !more {
            break;
        }
        summary.read += 1;

        if handle(&mut sample, &mut *output)? {
            summary.written += 1;
        }
        debug!(record = summary.read, energy = ?sample.energy(), "record processed");
        progress.records(summary.read);
    }

    Ok(summary)
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use molgeom::SpeciesRegistry;
    use std::io::Cursor;

    pub(crate) fn water(usage: Usage) -> Arc<Molecule> {
        let reg = SpeciesRegistry::new("water", ["O", "H"], ["O", "H", "H"]).unwrap();
        Molecule::new(reg, usage)
    }

    pub(crate) const TWO_RECORDS: &str = "3\n-1.5\nO 0 0 0\nH 1 0 0\nH 0 1 0\n3\n-1.0\nO 0 0 0\nH 2 0 0\nH 0 1 0\n";

    #[test]
    fn counts_read_and_written_records() {
        let mut out = Vec::new();
        let mut progress = Progress::new(false, 1);
        let summary = for_each_record(
            &water(Usage::default()),
            Cursor::new(TWO_RECORDS),
            &mut out,
            &mut progress,
            |sample, _| Ok(sample.energy() == Some(-1.0)),
        )
        .unwrap();

        assert_eq!(summary, Summary { read: 2, written: 1 });
    }

    #[test]
    fn read_errors_name_the_record() {
        let mut out = Vec::new();
        let mut progress = Progress::new(false, 1);
        let err = for_each_record(
            &water(Usage::default()),
            Cursor::new("3\n-1.5\nO 0 0 0\nH 1 0 0\nH 0 1 0\n3\ne\nO 0 0 0\n"),
            &mut out,
            &mut progress,
            |_, _| Ok(true),
        )
        .unwrap_err();

        assert_eq!(err.to_string(), "Failed to read record 2");
        assert!(err.downcast_ref::<molgeom::io::Error>().is_some());
    }
}
