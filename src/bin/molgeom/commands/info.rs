use std::io::Write;

use anyhow::{Context, Result};
use molgeom::Usage;

use crate::cli::InfoArgs;
use crate::display::{
    Context as DisplayContext, Progress, print_bond_types, print_element_distribution,
    print_molecule_info,
};
use crate::io::{create_output, load_molecule};

const TOTAL_STEPS: u8 = 1;

pub fn run_info(args: InfoArgs, ctx: DisplayContext) -> Result<()> {
    let mut progress = Progress::new(ctx.interactive, TOTAL_STEPS);

    progress.step("Loading molecule");
    let molecule = load_molecule(&args.desc, Usage::default())?;
    let substep = format!("Read {}", args.desc.description.display());
    progress.complete_step("Loading molecule", &[substep.as_str()]);
    progress.finish();

    let mut out = create_output(None)?;
    print_molecule_info(&mut out, &molecule)
        .and_then(|_| print_element_distribution(&mut out, &molecule))
        .and_then(|_| print_bond_types(&mut out, &molecule))
        .and_then(|_| out.flush())
        .context("Failed to write molecule summary")?;

    Ok(())
}
