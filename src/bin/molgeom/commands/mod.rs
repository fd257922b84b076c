mod bonds;
mod distances;
mod filter;
mod info;
mod records;

use anyhow::Result;

use crate::cli::Command;
use crate::display::Context;

pub fn dispatch(command: Command, ctx: Context) -> Result<()> {
    match command {
        Command::Info(args) => info::run_info(args, ctx),
        Command::Distances(args) => distances::run_distances(args, ctx),
        Command::Bonds(args) => bonds::run_bonds(args, ctx),
        Command::Filter(args) => filter::run_filter(args, ctx),
    }
}
