use std::io::Write;

use anyhow::{Result, bail};
use molgeom::{Sample, Usage};
use tracing::trace;

use super::records;
use crate::cli::FilterArgs;
use crate::display::Context as DisplayContext;

pub fn run_filter(args: FilterArgs, ctx: DisplayContext) -> Result<()> {
    if !args.threshold.is_finite() || args.threshold < 0.0 {
        bail!(
            "Invalid threshold {}: the distance threshold must be a non-negative number",
            args.threshold
        );
    }

    let mut filter = DistanceFilter::new(args.threshold);
    records::run(
        &args.records,
        Usage::default().with_pairwise_distances(),
        ctx,
        "filter",
        |sample, out| filter.offer(sample, out),
    )?;
    Ok(())
}

/// Keeps a record only if it is at least `threshold` away from every record
/// kept before it.
struct DistanceFilter {
    threshold: f64,
    kept: Vec<Sample>,
}

impl DistanceFilter {
    fn new(threshold: f64) -> Self {
        Self {
            threshold,
            kept: Vec::new(),
        }
    }

    fn offer(&mut self, sample: &mut Sample, out: &mut dyn Write) -> Result<bool> {
        sample.compute_distances();

        let nearest = self
            .kept
            .iter()
            .map(|k| sample.distance_to(k))
            .fold(f64::INFINITY, f64::min);

        if nearest < self.threshold {
            trace!(nearest, "record rejected");
            return Ok(false);
        }

        sample.write_record(&mut *out)?;
        self.kept.push(sample.clone());
        Ok(true)
    }
}
