//! Tree tally for ASCII garden maps: segment the map into walled regions,
//! recover each garden's name, and count its trees.

pub mod extract;
pub mod report;
pub mod segment;
pub mod tally;

use tracing::debug;

/// Runs the full pipeline over the raw text of a map file and returns the
/// formatted report.
#[tracing::instrument(skip(input))]
pub fn process(input: &str) -> miette::Result<String> {
    let lines = input.lines().collect::<Vec<_>>();

    let labels = segment::segment(&lines)?;
    debug!("segmented map into {} regions", labels.region_count());

    let gardens = extract::extract(&lines, &labels);
    debug!("extracted {} named gardens", gardens.len());

    Ok(report::report(&gardens))
}
