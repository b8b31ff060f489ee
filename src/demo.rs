use std::io::Write;

use colored::Colorize;
use tracing::debug;

use crate::sorting::bubble_sort;

/// The fixed battery of demo inputs: a typical unsorted array, an
/// even-length one, a singleton, an empty array, all-equal elements,
/// and a strictly descending array.
pub const SAMPLE_CASES: &[&[i32]] = &[
    &[64, 34, 25, 12, 22, 11, 90],
    &[5, 2, 4, 6, 1, 3],
    &[1],
    &[],
    &[3, 3, 3, 3],
    &[9, 8, 7, 6, 5, 4, 3, 2, 1],
];

/// Runs the sorter over [`SAMPLE_CASES`] and writes a before/after report.
///
/// Each case keeps an untouched copy for display, since the sort mutates
/// its argument in place. Array contents are written uncolored so the
/// report stays readable when piped.
pub fn run(out: &mut impl Write) -> anyhow::Result<()> {
    writeln!(out, "{}", "Bubble sort demo".bold())?;
    writeln!(out)?;

    for (i, case) in SAMPLE_CASES.iter().enumerate() {
        let original = case.to_vec();
        let mut sorted = original.clone();
        bubble_sort(&mut sorted);
        debug!(case = i + 1, len = original.len(), "case sorted");

        writeln!(out, "{}", format!("Test {}:", i + 1).cyan())?;
        writeln!(out, "Original array: {:?}", original)?;
        writeln!(out, "Sorted array: {:?}", sorted)?;
        writeln!(out)?;
    }
    Ok(())
}
