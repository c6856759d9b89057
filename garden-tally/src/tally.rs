use std::fmt;
use std::ops::AddAssign;

use itertools::Itertools;

/// Tree letters recognized on the map. Extending this array extends every
/// tally and every report line with it.
pub const TREE_KINDS: [char; 4] = ['A', 'B', 'C', 'D'];

/// Per-garden tree counts, one slot per entry in [`TREE_KINDS`]. Every
/// category starts at zero so totals stay well-defined for letters that
/// never occur.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Tally {
    counts: [u32; TREE_KINDS.len()],
}

impl Tally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts every recognized tree letter in `span` into this tally.
    pub fn record_span(&mut self, span: &str) {
        for ch in span.chars() {
            if let Some(slot) = TREE_KINDS.iter().position(|&kind| kind == ch) {
                self.counts[slot] += 1;
            }
        }
    }

    /// Count for one letter; unrecognized letters report zero.
    pub fn count(&self, kind: char) -> u32 {
        TREE_KINDS
            .iter()
            .position(|&k| k == kind)
            .map(|slot| self.counts[slot])
            .unwrap_or(0)
    }

    pub fn total(&self) -> u32 {
        self.counts.iter().sum()
    }
}

impl AddAssign<&Tally> for Tally {
    fn add_assign(&mut self, rhs: &Tally) {
        for (slot, count) in rhs.counts.iter().enumerate() {
            self.counts[slot] += count;
        }
    }
}

impl fmt::Display for Tally {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            TREE_KINDS
                .iter()
                .zip(self.counts.iter())
                .map(|(kind, count)| format!("{}: {}", kind, count))
                .join(", ")
        )
    }
}
