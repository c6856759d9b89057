use std::collections::HashMap;

use itertools::Itertools;

use crate::tally::Tally;

/// Renders the grand total followed by every garden in ascending name
/// order, two lines per block:
///
/// ```text
/// total:
/// A: 3, B: 1, C: 0, D: 2
/// Eden:
/// A: 3, B: 1, C: 0, D: 2
/// ```
pub fn report(gardens: &HashMap<String, Tally>) -> String {
    let mut total = Tally::new();
    for tally in gardens.values() {
        total += tally;
    }

    let mut out = format!("total:\n{}", total);

    for (name, tally) in gardens.iter().sorted_by(|a, b| a.0.cmp(b.0)) {
        out.push_str(&format!("\n{}:\n{}", name, tally));
    }

    out
}
