use std::collections::HashMap;

use nom::{
    bytes::complete::{tag, take_until},
    sequence::{pair, preceded, terminated},
    IResult,
};
use tracing::debug;

use crate::segment::LabelGrid;
use crate::tally::Tally;

/// Walks every labeled region and recovers its garden record: the
/// parenthesized name found on one of its rows and the tree letters
/// counted across all of its row spans.
///
/// Regions that never yield a non-empty name are dropped; they are
/// artifacts of wall intersections, not gardens. When two regions carry
/// the same name the later label overwrites the earlier one.
#[tracing::instrument(skip(lines, labels))]
pub fn extract(lines: &[&str], labels: &LabelGrid) -> HashMap<String, Tally> {
    let mut gardens = HashMap::new();

    for label in 1..=labels.region_count() {
        let mut tally = Tally::new();
        let mut name: Option<String> = None;

        for (row, line) in lines.iter().enumerate() {
            let Some(span) = row_span(line, labels.row(row), label) else {
                continue;
            };

            if name.is_none() {
                if let Some(found) = find_name(&span) {
                    if !found.is_empty() {
                        debug!("region {} named {:?} on row {}", label, found, row);
                        name = Some(found.to_string());
                    }
                }
            }

            // Name characters sit inside the span and count like any
            // other letters on the row.
            tally.record_span(&span);
        }

        match name {
            Some(name) => {
                gardens.insert(name, tally);
            }
            None => debug!("region {} has no name, dropped", label),
        }
    }

    gardens
}

/// Bounding character slice of `label`'s cells on one row, or `None` when
/// the label does not touch the row. The slice is half-open: it runs from
/// the first labeled column up to but excluding the last one, so a row
/// where the label occupies a single column yields an empty span.
fn row_span(line: &str, labels: &[u32], label: u32) -> Option<String> {
    let first = labels.iter().position(|&l| l == label)?;
    let last = labels.iter().rposition(|&l| l == label)?;

    Some(line.chars().skip(first).take(last - first).collect())
}

// region: name marker parser

/// Extracts the garden name: the text between the first ` (` and the
/// following `) `. A marker without its closing half matches nothing.
fn name_marker(input: &str) -> IResult<&str, &str> {
    preceded(
        pair(take_until(" ("), tag(" (")),
        terminated(take_until(") "), tag(") ")),
    )(input)
}

fn find_name(span: &str) -> Option<&str> {
    name_marker(span).ok().map(|(_, name)| name)
}
// endregion

#[cfg(test)]
mod tests {
    use super::*;
    use crate::segment::segment;
    use rstest::rstest;

    #[rstest]
    #[case(" (Eden) after", Some("Eden"))]
    #[case("before (Eden) after", Some("Eden"))]
    #[case("(Eden) ", None)]
    #[case(" (Eden)", None)]
    #[case(" (a (b) ", Some("a (b"))]
    #[case(" () ", Some(""))]
    #[case("no markers here", None)]
    fn test_find_name(#[case] span: &str, #[case] expected: Option<&str>) {
        assert_eq!(expected, find_name(span));
    }

    #[test]
    fn test_row_span_excludes_last_labeled_column() {
        let labels = vec![0, 1, 1, 1, 0];
        assert_eq!(Some("bc".to_string()), row_span("abcde", &labels, 1));
    }

    #[test]
    fn test_single_column_row_has_empty_span() {
        let labels = vec![0, 0, 1, 0];
        assert_eq!(Some(String::new()), row_span("abcd", &labels, 1));
    }

    #[test]
    fn test_row_without_label_has_no_span() {
        let labels = vec![0, 1, 1, 0];
        assert_eq!(None, row_span("abcd", &labels, 2));
    }

    #[test_log::test]
    fn test_extract_two_gardens() -> miette::Result<()> {
        let lines = vec![
            "+----------+----------+",
            "| (North)  | (South)  |",
            "| C C      | D        |",
            "+----------+----------+",
        ];
        let labels = segment(&lines)?;
        let gardens = extract(&lines, &labels);

        assert_eq!(2, gardens.len());
        assert_eq!(2, gardens["North"].count('C'));
        assert_eq!(0, gardens["North"].count('D'));
        assert_eq!(1, gardens["South"].count('D'));
        Ok(())
    }

    #[test_log::test]
    fn test_unclosed_marker_drops_region() -> miette::Result<()> {
        let lines = vec![
            "+----------+",
            "| (Broken  |",
            "| A B C    |",
            "+----------+",
        ];
        let labels = segment(&lines)?;
        let gardens = extract(&lines, &labels);

        assert_eq!(1, labels.region_count());
        assert!(gardens.is_empty());
        Ok(())
    }

    #[test]
    fn test_unnamed_region_drops_letters() -> miette::Result<()> {
        let lines = vec!["+-----+", "| A A |", "+-----+"];
        let labels = segment(&lines)?;
        let gardens = extract(&lines, &labels);

        assert_eq!(1, labels.region_count());
        assert!(gardens.is_empty());
        Ok(())
    }

    #[test]
    fn test_name_found_on_later_row() -> miette::Result<()> {
        let lines = vec![
            "+---------+",
            "| B       |",
            "| (Late)  |",
            "+---------+",
        ];
        let labels = segment(&lines)?;
        let gardens = extract(&lines, &labels);

        assert_eq!(1, gardens.len());
        assert_eq!(1, gardens["Late"].count('B'));
        Ok(())
    }

    #[test]
    fn test_empty_name_does_not_latch() -> miette::Result<()> {
        let lines = vec![
            "+---------+",
            "|  ()     |",
            "| (Real)  |",
            "| A       |",
            "+---------+",
        ];
        let labels = segment(&lines)?;
        let gardens = extract(&lines, &labels);

        assert_eq!(1, gardens.len());
        assert_eq!(1, gardens["Real"].count('A'));
        Ok(())
    }

    #[test]
    fn test_duplicate_name_keeps_later_region() -> miette::Result<()> {
        let lines = vec![
            "+---------+---------+",
            "| (Twin)  | (Twin)  |",
            "| A       | B B     |",
            "+---------+---------+",
        ];
        let labels = segment(&lines)?;
        let gardens = extract(&lines, &labels);

        assert_eq!(2, labels.region_count());
        assert_eq!(1, gardens.len());
        assert_eq!(0, gardens["Twin"].count('A'));
        assert_eq!(2, gardens["Twin"].count('B'));
        Ok(())
    }

    #[test]
    fn test_name_letters_count_in_tally() -> miette::Result<()> {
        let lines = vec![
            "+----------+",
            "| (ABBA)   |",
            "+----------+",
        ];
        let labels = segment(&lines)?;
        let gardens = extract(&lines, &labels);

        assert_eq!(2, gardens["ABBA"].count('A'));
        assert_eq!(2, gardens["ABBA"].count('B'));
        Ok(())
    }
}
