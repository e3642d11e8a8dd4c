//! Domain-specific assertion macros for rekap harnesses.
//!
//! These wrap plain string comparisons of rendered reports and say which day
//! block or which ordering rule broke.

// ---------------------------------------------------------------------------
// Report parsing
// ---------------------------------------------------------------------------

/// One rendered day block: its heading and its `(label, total)` lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    pub day: String,
    pub lines: Vec<(String, u64)>,
}

/// Split a rendered report back into blocks. Panics on malformed lines.
pub fn report_blocks(report: &str) -> Vec<Block> {
    report
        .split("\n\n")
        .map(str::trim)
        .filter(|b| !b.is_empty())
        .map(|block| {
            let mut lines = block.lines();
            let day = lines.next().expect("block heading").to_string();
            let lines = lines
                .map(|line| {
                    let body = line
                        .strip_prefix("- ")
                        .unwrap_or_else(|| panic!("not a total line: {line:?}"));
                    let (label, total) = body
                        .rsplit_once(" : ")
                        .unwrap_or_else(|| panic!("no ' : ' in {line:?}"));
                    (label.to_string(), total.parse().expect("numeric total"))
                })
                .collect();
            Block { day, lines }
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Block assertions
// ---------------------------------------------------------------------------

/// Assert that a report has a block for `day` with exactly these lines.
///
/// ```rust
/// assert_block!(report, "5 mar", [("2 jam", 3), ("b2g3 2 jam", 2)]);
/// ```
#[macro_export]
macro_rules! assert_block {
    ($report:expr, $day:expr, [$(($label:expr, $total:expr)),* $(,)?]) => {{
        let blocks = $crate::common::report_blocks(&$report);
        let day: &str = $day;
        let expected: Vec<(String, u64)> = vec![$(($label.to_string(), $total)),*];
        match blocks.iter().find(|b| b.day == day) {
            Some(block) => pretty_assertions::assert_eq!(
                block.lines, expected,
                "assert_block! failed for day {:?}", day
            ),
            None => panic!(
                "assert_block! failed: no block for {:?}.\n  Days present: {:?}",
                day,
                blocks.iter().map(|b| &b.day).collect::<Vec<_>>()
            ),
        }
    }};
}

/// Assert the block headings, in order.
#[macro_export]
macro_rules! assert_days {
    ($report:expr, [$($day:expr),* $(,)?]) => {{
        let blocks = $crate::common::report_blocks(&$report);
        let actual: Vec<&str> = blocks.iter().map(|b| b.day.as_str()).collect();
        let expected: Vec<&str> = vec![$($day),*];
        pretty_assertions::assert_eq!(actual, expected, "assert_days! failed");
    }};
}

/// Assert that every block lists its labels in ascending string order.
#[macro_export]
macro_rules! assert_labels_sorted {
    ($report:expr) => {{
        for block in $crate::common::report_blocks(&$report) {
            let labels: Vec<&String> = block.lines.iter().map(|(l, _)| l).collect();
            let mut sorted = labels.clone();
            sorted.sort();
            assert_eq!(
                labels, sorted,
                "assert_labels_sorted! failed in block {:?}",
                block.day
            );
        }
    }};
}
