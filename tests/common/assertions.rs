//! Domain-specific assertion macros for wilayah harnesses.
//!
//! These wrap `pretty_assertions` and add failure messages that say which
//! lookup invariant was violated.

use wilayah::{Level, Projection, SearchOutcome, Suggestion};

/// Unwrap a [`SearchOutcome::Found`], panicking with the actual status
/// otherwise.
pub fn expect_found(outcome: SearchOutcome) -> Projection {
    match outcome {
        SearchOutcome::Found(projection) => projection,
        other => panic!("expected a projection, got status {:?}", other.status()),
    }
}

/// Codes of suggestions, in returned order.
pub fn suggestion_codes(found: &[Suggestion]) -> Vec<&str> {
    found.iter().map(|s| s.code.as_str()).collect()
}

/// Names of suggestions, in returned order.
pub fn suggestion_names(found: &[Suggestion]) -> Vec<&str> {
    found.iter().map(|s| s.name.as_str()).collect()
}

/// Names displayed at `level` across a projection, in row order.
pub fn projected_names(projection: &Projection, level: Level) -> Vec<String> {
    projection
        .rows
        .iter()
        .filter_map(|row| row.cell(level).map(|c| c.name.clone()))
        .collect()
}

/// Assert that a suggestion list is strictly ascending by (code, name), which
/// also rules out duplicates.
#[macro_export]
macro_rules! assert_sorted_distinct {
    ($found:expr) => {{
        let found: &[wilayah::Suggestion] = &$found;
        for pair in found.windows(2) {
            if pair[0] >= pair[1] {
                panic!(
                    "assert_sorted_distinct! failed: {:?} is not strictly before {:?}",
                    pair[0], pair[1]
                );
            }
        }
    }};
}

/// Assert that every row in a projection shows exactly the levels from
/// province down to the view level.
#[macro_export]
macro_rules! assert_columns_through {
    ($projection:expr) => {{
        let projection: &wilayah::Projection = &$projection;
        for (i, row) in projection.rows.iter().enumerate() {
            for level in wilayah::Level::ALL {
                let shown = row.cell(level).is_some();
                let expected = level <= projection.view_level;
                if shown != expected {
                    panic!(
                        "assert_columns_through! failed at row {}: level {} shown={} but view level is {}",
                        i, level, shown, projection.view_level
                    );
                }
            }
        }
    }};
}
