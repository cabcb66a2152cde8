//! View projector — turns a filtered row set into the displayed table.
//!
//! 1. The view level is the deepest level with an input (village when none),
//!    plus one when expansion is requested and possible.
//! 2. Rows are deduplicated on their codes from province down to the view
//!    level, keeping the first occurrence.
//! 3. The distinct count is recorded, then the rows are capped at the result
//!    limit.
//!
//! Order is the filtered rows' source order, so identical queries always
//! produce identical tables.

use crate::config::SearchLimits;
use crate::filter::{Criteria, RowSet};
use crate::highlight::match_ranges;
use crate::types::{HierarchyRow, Level};
use std::collections::HashSet;
use std::ops::Range;

/// One displayed code + name pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    pub level: Level,
    pub code: String,
    pub name: String,
    /// Byte ranges in `name` matching the level's loose input.
    pub highlight: Vec<Range<usize>>,
}

/// A result row carrying one [`Cell`] per level down to the view level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectedRow {
    pub cells: Vec<Cell>,
}

impl ProjectedRow {
    pub fn cell(&self, level: Level) -> Option<&Cell> {
        self.cells.get(level.index())
    }

    /// Codes as tab-separated values, each prefixed with `'` so spreadsheets
    /// keep the leading zeros.
    pub fn clipboard_text(&self) -> String {
        self.cells
            .iter()
            .map(|cell| format!("'{}", cell.code))
            .collect::<Vec<_>>()
            .join("\t")
    }
}

/// The projector's output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Projection {
    pub rows: Vec<ProjectedRow>,
    pub view_level: Level,
    /// Distinct rows at the view level before the limit was applied.
    pub total_before_limit: usize,
    pub truncated: bool,
    pub limit: usize,
}

/// Decide the deepest displayed level.
pub fn view_level(criteria: &Criteria, expand: bool) -> Level {
    let base = criteria.deepest_supplied().unwrap_or(Level::Village);
    if expand {
        base.deeper().unwrap_or(base)
    } else {
        base
    }
}

/// Project `rows` for display.
pub fn project(
    rows: &RowSet<'_>,
    criteria: &Criteria,
    expand: bool,
    limits: &SearchLimits,
) -> Projection {
    let view = view_level(criteria, expand);

    let mut seen: HashSet<&[String]> = HashSet::new();
    let distinct: Vec<&HierarchyRow> = rows
        .iter()
        .copied()
        .filter(|row| seen.insert(row.codes_through(view)))
        .collect();

    let total_before_limit = distinct.len();
    let needles = highlight_needles(criteria, limits.input_max_chars);

    let rows: Vec<ProjectedRow> = distinct
        .into_iter()
        .take(limits.result_limit)
        .map(|row| ProjectedRow {
            cells: Level::ALL[..=view.index()]
                .iter()
                .map(|&level| {
                    let name = row.name(level);
                    let highlight = needles[level.index()]
                        .as_deref()
                        .map(|needle| match_ranges(name, needle, limits.highlight_min_chars))
                        .unwrap_or_default();
                    Cell {
                        level,
                        code: row.code(level).to_string(),
                        name: name.to_string(),
                        highlight,
                    }
                })
                .collect(),
        })
        .collect();

    Projection {
        truncated: total_before_limit > rows.len(),
        rows,
        view_level: view,
        total_before_limit,
        limit: limits.result_limit,
    }
}

/// Per-level highlight needle: the truncated input of every loose level.
fn highlight_needles(criteria: &Criteria, max_chars: usize) -> [Option<String>; 4] {
    Level::ALL.map(|level| {
        let criterion = criteria.get(level);
        (criterion.is_supplied() && !criterion.exact)
            .then(|| criterion.input.chars().take(max_chars).collect())
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
