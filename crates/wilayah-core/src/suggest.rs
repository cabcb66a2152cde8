//! Suggestion resolver — autocomplete candidates for one level.
//!
//! Candidates are scoped by the ancestor codes the caller has already fixed,
//! then matched against the query:
//!
//! - all-digit query → substring of the level's **code**
//! - one character → prefix of the lowercased name
//! - longer text → substring of the lowercased name
//!
//! The result is the distinct `(code, name)` pairs sorted by code, capped at
//! the suggestion limit. Caching is layered on top by
//! [`Catalog`](crate::catalog::Catalog); this module is pure.

use crate::store::Dataset;
use crate::types::{HierarchyRow, Level};
use serde::Serialize;
use std::collections::BTreeSet;

/// Codes already chosen above the level being queried. Empty means "no
/// constraint".
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct AncestorCodes {
    pub province: String,
    pub regency: String,
    pub district: String,
}

impl AncestorCodes {
    pub fn new(
        province: impl Into<String>,
        regency: impl Into<String>,
        district: impl Into<String>,
    ) -> Self {
        Self {
            province: province.into(),
            regency: regency.into(),
            district: district.into(),
        }
    }

    /// The code fixed at `level`; always empty for village.
    pub fn get(&self, level: Level) -> &str {
        match level {
            Level::Province => &self.province,
            Level::Regency => &self.regency,
            Level::District => &self.district,
            Level::Village => "",
        }
    }

    /// Drop the codes at or below `level`; they cannot scope it.
    pub fn scoped_to(&self, level: Level) -> AncestorCodes {
        let keep = |l: Level| {
            if l < level {
                self.get(l).to_string()
            } else {
                String::new()
            }
        };
        AncestorCodes {
            province: keep(Level::Province),
            regency: keep(Level::Regency),
            district: keep(Level::District),
        }
    }

    fn admits(&self, row: &HierarchyRow, level: Level) -> bool {
        level.ancestors().iter().all(|&ancestor| {
            let code = self.get(ancestor);
            code.is_empty() || row.code(ancestor) == code
        })
    }
}

/// One autocomplete candidate.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Suggestion {
    pub code: String,
    pub name: String,
}

/// How a normalised query is compared against a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TextMatch<'q> {
    Any,
    Code(&'q str),
    NamePrefix(&'q str),
    NameContains(&'q str),
}

impl<'q> TextMatch<'q> {
    fn classify(normalized: &'q str) -> Self {
        if normalized.is_empty() {
            TextMatch::Any
        } else if normalized.chars().all(|c| c.is_ascii_digit()) {
            TextMatch::Code(normalized)
        } else if normalized.chars().count() == 1 {
            TextMatch::NamePrefix(normalized)
        } else {
            TextMatch::NameContains(normalized)
        }
    }

    fn matches(self, row: &HierarchyRow, level: Level) -> bool {
        match self {
            TextMatch::Any => true,
            TextMatch::Code(q) => row.code(level).contains(q),
            TextMatch::NamePrefix(q) => row.search_key(level).starts_with(q),
            TextMatch::NameContains(q) => row.search_key(level).contains(q),
        }
    }
}

/// Trim and lowercase a raw query the way the resolver compares it.
pub fn normalize_query(query: &str) -> String {
    query.trim().to_lowercase()
}

/// Resolve autocomplete candidates for `level`.
///
/// Only ancestor codes strictly above `level` are applied. Returns an empty
/// list as soon as the ancestor scope selects no rows.
pub fn suggest(
    dataset: &Dataset,
    level: Level,
    query: &str,
    ancestors: &AncestorCodes,
    limit: usize,
) -> Vec<Suggestion> {
    let mut scoped = dataset
        .rows_where(|row| ancestors.admits(row, level))
        .peekable();
    if scoped.peek().is_none() {
        return Vec::new();
    }

    let normalized = normalize_query(query);
    let text = TextMatch::classify(&normalized);

    // BTreeSet gives dedup and code order (ties broken by name) in one pass.
    let distinct: BTreeSet<(&str, &str)> = scoped
        .filter(|row| text.matches(row, level))
        .map(|row| (row.code(level), row.name(level)))
        .collect();

    distinct
        .into_iter()
        .take(limit)
        .map(|(code, name)| Suggestion {
            code: code.to_string(),
            name: name.to_string(),
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
