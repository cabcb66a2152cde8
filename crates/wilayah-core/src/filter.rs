//! Hierarchical filter engine.
//!
//! Each level may carry a raw input and an `exact` flag. A supplied input is
//! compiled into a [`LevelMatcher`]:
//!
//! | input (after truncation)                | match                       |
//! |-----------------------------------------|-----------------------------|
//! | all digits, length == level code width  | code equality (flag ignored) |
//! | anything else, `exact`                  | lowercase name equality      |
//! | anything else                           | lowercase name containment   |
//!
//! Rows must satisfy every supplied level, checked province → village, so a
//! child-level code is always read together with whatever ancestors were
//! supplied.

use crate::store::Dataset;
use crate::types::{HierarchyRow, Level};

/// Matching rows, in source order, borrowed from the dataset.
pub type RowSet<'a> = Vec<&'a HierarchyRow>;

/// One level's raw input and exact-match flag.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LevelCriterion {
    pub input: String,
    pub exact: bool,
}

impl LevelCriterion {
    pub fn new(input: impl Into<String>, exact: bool) -> Self {
        Self {
            input: input.into(),
            exact,
        }
    }

    /// An empty input places no constraint on its level.
    pub fn is_supplied(&self) -> bool {
        !self.input.is_empty()
    }
}

/// Per-level criteria for a result-table query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Criteria {
    levels: [LevelCriterion; 4],
}

impl Criteria {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style [`Criteria::set`].
    pub fn with(mut self, level: Level, input: impl Into<String>, exact: bool) -> Self {
        self.set(level, input, exact);
        self
    }

    pub fn set(&mut self, level: Level, input: impl Into<String>, exact: bool) {
        self.levels[level.index()] = LevelCriterion::new(input, exact);
    }

    pub fn get(&self, level: Level) -> &LevelCriterion {
        &self.levels[level.index()]
    }

    pub fn is_supplied(&self, level: Level) -> bool {
        self.get(level).is_supplied()
    }

    /// No level carries any input: the caller is still awaiting input.
    pub fn is_empty(&self) -> bool {
        !self.levels.iter().any(LevelCriterion::is_supplied)
    }

    /// The finest level with an input, if any.
    pub fn deepest_supplied(&self) -> Option<Level> {
        Level::ALL
            .into_iter()
            .rev()
            .find(|&level| self.is_supplied(level))
    }

    /// The extra level an `expand` request would reveal, if any.
    pub fn expansion_target(&self) -> Option<Level> {
        self.deepest_supplied().and_then(Level::deeper)
    }
}

/// A compiled per-level predicate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LevelMatcher {
    Code(String),
    ExactName(String),
    NameContains(String),
}

impl LevelMatcher {
    /// Compile `criterion` for `level`, truncating the input to `max_chars`
    /// characters first. Returns `None` when the level is unconstrained.
    pub fn compile(level: Level, criterion: &LevelCriterion, max_chars: usize) -> Option<Self> {
        if !criterion.is_supplied() {
            return None;
        }
        let input: String = criterion.input.chars().take(max_chars).collect();

        if is_code_like(&input, level.code_width()) {
            return Some(LevelMatcher::Code(input));
        }
        let lowered = input.to_lowercase();
        Some(if criterion.exact {
            LevelMatcher::ExactName(lowered)
        } else {
            LevelMatcher::NameContains(lowered)
        })
    }

    pub fn matches(&self, row: &HierarchyRow, level: Level) -> bool {
        match self {
            LevelMatcher::Code(code) => row.code(level) == code,
            LevelMatcher::ExactName(name) => row.search_key(level) == name,
            LevelMatcher::NameContains(text) => row.search_key(level).contains(text.as_str()),
        }
    }
}

fn is_code_like(input: &str, width: usize) -> bool {
    input.len() == width && input.bytes().all(|b| b.is_ascii_digit())
}

/// Narrow `dataset` to the rows matching every supplied level.
///
/// With no supplied level every row passes; routing that case to an
/// "awaiting input" state is the caller's job.
pub fn filter<'a>(dataset: &'a Dataset, criteria: &Criteria, max_chars: usize) -> RowSet<'a> {
    let matchers: Vec<(Level, LevelMatcher)> = Level::ALL
        .into_iter()
        .filter_map(|level| {
            LevelMatcher::compile(level, criteria.get(level), max_chars).map(|m| (level, m))
        })
        .collect();

    // `all` stops at the first failing level, coarse to fine.
    let rows: RowSet<'a> = dataset
        .rows_where(|row| matchers.iter().all(|(level, m)| m.matches(row, *level)))
        .collect();

    tracing::debug!(levels = matchers.len(), matched = rows.len(), "filter applied");
    rows
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    const MAX: usize = 50;

    fn row(codes: [&str; 4], names: [&str; 4]) -> HierarchyRow {
        HierarchyRow::new(codes.map(String::from), names.map(String::from))
    }

    fn dataset() -> Dataset {
        Dataset::from_rows(vec![
            row(["31", "01", "010", "001"], ["DKI JAKARTA", "JAKARTA SELATAN", "TEBET", "MANGGARAI"]),
            row(["31", "01", "010", "002"], ["DKI JAKARTA", "JAKARTA SELATAN", "TEBET", "BUKIT DURI"]),
            row(["31", "02", "020", "001"], ["DKI JAKARTA", "JAKARTA TIMUR", "JATINEGARA", "BALI MESTER"]),
            row(["32", "01", "010", "001"], ["JAWA BARAT", "BOGOR", "NANGGUNG", "MALASARI"]),
            row(["03", "01", "001", "001"], ["SUMATERA BARAT", "PESISIR SELATAN", "KOTO XI TARUSAN", "BATU HAMPAR"]),
        ])
    }

    fn villages(rows: &RowSet<'_>) -> Vec<String> {
        rows.iter().map(|r| r.name(Level::Village).to_string()).collect()
    }

    #[rstest]
    #[case(Level::Province, "31", false, Some(LevelMatcher::Code("31".into())))]
    #[case(Level::Province, "31", true, Some(LevelMatcher::Code("31".into())))]
    #[case(Level::Province, "3", false, Some(LevelMatcher::NameContains("3".into())))]
    #[case(Level::District, "01", false, Some(LevelMatcher::NameContains("01".into())))]
    #[case(Level::District, "010", false, Some(LevelMatcher::Code("010".into())))]
    #[case(Level::Regency, "Bogor", true, Some(LevelMatcher::ExactName("bogor".into())))]
    #[case(Level::Regency, "", true, None)]
    fn compiles_matchers(
        #[case] level: Level,
        #[case] input: &str,
        #[case] exact: bool,
        #[case] expected: Option<LevelMatcher>,
    ) {
        let criterion = LevelCriterion::new(input, exact);
        assert_eq!(LevelMatcher::compile(level, &criterion, MAX), expected);
    }

    #[test]
    fn code_width_input_is_code_equality() {
        let ds = dataset();
        let criteria = Criteria::new().with(Level::Province, "03", false);
        let out = filter(&ds, &criteria, MAX);
        assert_eq!(villages(&out), vec!["BATU HAMPAR"]);
    }

    #[test]
    fn short_digit_input_is_text() {
        let criteria = Criteria::new().with(Level::Province, "3", false);
        assert!(filter(&dataset(), &criteria, MAX).is_empty());
    }

    #[test]
    fn child_code_is_scoped_by_parent() {
        let criteria = Criteria::new()
            .with(Level::Province, "31", false)
            .with(Level::Regency, "01", false);
        let ds = dataset();
        let out = filter(&ds, &criteria, MAX);
        let regencies: Vec<&str> = out.iter().map(|r| r.name(Level::Regency)).collect();
        assert_eq!(regencies, vec!["JAKARTA SELATAN", "JAKARTA SELATAN"]);
    }

    #[test]
    fn exact_flag_requires_whole_name() {
        let loose = Criteria::new().with(Level::Regency, "jakarta", false);
        assert_eq!(filter(&dataset(), &loose, MAX).len(), 3);

        let exact = Criteria::new().with(Level::Regency, "jakarta", true);
        assert!(filter(&dataset(), &exact, MAX).is_empty());

        let exact = Criteria::new().with(Level::Regency, "Jakarta Timur", true);
        assert_eq!(villages(&filter(&dataset(), &exact, MAX)), vec!["BALI MESTER"]);
    }

    #[test]
    fn levels_narrow_in_sequence() {
        let criteria = Criteria::new()
            .with(Level::Regency, "selatan", false)
            .with(Level::Village, "duri", false);
        assert_eq!(villages(&filter(&dataset(), &criteria, MAX)), vec!["BUKIT DURI"]);

        let criteria = criteria.with(Level::Province, "jawa", false);
        assert!(filter(&dataset(), &criteria, MAX).is_empty());
    }

    #[test]
    fn input_is_truncated_before_matching() {
        let long_name = "A".repeat(50);
        let ds = Dataset::from_rows(vec![row(
            ["11", "01", "001", "001"],
            ["ACEH", "SIMEULUE", "TEUPAH", long_name.as_str()],
        )]);
        let input = format!("{}zzz", "a".repeat(50));
        let criteria = Criteria::new().with(Level::Village, input, false);
        assert_eq!(filter(&ds, &criteria, MAX).len(), 1);
    }

    #[test]
    fn no_criteria_passes_everything() {
        let criteria = Criteria::new();
        assert!(criteria.is_empty());
        assert_eq!(filter(&dataset(), &criteria, MAX).len(), 5);
    }

    #[test]
    fn expansion_target_follows_deepest_input() {
        assert_eq!(Criteria::new().expansion_target(), None);
        let c = Criteria::new().with(Level::Province, "31", false);
        assert_eq!(c.expansion_target(), Some(Level::Regency));
        let c = c.with(Level::District, "tebet", false);
        assert_eq!(c.expansion_target(), Some(Level::Village));
        let c = c.with(Level::Village, "duri", false);
        assert_eq!(c.expansion_target(), None);
    }
}
