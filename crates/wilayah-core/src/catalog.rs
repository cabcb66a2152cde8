//! Catalog — the shared, reloadable dataset handle and the two query entry
//! points callers use.
//!
//! The dataset itself is immutable. A reload builds a new [`Dataset`], swaps
//! the `Arc` under a short write lock, bumps the generation and clears the
//! suggestion cache. Queries clone the `Arc` out of the lock and scan without
//! holding it.

use crate::cache::BoundedCache;
use crate::config::{Config, SearchLimits};
use crate::error::LoadError;
use crate::filter::{filter, Criteria};
use crate::projector::{project, Projection};
use crate::store::Dataset;
use crate::suggest::{normalize_query, suggest, AncestorCodes, Suggestion};
use crate::types::Level;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

/// Engine knobs a [`Catalog`] is built with.
#[derive(Debug, Clone, Copy)]
pub struct CatalogSettings {
    pub limits: SearchLimits,
    pub cache_capacity: usize,
}

impl Default for CatalogSettings {
    fn default() -> Self {
        Self {
            limits: SearchLimits::default(),
            cache_capacity: 1024,
        }
    }
}

impl From<&Config> for CatalogSettings {
    fn from(config: &Config) -> Self {
        Self {
            limits: config.search,
            cache_capacity: config.cache.capacity,
        }
    }
}

/// Outcome of a result-table query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// The dataset is empty (never loaded, or the load failed).
    NoDataset,
    /// No level carries any input.
    AwaitingInput,
    /// Criteria were given but nothing matched.
    NoMatches,
    Found(Projection),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchStatus {
    NoDataset,
    AwaitingInput,
    NoMatches,
    Success,
}

impl SearchOutcome {
    pub fn status(&self) -> SearchStatus {
        match self {
            SearchOutcome::NoDataset => SearchStatus::NoDataset,
            SearchOutcome::AwaitingInput => SearchStatus::AwaitingInput,
            SearchOutcome::NoMatches => SearchStatus::NoMatches,
            SearchOutcome::Found(_) => SearchStatus::Success,
        }
    }
}

/// Summary of the current dataset and cache.
#[derive(Debug, Clone, Serialize)]
pub struct CatalogStats {
    pub rows: usize,
    pub provinces: usize,
    pub regencies: usize,
    pub districts: usize,
    pub villages: usize,
    pub generation: u64,
    pub source: Option<PathBuf>,
    pub loaded_at: DateTime<Utc>,
    pub cache_entries: usize,
    pub cache_capacity: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct SuggestionKey {
    generation: u64,
    level: Level,
    query: String,
    ancestors: AncestorCodes,
}

#[derive(Clone)]
struct Snapshot {
    dataset: Arc<Dataset>,
    generation: u64,
}

pub struct Catalog {
    current: RwLock<Snapshot>,
    source: Option<PathBuf>,
    limits: SearchLimits,
    cache: BoundedCache<SuggestionKey, Arc<Vec<Suggestion>>>,
}

impl Catalog {
    /// Load `path` at startup. A failed load leaves the catalog serving an
    /// empty dataset and hands the error back next to it; the catalog keeps
    /// `path` as its source either way, so a later reload can recover.
    pub fn open(path: &Path, settings: CatalogSettings) -> (Self, Option<LoadError>) {
        let (dataset, err) = Dataset::load_or_empty(path);
        let mut catalog = Self::from_dataset(dataset, settings);
        catalog.source = Some(path.to_path_buf());
        (catalog, err)
    }

    pub fn from_dataset(dataset: Dataset, settings: CatalogSettings) -> Self {
        Self {
            current: RwLock::new(Snapshot {
                dataset: Arc::new(dataset),
                generation: 0,
            }),
            source: None,
            limits: settings.limits,
            cache: BoundedCache::new(settings.cache_capacity),
        }
    }

    /// The dataset currently being served.
    pub fn dataset(&self) -> Arc<Dataset> {
        self.snapshot().dataset
    }

    pub fn generation(&self) -> u64 {
        self.snapshot().generation
    }

    pub fn limits(&self) -> &SearchLimits {
        &self.limits
    }

    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    /// Autocomplete by caller level name. Unknown names yield an empty list.
    pub fn suggest(
        &self,
        level_name: &str,
        query: &str,
        ancestors: &AncestorCodes,
    ) -> Arc<Vec<Suggestion>> {
        match Level::parse(level_name) {
            Some(level) => self.suggest_level(level, query, ancestors),
            None => {
                tracing::debug!(level = level_name, "suggestion for unknown level");
                Arc::new(Vec::new())
            }
        }
    }

    /// Autocomplete for `level`, memoised per dataset generation.
    pub fn suggest_level(
        &self,
        level: Level,
        query: &str,
        ancestors: &AncestorCodes,
    ) -> Arc<Vec<Suggestion>> {
        let snapshot = self.snapshot();
        let key = SuggestionKey {
            generation: snapshot.generation,
            level,
            query: normalize_query(query),
            ancestors: ancestors.scoped_to(level),
        };

        if let Some(hit) = self.cache.get(&key) {
            tracing::debug!(%level, query = %key.query, "suggestion cache hit");
            return hit;
        }

        let computed = Arc::new(suggest(
            &snapshot.dataset,
            level,
            &key.query,
            &key.ancestors,
            self.limits.suggestion_limit,
        ));
        tracing::debug!(%level, query = %key.query, results = computed.len(), "suggestion cache miss");
        self.cache.insert(key, Arc::clone(&computed));
        computed
    }

    /// Run a result-table query.
    pub fn search(&self, criteria: &Criteria, expand: bool) -> SearchOutcome {
        let dataset = self.dataset();
        if dataset.is_empty() {
            return SearchOutcome::NoDataset;
        }
        if criteria.is_empty() {
            return SearchOutcome::AwaitingInput;
        }

        let rows = filter(&dataset, criteria, self.limits.input_max_chars);
        if rows.is_empty() {
            return SearchOutcome::NoMatches;
        }

        let projection = project(&rows, criteria, expand, &self.limits);
        tracing::debug!(
            view_level = projection.view_level.depth(),
            total = projection.total_before_limit,
            returned = projection.rows.len(),
            "search projected"
        );
        SearchOutcome::Found(projection)
    }

    /// Swap in a new dataset and drop every cached suggestion.
    pub fn replace(&self, dataset: Dataset) {
        let generation = {
            let mut current = self
                .current
                .write()
                .unwrap_or_else(|poisoned| poisoned.into_inner());
            current.generation += 1;
            current.dataset = Arc::new(dataset);
            current.generation
        };
        self.cache.clear();
        tracing::info!(generation, "dataset replaced, suggestion cache cleared");
    }

    /// Reload from the source file. On failure the catalog serves an empty
    /// dataset, exactly as a failed startup load would, and the error is
    /// returned for reporting.
    pub fn reload(&self) -> Result<CatalogStats, LoadError> {
        let path = self.source.as_deref().ok_or(LoadError::NoSource)?;
        let (dataset, err) = Dataset::load_or_empty(path);
        self.replace(dataset);
        match err {
            Some(err) => Err(err),
            None => Ok(self.stats()),
        }
    }

    pub fn stats(&self) -> CatalogStats {
        let Snapshot {
            dataset,
            generation,
        } = self.snapshot();
        CatalogStats {
            rows: dataset.len(),
            provinces: dataset.distinct_count(Level::Province),
            regencies: dataset.distinct_count(Level::Regency),
            districts: dataset.distinct_count(Level::District),
            villages: dataset.distinct_count(Level::Village),
            generation,
            source: dataset.source().map(Path::to_path_buf),
            loaded_at: dataset.loaded_at(),
            cache_entries: self.cache.len(),
            cache_capacity: self.cache.capacity(),
        }
    }

    fn snapshot(&self) -> Snapshot {
        self.current
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
