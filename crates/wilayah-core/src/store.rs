//! Store — immutable in-memory table of [`HierarchyRow`] values.
//!
//! A [`Dataset`] is built once from a CSV source and never mutated. It only
//! knows how to hold rows and hand them out; all matching lives in
//! [`suggest`](crate::suggest) and [`filter`](crate::filter).

use crate::error::LoadError;
use crate::types::{HierarchyRow, Level};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::collections::HashSet;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Every header name the loader understands. A source must name at least one.
const KNOWN_COLUMNS: &[&str] = &[
    "kode_prov",
    "nama_prov",
    "kode_kab",
    "kab_nama",
    "kode_kec",
    "kec_nama",
    "kode_desa",
    "desa_nama",
    "province_code",
    "province_name",
    "regency_code",
    "regency_name",
    "district_code",
    "district_name",
    "village_code",
    "village_name",
];

/// One raw CSV record. Missing columns and empty cells both become `""`.
#[derive(Debug, Default, Deserialize)]
struct SourceRecord {
    #[serde(default, alias = "province_code")]
    kode_prov: String,
    #[serde(default, alias = "province_name")]
    nama_prov: String,
    #[serde(default, alias = "regency_code")]
    kode_kab: String,
    #[serde(default, alias = "regency_name")]
    kab_nama: String,
    #[serde(default, alias = "district_code")]
    kode_kec: String,
    #[serde(default, alias = "district_name")]
    kec_nama: String,
    #[serde(default, alias = "village_code")]
    kode_desa: String,
    #[serde(default, alias = "village_name")]
    desa_nama: String,
}

impl SourceRecord {
    fn into_row(self) -> HierarchyRow {
        HierarchyRow::new(
            [
                pad_code(&self.kode_prov, Level::Province.code_width()),
                pad_code(&self.kode_kab, Level::Regency.code_width()),
                pad_code(&self.kode_kec, Level::District.code_width()),
                pad_code(&self.kode_desa, Level::Village.code_width()),
            ],
            [self.nama_prov, self.kab_nama, self.kec_nama, self.desa_nama],
        )
    }
}

/// Trim `raw` and left-pad it with `'0'` to `width` characters. Longer codes
/// are kept as-is, never truncated.
pub fn pad_code(raw: &str, width: usize) -> String {
    let trimmed = raw.trim();
    let len = trimmed.chars().count();
    if len >= width {
        return trimmed.to_string();
    }
    let mut padded = "0".repeat(width - len);
    padded.push_str(trimmed);
    padded
}

/// The loaded hierarchy table plus where and when it came from.
#[derive(Debug, Clone)]
pub struct Dataset {
    rows: Vec<HierarchyRow>,
    source: Option<PathBuf>,
    loaded_at: DateTime<Utc>,
}

impl Dataset {
    /// An explicitly empty dataset. Queries against it report "no dataset".
    pub fn empty() -> Self {
        Self::from_rows(Vec::new())
    }

    pub fn from_rows(rows: Vec<HierarchyRow>) -> Self {
        Self {
            rows,
            source: None,
            loaded_at: Utc::now(),
        }
    }

    /// Parse CSV from any reader. The header row is required; record length
    /// may vary.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, LoadError> {
        let mut csv = csv::ReaderBuilder::new()
            .flexible(true)
            .trim(csv::Trim::Headers)
            .from_reader(reader);

        let headers = csv.headers()?.clone();
        if !headers.iter().any(|h| KNOWN_COLUMNS.contains(&h)) {
            return Err(LoadError::UnrecognizedHeader {
                found: headers.iter().map(str::to_string).collect(),
            });
        }

        let width = headers.len();
        let mut rows = Vec::new();
        for record in csv.records() {
            let mut record = record?;
            // short rows read as empty trailing cells
            while record.len() < width {
                record.push_field("");
            }
            record.truncate(width);
            let source: SourceRecord = record.deserialize(Some(&headers))?;
            rows.push(source.into_row());
        }

        Ok(Self::from_rows(rows))
    }

    /// Load a CSV file from disk.
    pub fn load(path: &Path) -> Result<Self, LoadError> {
        let started = Instant::now();
        tracing::info!(path = %path.display(), "loading dataset");

        let file = std::fs::File::open(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let mut dataset = Self::from_reader(std::io::BufReader::new(file))?;
        dataset.source = Some(path.to_path_buf());

        tracing::info!(
            rows = dataset.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "dataset ready"
        );
        Ok(dataset)
    }

    /// Load `path`, substituting an empty dataset on any failure so the
    /// process stays servable. The error is logged, and also returned so the
    /// caller can report it.
    pub fn load_or_empty(path: &Path) -> (Self, Option<LoadError>) {
        match Self::load(path) {
            Ok(dataset) => {
                if dataset.is_empty() {
                    tracing::warn!(path = %path.display(), "dataset source has no rows");
                }
                (dataset, None)
            }
            Err(err) => {
                tracing::error!(path = %path.display(), error = %err, "failed to load dataset");
                let mut empty = Self::empty();
                empty.source = Some(path.to_path_buf());
                (empty, Some(err))
            }
        }
    }

    pub fn rows(&self) -> &[HierarchyRow] {
        &self.rows
    }

    /// Scan rows matching `predicate`, in source order.
    pub fn rows_where<'a, P>(&'a self, predicate: P) -> impl Iterator<Item = &'a HierarchyRow>
    where
        P: Fn(&HierarchyRow) -> bool,
    {
        self.rows.iter().filter(move |row| predicate(row))
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    pub fn loaded_at(&self) -> DateTime<Utc> {
        self.loaded_at
    }

    /// Number of distinct entities at `level`, counting each code under its
    /// full ancestry.
    pub fn distinct_count(&self, level: Level) -> usize {
        self.rows
            .iter()
            .map(|row| row.codes_through(level))
            .collect::<HashSet<_>>()
            .len()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
