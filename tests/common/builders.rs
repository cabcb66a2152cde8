//! Test builders — ergonomic constructors for rows, datasets and catalogs.
//!
//! These builders are designed for readability in test assertions, not for
//! production use. They panic on invalid input rather than returning `Result`.

use std::io::Write;
use std::sync::Arc;

use tempfile::NamedTempFile;
use wilayah::{Catalog, CatalogSettings, Dataset, HierarchyRow};

// ---------------------------------------------------------------------------
// RowBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for [`HierarchyRow`] fixtures. Codes are given already
/// padded; names default to a readable placeholder derived from the code.
///
/// ```rust
/// let row = RowBuilder::new("31", "01", "010", "001")
///     .names("DKI JAKARTA", "JAKARTA SELATAN", "KEBAYORAN BARU", "SENAYAN")
///     .build();
/// ```
pub struct RowBuilder {
    codes: [String; 4],
    names: [String; 4],
}

impl RowBuilder {
    pub fn new(prov: &str, kab: &str, kec: &str, desa: &str) -> Self {
        Self {
            codes: [prov, kab, kec, desa].map(String::from),
            names: [
                format!("PROV {prov}"),
                format!("KAB {prov}.{kab}"),
                format!("KEC {prov}.{kab}.{kec}"),
                format!("DESA {prov}.{kab}.{kec}.{desa}"),
            ],
        }
    }

    pub fn names(mut self, prov: &str, kab: &str, kec: &str, desa: &str) -> Self {
        self.names = [prov, kab, kec, desa].map(String::from);
        self
    }

    pub fn build(self) -> HierarchyRow {
        HierarchyRow::new(self.codes, self.names)
    }
}

/// Shorthand for a fully named row.
pub fn row(codes: [&str; 4], names: [&str; 4]) -> HierarchyRow {
    HierarchyRow::new(codes.map(String::from), names.map(String::from))
}

// ---------------------------------------------------------------------------
// Datasets and catalogs
// ---------------------------------------------------------------------------

/// `n` villages under a single province/regency/district, codes 001.. in order.
pub fn villages_under_one_district(n: usize) -> Dataset {
    Dataset::from_rows(
        (1..=n)
            .map(|i| RowBuilder::new("31", "01", "010", &format!("{i:03}")).build())
            .collect(),
    )
}

/// A synthetic grid: `provinces × regencies × districts × villages` rows.
pub fn synthetic_dataset(provinces: usize, regencies: usize, districts: usize, villages: usize) -> Dataset {
    let mut rows = Vec::with_capacity(provinces * regencies * districts * villages);
    for p in 11..11 + provinces {
        for k in 1..=regencies {
            for d in 1..=districts {
                for v in 1..=villages {
                    rows.push(
                        RowBuilder::new(
                            &format!("{p:02}"),
                            &format!("{k:02}"),
                            &format!("{d:03}"),
                            &format!("{v:03}"),
                        )
                        .build(),
                    );
                }
            }
        }
    }
    Dataset::from_rows(rows)
}

pub fn catalog_of(dataset: Dataset) -> Catalog {
    Catalog::from_dataset(dataset, CatalogSettings::default())
}

pub fn shared_catalog_of(dataset: Dataset) -> Arc<Catalog> {
    Arc::new(catalog_of(dataset))
}

// ---------------------------------------------------------------------------
// Files on disk
// ---------------------------------------------------------------------------

/// Write `contents` to a fresh temp file with a `.csv` suffix. The file is
/// removed when the returned handle drops.
pub fn csv_file(contents: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".csv")
        .tempfile()
        .expect("create temp csv");
    file.write_all(contents.as_bytes()).expect("write temp csv");
    file.flush().expect("flush temp csv");
    file
}
