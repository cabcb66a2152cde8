//! wilayah — Master Wilayah
//!
//! Lookup service over Indonesia's four-level administrative hierarchy
//! (province, regency, district, village). The engine lives in
//! [`wilayah_core`]; the HTTP shell and file watcher in [`wilayah_serve`].
//! This crate re-exports both so integration tests and benches import one
//! path.
//!
//! # Architecture
//!
//! ```text
//! CSV ──► Dataset ──► Catalog ──┬──► suggest  ──► GET /{level}
//!            ▲                  └──► search   ──► GET /search
//!            └── reload (POST /reload, file watcher)
//! ```

pub use wilayah_core;
pub use wilayah_serve;

pub use wilayah_core::{
    AncestorCodes, Catalog, CatalogSettings, CatalogStats, Criteria, Dataset, HierarchyRow, Level,
    LoadError, Projection, SearchOutcome, SearchStatus, Suggestion,
};
