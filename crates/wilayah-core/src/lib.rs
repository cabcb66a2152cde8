//! wilayah-core — hierarchical lookup over Indonesian administrative regions.
//!
//! This crate exposes the query engine layers as public modules, plus the
//! shared types used across all of them.
//!
//! # Architecture
//!
//! ```text
//! Store ──► Suggest ──────────────► caller (autocomplete)
//!   │
//!   └─────► Filter ──► Projector ──► caller (result table)
//! ```
//!
//! The [`Catalog`] ties the layers together: it owns the reloadable
//! [`Dataset`] handle and the bounded suggestion cache. Every query is a
//! synchronous scan over immutable data, safe to run from any thread.

pub mod cache;
pub mod catalog;
pub mod config;
pub mod error;
pub mod filter;
pub mod highlight;
pub mod projector;
pub mod store;
pub mod suggest;
pub mod types;

pub use catalog::{Catalog, CatalogSettings, CatalogStats, SearchOutcome, SearchStatus};
pub use error::LoadError;
pub use filter::{Criteria, LevelCriterion};
pub use projector::{Cell, ProjectedRow, Projection};
pub use store::Dataset;
pub use suggest::{AncestorCodes, Suggestion};
pub use types::{HierarchyRow, Level};
