//! Shared application state for the Axum server.

use std::sync::Arc;
use wilayah_core::config::Config;
use wilayah_core::Catalog;

/// State passed to every handler via Axum `State`.
///
/// The [`Catalog`] is internally synchronised, so handlers share it through a
/// plain `Arc` with no outer lock.
pub struct AppState {
    pub catalog: Arc<Catalog>,
    /// `max-age` advertised on `/search` responses.
    pub cache_max_age_secs: u64,
}

impl AppState {
    pub fn new(catalog: Arc<Catalog>, config: &Config) -> Arc<Self> {
        Arc::new(Self {
            catalog,
            cache_max_age_secs: config.server.cache_max_age_secs,
        })
    }
}
