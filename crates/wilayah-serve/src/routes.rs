//! Axum route handlers.
//!
//! Queries are fast in-memory scans and run directly on the async worker.
//! Reload reads the source file, so it moves to the blocking pool.

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::header;
use axum::response::IntoResponse;
use axum::Json;

use wilayah_core::{CatalogStats, Suggestion};

use crate::error::{ApiError, ApiResult};
use crate::models::{HealthResponse, SearchParams, SearchResponse, SuggestParams};
use crate::state::AppState;

/// `GET /health`
pub async fn health() -> impl IntoResponse {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// `GET /search`: the result table.
///
/// Always 200; the body's `status` distinguishes no dataset, awaiting input,
/// no matches and success.
pub async fn search(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchParams>,
) -> impl IntoResponse {
    let criteria = params.criteria();
    let outcome = state.catalog.search(&criteria, params.expand);
    tracing::debug!(status = ?outcome.status(), expand = params.expand, "search");

    (
        [(
            header::CACHE_CONTROL,
            format!("public, max-age={}", state.cache_max_age_secs),
        )],
        Json(SearchResponse::new(&outcome, &criteria)),
    )
}

/// `GET /{level}`: autocomplete candidates. Unknown levels return `[]`.
pub async fn suggest(
    State(state): State<Arc<AppState>>,
    Path(level): Path<String>,
    Query(params): Query<SuggestParams>,
) -> Json<Vec<Suggestion>> {
    let found = state
        .catalog
        .suggest(&level, &params.query, &params.ancestors());
    Json(found.as_ref().clone())
}

/// `GET /stats`
pub async fn stats(State(state): State<Arc<AppState>>) -> Json<CatalogStats> {
    Json(state.catalog.stats())
}

/// `POST /reload`: re-read the source file and clear the suggestion cache.
///
/// A failed reload leaves the service answering "no dataset" and reports 503.
pub async fn reload(State(state): State<Arc<AppState>>) -> ApiResult<Json<CatalogStats>> {
    let catalog = Arc::clone(&state.catalog);
    let result = tokio::task::spawn_blocking(move || catalog.reload()).await?;
    match result {
        Ok(stats) => {
            tracing::info!(rows = stats.rows, generation = stats.generation, "reloaded");
            Ok(Json(stats))
        }
        Err(err) => Err(ApiError::unavailable(format!("reload failed: {err}"))),
    }
}
