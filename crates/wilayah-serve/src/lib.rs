//! wilayah-serve — HTTP shell over a [`wilayah_core::Catalog`].
//!
//! Routes:
//!
//! | method | path       | purpose                                  |
//! |--------|------------|------------------------------------------|
//! | GET    | `/health`  | liveness                                 |
//! | GET    | `/search`  | result table for the supplied criteria   |
//! | GET    | `/stats`   | row and cache counts                     |
//! | POST   | `/reload`  | re-read the source file                  |
//! | GET    | `/{level}` | autocomplete candidates for one level    |

pub mod error;
pub mod models;
pub mod routes;
pub mod state;
pub mod watch;

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use state::AppState;

/// Build the Axum router around a shared [`AppState`].
///
/// ```no_run
/// use std::sync::Arc;
/// use wilayah_core::config::Config;
/// use wilayah_core::{Catalog, CatalogSettings};
/// use wilayah_serve::{build_app, state::AppState};
///
/// #[tokio::main]
/// async fn main() {
///     let config = Config::defaults();
///     let (catalog, _load_error) = Catalog::open(&config.data.path, CatalogSettings::from(&config));
///     let catalog = Arc::new(catalog);
///     let app = build_app(AppState::new(catalog, &config));
///     let listener = tokio::net::TcpListener::bind("127.0.0.1:8080").await.unwrap();
///     axum::serve(listener, app).await.unwrap();
/// }
/// ```
pub fn build_app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(routes::health))
        .route("/search", get(routes::search))
        .route("/stats", get(routes::stats))
        .route("/reload", post(routes::reload))
        .route("/{level}", get(routes::suggest))
        .with_state(state)
}
