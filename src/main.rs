use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;
use wilayah_core::config::Config;
use wilayah_core::{Catalog, CatalogSettings};
use wilayah_serve::state::AppState;

#[derive(Parser)]
#[command(name = "wilayah", about = "Master Wilayah — region code lookup server")]
struct Cli {
    /// Config file to read instead of ~/.config/wilayah/config.toml.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Region CSV to serve (overrides [data] path).
    #[arg(long)]
    data: Option<PathBuf>,

    /// Listen address (overrides [server] bind).
    #[arg(long)]
    bind: Option<String>,

    /// Reload automatically when the data file changes.
    #[arg(long)]
    watch: bool,

    /// Log at debug level by default.
    #[arg(long)]
    debug: bool,

    /// Write logs to this file instead of stderr.
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn init_logging(cli: &Cli) -> anyhow::Result<()> {
    let default = if cli.debug { "debug" } else { "info" };
    let filter = EnvFilter::try_from_env("RUST_LOG").unwrap_or_else(|_| EnvFilter::new(default));

    match &cli.log_file {
        Some(path) => {
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("opening log file {}", path.display()))?;
            tracing_subscriber::fmt()
                .with_writer(std::sync::Mutex::new(file))
                .with_ansi(false)
                .with_env_filter(filter)
                .init();
        }
        None => tracing_subscriber::fmt().with_env_filter(filter).init(),
    }
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(&cli)?;

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    if let Some(data) = cli.data {
        config.data.path = data;
    }
    if let Some(bind) = cli.bind {
        config.server.bind = bind;
    }
    if cli.watch {
        config.watch.enabled = true;
    }

    let (catalog, load_error) = Catalog::open(&config.data.path, CatalogSettings::from(&config));
    if let Some(err) = &load_error {
        tracing::warn!(error = %err, "starting with an empty dataset");
    }
    let catalog = Arc::new(catalog);

    let _watch = if config.watch.enabled {
        let debounce = Duration::from_millis(config.watch.debounce_ms);
        Some(wilayah_serve::watch::spawn(
            Arc::clone(&catalog),
            &config.data.path,
            debounce,
        )?)
    } else {
        None
    };

    let app = wilayah_serve::build_app(AppState::new(catalog, &config));
    let listener = tokio::net::TcpListener::bind(&config.server.bind)
        .await
        .with_context(|| format!("binding {}", config.server.bind))?;
    tracing::info!(bind = %config.server.bind, data = %config.data.path.display(), "wilayah listening");

    axum::serve(listener, app).await?;
    Ok(())
}
