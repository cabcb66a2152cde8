//! Reload trigger driven by filesystem events on the data file.
//!
//! The parent directory is watched rather than the file itself, because
//! editors and export tools usually replace the file by rename. Events are
//! debounced: a burst of writes causes a single reload once the directory
//! has been quiet for the debounce interval.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use notify::{EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use wilayah_core::Catalog;

/// Keeps the watcher alive; dropping it stops reloads.
pub struct WatchHandle {
    _watcher: RecommendedWatcher,
    task: JoinHandle<()>,
}

impl WatchHandle {
    pub fn abort(self) {
        self.task.abort();
    }
}

/// Whether `event` touches the file named `file_name`.
fn concerns(event: &notify::Event, file_name: &std::ffi::OsStr) -> bool {
    matches!(event.kind, EventKind::Create(_) | EventKind::Modify(_))
        && event
            .paths
            .iter()
            .any(|p| p.file_name() == Some(file_name))
}

fn watch_dir(path: &Path) -> PathBuf {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

/// Start watching `path` and reload `catalog` whenever it changes. Must be
/// called from within a Tokio runtime.
pub fn spawn(catalog: Arc<Catalog>, path: &Path, debounce: Duration) -> notify::Result<WatchHandle> {
    let file_name = path
        .file_name()
        .map(|n| n.to_os_string())
        .ok_or_else(|| notify::Error::generic("data path has no file name"))?;

    let (tx, mut rx) = mpsc::unbounded_channel::<()>();
    let mut watcher = notify::recommended_watcher(move |res: notify::Result<notify::Event>| {
        match res {
            Ok(event) if concerns(&event, &file_name) => {
                let _ = tx.send(());
            }
            Ok(_) => {}
            Err(err) => tracing::warn!(error = %err, "watch error"),
        }
    })?;

    let dir = watch_dir(path);
    watcher.watch(&dir, RecursiveMode::NonRecursive)?;
    tracing::info!(dir = %dir.display(), "watching data file for changes");

    let task = tokio::spawn(async move {
        while rx.recv().await.is_some() {
            // settle: keep absorbing events until a quiet interval passes
            while let Ok(Some(())) = tokio::time::timeout(debounce, rx.recv()).await {}

            let catalog = Arc::clone(&catalog);
            match tokio::task::spawn_blocking(move || catalog.reload()).await {
                Ok(Ok(stats)) => {
                    tracing::info!(rows = stats.rows, generation = stats.generation, "data file changed, reloaded");
                }
                Ok(Err(err)) => tracing::error!(error = %err, "reload after file change failed"),
                Err(err) => tracing::error!(error = %err, "reload task panicked"),
            }
        }
    });

    Ok(WatchHandle {
        _watcher: watcher,
        task,
    })
}
