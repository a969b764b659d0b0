// File: src/hot_reload.rs
// Purpose: Watch static assets and trigger livereload in dev

use anyhow::Result;
use notify::{Event, EventKind, RecursiveMode, Watcher};
use std::path::PathBuf;
use tokio::sync::broadcast;
use tracing::{error, info, warn};

/// Represents a changed static asset
#[derive(Debug, Clone)]
pub struct AssetChange {
    pub path: PathBuf,
}

/// Watcher that monitors the static asset directories
pub struct AssetWatcher {
    tx: broadcast::Sender<AssetChange>,
    _watcher: notify::RecommendedWatcher,
}

impl AssetWatcher {
    pub fn new(watch_paths: Vec<PathBuf>) -> Result<Self> {
        let (tx, _) = broadcast::channel(100);
        let tx_clone = tx.clone();

        let mut watcher = notify::recommended_watcher(move |res: Result<Event, notify::Error>| {
            match res {
                Ok(event) => {
                    if matches!(event.kind, EventKind::Modify(_) | EventKind::Create(_)) {
                        for path in event.paths {
                            let _ = tx_clone.send(AssetChange { path });
                        }
                    }
                }
                Err(e) => error!("Watch error: {:?}", e),
            }
        })?;

        for path in watch_paths {
            if path.exists() {
                watcher.watch(&path, RecursiveMode::Recursive)?;
                info!("Watching: {:?}", path);
            } else {
                warn!("Watch path does not exist: {:?}", path);
            }
        }

        Ok(Self {
            tx,
            _watcher: watcher,
        })
    }

    /// Subscribe to asset change events
    pub fn subscribe(&self) -> broadcast::Receiver<AssetChange> {
        self.tx.subscribe()
    }
}

/// Create a watcher over the configured watch paths
pub fn create_watcher(paths: &[String]) -> Result<AssetWatcher> {
    AssetWatcher::new(paths.iter().map(PathBuf::from).collect())
}
