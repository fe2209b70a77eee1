//! View invalidation signal. Writers announce which page path went stale;
//! anything rendering that path subscribes and refreshes.

use tokio::sync::broadcast;
use tracing::debug;

const CHANNEL_CAPACITY: usize = 64;

#[derive(Clone)]
pub struct Revalidator {
    tx: broadcast::Sender<String>,
}

impl Revalidator {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(CHANNEL_CAPACITY);
        Self { tx }
    }

    /// Marks `path` stale. A signal with no subscribers is dropped.
    pub fn revalidate_path(&self, path: &str) {
        let receivers = self.tx.send(path.to_string()).unwrap_or(0);
        debug!(path, receivers, "Path revalidated");
    }

    pub fn subscribe(&self) -> broadcast::Receiver<String> {
        self.tx.subscribe()
    }
}

impl Default for Revalidator {
    fn default() -> Self {
        Self::new()
    }
}

/// Logs every invalidation until the sender side is gone.
pub async fn log_invalidations(mut rx: broadcast::Receiver<String>) {
    loop {
        match rx.recv().await {
            Ok(path) => debug!(path = %path, "View invalidated"),
            Err(broadcast::error::RecvError::Lagged(skipped)) => {
                debug!(skipped, "Invalidation listener lagged")
            }
            Err(broadcast::error::RecvError::Closed) => break,
        }
    }
}
