// Application state module
// Immutable configuration shared by every connection task

use std::sync::atomic::{AtomicUsize, Ordering};

use super::types::Config;

/// Application state
///
/// Request handling itself is stateless; this only carries what the
/// connection layer needs (config and the live connection count).
pub struct AppState {
    pub config: Config,
    pub active_connections: AtomicUsize,
}

impl AppState {
    pub const fn new(config: Config) -> Self {
        Self {
            config,
            active_connections: AtomicUsize::new(0),
        }
    }

    pub fn access_log_enabled(&self) -> bool {
        self.config.logging.access_log
    }

    pub fn connection_count(&self) -> usize {
        self.active_connections.load(Ordering::SeqCst)
    }
}
