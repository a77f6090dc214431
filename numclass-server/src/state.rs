use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::sync::RwLock;

/// Which classifier client queries run against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Prime,
    PowerOfTwo,
}

/// State shared by every connection: the active mode and the live
/// connection count. One instance per server, behind an `Arc`.
#[derive(Debug, Default)]
pub struct ServerState {
    mode: RwLock<Mode>,
    connected: AtomicUsize,
}

impl ServerState {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn mode(&self) -> Mode {
        *self.mode.read().await
    }

    pub async fn set_mode(&self, mode: Mode) {
        *self.mode.write().await = mode;
    }

    /// Registers a new connection; returns the count including it.
    pub fn client_connected(&self) -> usize {
        self.connected.fetch_add(1, Ordering::Relaxed) + 1
    }

    /// Unregisters a closed connection; returns the remaining count.
    pub fn client_disconnected(&self) -> usize {
        self.connected.fetch_sub(1, Ordering::Relaxed) - 1
    }
}
