use crate::core::DiscoveryController;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use uuid::Uuid;

/// A discovery controller shared between request handlers and its catalog fetch
pub type SharedController = Arc<Mutex<DiscoveryController>>;

/// In-memory store of discovery sessions
///
/// Each session owns one controller. Sessions idle for longer than the
/// configured TTL are evicted, as are the oldest ones once capacity is reached.
pub struct SessionStore {
    sessions: moka::future::Cache<Uuid, SharedController>,
    revert_draft_on_dismiss: bool,
}

impl SessionStore {
    /// Create a new session store
    pub fn new(max_sessions: u64, ttl_secs: u64, revert_draft_on_dismiss: bool) -> Self {
        let sessions = moka::future::Cache::builder()
            .max_capacity(max_sessions)
            .time_to_idle(Duration::from_secs(ttl_secs))
            .build();

        Self {
            sessions,
            revert_draft_on_dismiss,
        }
    }

    /// Register a new session whose catalog fetch is about to start
    pub async fn create(&self) -> (Uuid, SharedController) {
        let mut controller = DiscoveryController::new()
            .with_revert_draft_on_dismiss(self.revert_draft_on_dismiss);
        controller.begin_loading();

        let id = Uuid::new_v4();
        let shared = Arc::new(Mutex::new(controller));
        self.sessions.insert(id, shared.clone()).await;

        tracing::debug!("Session created: {}", id);
        (id, shared)
    }

    pub async fn get(&self, id: &Uuid) -> Option<SharedController> {
        self.sessions.get(id).await
    }

    /// Drop a session. Returns whether it existed.
    pub async fn remove(&self, id: &Uuid) -> bool {
        let removed = self.sessions.remove(id).await.is_some();
        if removed {
            tracing::debug!("Session removed: {}", id);
        }
        removed
    }

    /// Get session statistics
    pub async fn stats(&self) -> SessionStats {
        self.sessions.run_pending_tasks().await;
        SessionStats {
            active_sessions: self.sessions.entry_count(),
        }
    }
}

/// Session statistics
#[derive(Debug, Clone, Serialize)]
pub struct SessionStats {
    pub active_sessions: u64,
}
