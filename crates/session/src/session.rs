use super::*;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Handle to the one process-wide session.
///
/// Cheap to clone; every clone shares the same [`State`] behind a single
/// lock. Components receive a handle explicitly instead of reaching for a
/// global.
#[derive(Debug, Clone)]
pub struct Session(Arc<Mutex<State>>);

impl Session {
    /// Creates the session. Called once at engine startup.
    pub fn init(capacity: usize) -> Self {
        log::debug!("[session] initialized with capacity {}", capacity);
        Self(Arc::new(Mutex::new(State::new(capacity))))
    }
    /// Runs `f` with exclusive access to the session state.
    /// The closure is synchronous so the lock is never held across an await.
    pub async fn with_lock<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut State) -> R,
    {
        let mut state = self.0.lock().await;
        f(&mut *state)
    }
    /// Holds the lock directly, to stall the engine while a test observes it.
    #[cfg(test)]
    pub(crate) async fn lock(&self) -> tokio::sync::MutexGuard<'_, State> {
        self.0.lock().await
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::init(ezd_core::REGISTRY_CAPACITY)
    }
}
