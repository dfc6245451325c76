//! Cancellable pending-reply tasks.
//!
//! A reply is delay-then-select running on the runtime, keyed by the
//! conversation it belongs to. Keeping the abort handle means a session
//! that is closed while a reply is pending can suppress the late result
//! deterministically instead of racing it.

use std::collections::HashMap;
use std::sync::Mutex;

use tokio::task::{AbortHandle, JoinHandle};
use tracing::debug;

/// Registry of in-flight reply tasks, keyed by conversation ID.
///
/// At most one reply per conversation is pending at a time; spawning a new
/// one for the same key cancels the previous task first.
#[derive(Debug, Default)]
pub struct PendingReplies {
    tasks: Mutex<HashMap<String, AbortHandle>>,
}

impl PendingReplies {
    pub fn new() -> Self {
        Self::default()
    }

    /// Spawn the delay-then-generate task for `key`.
    ///
    /// The returned handle resolves to the reply text, or to a cancelled
    /// `JoinError` if [`cancel`](Self::cancel) runs first.
    pub fn spawn(&self, key: &str, category: String) -> JoinHandle<&'static str> {
        let handle = tokio::spawn(async move {
            crate::thinking_delay().await;
            crate::generate(&category)
        });

        let mut tasks = self.tasks.lock().expect("pending-reply lock poisoned");
        if let Some(previous) = tasks.insert(key.to_string(), handle.abort_handle()) {
            previous.abort();
            debug!(key, "superseded pending reply");
        }
        handle
    }

    /// Abort the pending reply for `key`, if any. No-op otherwise.
    pub fn cancel(&self, key: &str) {
        let mut tasks = self.tasks.lock().expect("pending-reply lock poisoned");
        if let Some(handle) = tasks.remove(key) {
            handle.abort();
            debug!(key, "cancelled pending reply");
        }
    }

    /// Forget the entry for `key` once its task has completed.
    pub fn clear(&self, key: &str) {
        let mut tasks = self.tasks.lock().expect("pending-reply lock poisoned");
        tasks.remove(key);
    }

    /// Whether a reply is currently pending for `key`.
    pub fn is_pending(&self, key: &str) -> bool {
        let tasks = self.tasks.lock().expect("pending-reply lock poisoned");
        tasks.contains_key(key)
    }
}
