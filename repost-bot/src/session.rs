//! Per-user submission sessions.
//!
//! A user missing from the map is [`SessionState::Idle`]; at most one session exists per user.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionState {
    #[default]
    Idle,
    /// `/fill` accepted; the user's next message is the post.
    AwaitingPost,
}

/// Shared map of user id → session state. Cloning shares the same map.
#[derive(Clone, Default)]
pub struct SessionMap {
    inner: Arc<RwLock<HashMap<i64, SessionState>>>,
}

impl SessionMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn state(&self, user_id: i64) -> SessionState {
        self.inner
            .read()
            .await
            .get(&user_id)
            .copied()
            .unwrap_or_default()
    }

    pub async fn begin_submission(&self, user_id: i64) {
        self.inner
            .write()
            .await
            .insert(user_id, SessionState::AwaitingPost);
    }

    /// Forces the user back to Idle.
    pub async fn reset(&self, user_id: i64) {
        self.inner.write().await.remove(&user_id);
    }

    /// Ends the user's session and returns the state it was in.
    pub async fn take(&self, user_id: i64) -> SessionState {
        self.inner
            .write()
            .await
            .remove(&user_id)
            .unwrap_or_default()
    }

    /// Number of users currently mid-submission.
    pub async fn active_count(&self) -> usize {
        self.inner.read().await.len()
    }
}
