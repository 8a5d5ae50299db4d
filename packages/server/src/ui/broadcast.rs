//! World-state fan-out to connected sessions.
//!
//! The payload is rendered and serialized once per broadcast, then
//! delivery is attempted for every session independently. Enqueueing is
//! non-blocking: a session whose bounded queue is full skips this payload,
//! and a closed queue is left for the disconnect path to reap. Either way
//! the remaining sessions are unaffected.

use std::sync::Arc;

use tokio::sync::mpsc::error::TrySendError;

use crate::domain::{SessionId, WorldRepository};
use crate::infrastructure::dto::websocket::WorldStateMessage;

/// Fan-out engine for world-state documents
#[derive(Clone)]
pub struct Broadcaster {
    repository: Arc<dyn WorldRepository>,
}

impl Broadcaster {
    /// Create a broadcaster over one repository
    pub fn new(repository: Arc<dyn WorldRepository>) -> Self {
        Self { repository }
    }

    /// Render the current world state from per-resource snapshots.
    pub async fn render_world_state(&self) -> WorldStateMessage {
        let log = self.repository.log_snapshot().await;
        let registry = self.repository.registry_snapshot().await;
        WorldStateMessage::render(log, registry)
    }

    /// Broadcast the current world state to every session, the sender of
    /// the triggering frame included.
    pub async fn broadcast_all(&self) {
        self.broadcast(None).await;
    }

    /// Broadcast the current world state to every session except one,
    /// used for a newcomer that already received its private snapshot.
    pub async fn broadcast_to_others(&self, exclude: &SessionId) {
        self.broadcast(Some(exclude)).await;
    }

    async fn broadcast(&self, exclude: Option<&SessionId>) {
        let payload = serde_json::to_string(&self.render_world_state().await).unwrap();
        let handles = self.repository.delivery_handles().await;

        let mut delivered = 0usize;
        for (id, sender) in handles {
            if exclude.is_some_and(|excluded| excluded == &id) {
                continue;
            }
            match sender.try_send(payload.clone()) {
                Ok(()) => delivered += 1,
                Err(TrySendError::Full(_)) => {
                    tracing::warn!("Delivery queue full for session '{}', dropping payload", id);
                }
                Err(TrySendError::Closed(_)) => {
                    tracing::warn!(
                        "Delivery queue closed for session '{}', awaiting disconnect cleanup",
                        id
                    );
                }
            }
        }
        tracing::debug!("Broadcasted world state to {} session(s)", delivered);
    }
}
