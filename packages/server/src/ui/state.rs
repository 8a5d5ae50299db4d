//! Server state and connection delivery handles.

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::domain::WorldRepository;

use super::broadcast::Broadcaster;

/// Capacity of each session's outbound delivery queue. A session that
/// falls this many payloads behind starts dropping broadcasts.
pub const DELIVERY_QUEUE_CAPACITY: usize = 32;

/// Outbound delivery handle for one session.
///
/// The bounded queue is drained by the connection's writer task, so a
/// stalled socket never blocks the broadcaster.
#[derive(Clone)]
pub struct ClientHandle {
    /// Payload queue for this session only
    pub sender: mpsc::Sender<String>,
}

impl ClientHandle {
    /// Wrap a delivery queue sender
    pub fn new(sender: mpsc::Sender<String>) -> Self {
        Self { sender }
    }
}

/// Shared application state
pub struct AppState {
    /// Repository（データアクセス層の抽象化）
    pub repository: Arc<dyn WorldRepository>,
    /// Fan-out engine over the repository's delivery handles
    pub broadcaster: Broadcaster,
}

impl AppState {
    /// Wire the state up around one repository
    pub fn new(repository: Arc<dyn WorldRepository>) -> Self {
        Self {
            broadcaster: Broadcaster::new(repository.clone()),
            repository,
        }
    }
}
