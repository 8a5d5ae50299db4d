//! Repository abstraction over the shared world state.

use async_trait::async_trait;
use tokio::sync::mpsc::Sender;

use crate::ui::state::ClientHandle;

use super::entity::Session;
use super::error::RepositoryError;
use super::value_object::{Position, SessionId};

/// Data access boundary for the session registry and the message log.
///
/// UseCase 層はこの trait に依存し、具体的な実装（インメモリ等）には
/// 依存しません（依存性の逆転）。
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait WorldRepository: Send + Sync {
    /// Insert a new session with its delivery handle.
    ///
    /// Fails only when the id is already present, which the generation
    /// policy makes practically unreachable.
    async fn register_session(
        &self,
        session: Session,
        handle: ClientHandle,
    ) -> Result<(), RepositoryError>;

    /// Remove a session. Idempotent: returns false when the id was
    /// already absent.
    async fn remove_session(&self, id: &SessionId) -> bool;

    /// Replace the position of an existing session. Returns false when the
    /// id is absent (a stale update racing a disconnect).
    async fn update_position(&self, id: &SessionId, position: Position) -> bool;

    /// Point-in-time copy of every registered session, taken under a
    /// single lock acquisition.
    async fn registry_snapshot(&self) -> Vec<Session>;

    /// Delivery handles of every registered session.
    async fn delivery_handles(&self) -> Vec<(SessionId, Sender<String>)>;

    /// Delivery handle of one session, if still registered.
    async fn delivery_handle(&self, id: &SessionId) -> Option<Sender<String>>;

    /// Append a chat line to the message log, evicting the oldest entry
    /// when the log is full.
    async fn append_message(&self, text: String);

    /// Ordered copy of the message log, newest first.
    async fn log_snapshot(&self) -> Vec<String>;

    /// Number of currently registered sessions.
    async fn count_sessions(&self) -> usize;
}
