//! InMemory World Repository 実装
//!
//! ドメイン層が定義する WorldRepository trait の具体的な実装。
//! セッションレジストリを HashMap、メッセージログを MessageLog として
//! インメモリに保持します。
//!
//! レジストリは「セッション状態 + 配信ハンドル」を 1 つのロック配下の
//! 1 エントリとして保持します。登録・削除は原子的になり、スナップショット
//! 取得時に変異途中の状態が見えることはありません。ログとレジストリは
//! 別々のロックを持ち、互いの操作をブロックしません。

use std::{collections::HashMap, sync::Arc};

use async_trait::async_trait;
use tokio::sync::{Mutex, mpsc::Sender};

use crate::{
    domain::{
        MessageLog, Position, RepositoryError, Session, SessionId, WorldRepository,
    },
    ui::state::ClientHandle,
};

/// Registry entry: domain state plus the outbound delivery handle
struct SessionEntry {
    session: Session,
    handle: ClientHandle,
}

/// インメモリ World Repository 実装
pub struct InMemoryWorldRepository {
    /// 接続中セッション（配信ハンドルを含む）
    sessions: Arc<Mutex<HashMap<String, SessionEntry>>>,
    /// 共有メッセージログ
    log: Arc<Mutex<MessageLog>>,
}

impl InMemoryWorldRepository {
    /// 新しい InMemoryWorldRepository を作成
    pub fn new() -> Self {
        Self {
            sessions: Arc::new(Mutex::new(HashMap::new())),
            log: Arc::new(Mutex::new(MessageLog::new())),
        }
    }

    /// ログ容量を指定して作成（テスト用）
    pub fn with_log_capacity(capacity: usize) -> Self {
        Self {
            sessions: Arc::new(Mutex::new(HashMap::new())),
            log: Arc::new(Mutex::new(MessageLog::with_capacity(capacity))),
        }
    }
}

impl Default for InMemoryWorldRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl WorldRepository for InMemoryWorldRepository {
    async fn register_session(
        &self,
        session: Session,
        handle: ClientHandle,
    ) -> Result<(), RepositoryError> {
        let mut sessions = self.sessions.lock().await;
        if sessions.contains_key(session.id.as_str()) {
            return Err(RepositoryError::DuplicateSession(
                session.id.as_str().to_string(),
            ));
        }
        sessions.insert(
            session.id.as_str().to_string(),
            SessionEntry { session, handle },
        );
        Ok(())
    }

    async fn remove_session(&self, id: &SessionId) -> bool {
        self.sessions.lock().await.remove(id.as_str()).is_some()
    }

    async fn update_position(&self, id: &SessionId, position: Position) -> bool {
        let mut sessions = self.sessions.lock().await;
        match sessions.get_mut(id.as_str()) {
            Some(entry) => {
                entry.session.position = position;
                true
            }
            None => false,
        }
    }

    async fn registry_snapshot(&self) -> Vec<Session> {
        let sessions = self.sessions.lock().await;
        sessions.values().map(|e| e.session.clone()).collect()
    }

    async fn delivery_handles(&self) -> Vec<(SessionId, Sender<String>)> {
        let sessions = self.sessions.lock().await;
        sessions
            .values()
            .map(|e| (e.session.id.clone(), e.handle.sender.clone()))
            .collect()
    }

    async fn delivery_handle(&self, id: &SessionId) -> Option<Sender<String>> {
        let sessions = self.sessions.lock().await;
        sessions.get(id.as_str()).map(|e| e.handle.sender.clone())
    }

    async fn append_message(&self, text: String) {
        self.log.lock().await.append(text);
    }

    async fn log_snapshot(&self) -> Vec<String> {
        self.log.lock().await.snapshot()
    }

    async fn count_sessions(&self) -> usize {
        self.sessions.lock().await.len()
    }
}
