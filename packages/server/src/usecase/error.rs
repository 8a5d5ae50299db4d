//! UseCase 層のエラー定義

use thiserror::Error;

/// セッション接続処理のエラー
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConnectError {
    /// 生成されたセッション ID が既存セッションと衝突した
    /// （内部不変条件の違反。該当接続のみ失敗させる）
    #[error("generated session id '{0}' collided with a live session")]
    DuplicateSessionId(String),
}
