//! UseCase: セッション接続処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - ConnectSessionUseCase::execute() メソッド
//! - セッションの接続処理（ID・色・スポーン位置の生成、Repository への登録）
//!
//! ### なぜこのテストが必要か
//! - 生成されたセッションが Repository に登録されることを保証
//! - スポーン位置・色が仕様の範囲に収まることを確認
//! - ID 衝突時に該当接続だけが失敗することを保証
//!
//! ### どのような状況を想定しているか
//! - 正常系: 新規セッションの接続
//! - 異常系: 生成 ID の衝突（Repository が重複エラーを返す）

use std::sync::Arc;

use hiroba_shared::time::get_jst_timestamp;

use crate::domain::{Session, SessionIdFactory, SpawnFactory, WorldRepository};
use crate::ui::state::ClientHandle;

use super::error::ConnectError;

/// セッション接続のユースケース
pub struct ConnectSessionUseCase {
    /// Repository（データアクセス層の抽象化）
    repository: Arc<dyn WorldRepository>,
}

impl ConnectSessionUseCase {
    /// 新しい ConnectSessionUseCase を作成
    pub fn new(repository: Arc<dyn WorldRepository>) -> Self {
        Self { repository }
    }

    /// セッション接続を実行
    ///
    /// 新しい ID・色・スポーン位置を生成し、配信ハンドルとともに
    /// Repository に登録します。
    ///
    /// # Arguments
    ///
    /// * `handle` - このセッション専用の配信ハンドル
    ///
    /// # Returns
    ///
    /// * `Ok(Session)` - 登録されたセッション
    /// * `Err(ConnectError)` - 生成された ID が衝突した場合
    pub async fn execute(&self, handle: ClientHandle) -> Result<Session, ConnectError> {
        let session = Session::new(
            SessionIdFactory::generate(),
            SpawnFactory::spawn_position(),
            SpawnFactory::random_color(),
            get_jst_timestamp(),
        );

        self.repository
            .register_session(session.clone(), handle)
            .await
            .map_err(|_| ConnectError::DuplicateSessionId(session.id.as_str().to_string()))?;

        Ok(session)
    }
}
