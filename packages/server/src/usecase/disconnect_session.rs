//! UseCase: セッション切断処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - DisconnectSessionUseCase::execute() メソッド
//! - セッションの切断処理（Repository からの削除）
//!
//! ### なぜこのテストが必要か
//! - 切断後にセッション ID がレジストリに残らないことを保証
//! - 冪等性の確認: 重複した切断シグナルでも安全であること
//!
//! ### どのような状況を想定しているか
//! - 正常系: 接続中セッションの切断
//! - エッジケース: 既に削除済みのセッションの再切断（no-op）

use std::sync::Arc;

use crate::domain::{SessionId, WorldRepository};

/// セッション切断のユースケース
pub struct DisconnectSessionUseCase {
    /// Repository（データアクセス層の抽象化）
    repository: Arc<dyn WorldRepository>,
}

impl DisconnectSessionUseCase {
    /// 新しい DisconnectSessionUseCase を作成
    pub fn new(repository: Arc<dyn WorldRepository>) -> Self {
        Self { repository }
    }

    /// セッション切断を実行
    ///
    /// Repository からセッションを削除します。冪等であり、既に削除済みの
    /// ID に対しては false を返すだけで失敗しません。
    ///
    /// # Returns
    ///
    /// * `true` - セッションを削除した
    /// * `false` - セッションは既に存在しなかった
    pub async fn execute(&self, id: &SessionId) -> bool {
        self.repository.remove_session(id).await
    }

    /// 残りのセッション数を取得
    pub async fn count_remaining_sessions(&self) -> usize {
        self.repository.count_sessions().await
    }
}
