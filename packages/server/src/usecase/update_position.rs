//! UseCase: 位置更新処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - UpdatePositionUseCase::execute() メソッド
//! - セッション位置の置き換え（最新の更新が勝つ）
//!
//! ### なぜこのテストが必要か
//! - 更新がレジストリのスナップショットに反映されることを保証
//! - 切断と競合した古い更新が黙って無視されることを確認
//!   （セッションを復活させたりエラーにしたりしない）
//!
//! ### どのような状況を想定しているか
//! - 正常系: 接続中セッションの位置更新
//! - エッジケース: 切断済みセッション ID への更新（no-op）

use std::sync::Arc;

use crate::domain::{Position, SessionId, WorldRepository};

/// 位置更新のユースケース
pub struct UpdatePositionUseCase {
    /// Repository（データアクセス層の抽象化）
    repository: Arc<dyn WorldRepository>,
}

impl UpdatePositionUseCase {
    /// 新しい UpdatePositionUseCase を作成
    pub fn new(repository: Arc<dyn WorldRepository>) -> Self {
        Self { repository }
    }

    /// 位置更新を実行
    ///
    /// # Returns
    ///
    /// * `true` - 位置を更新した
    /// * `false` - セッションが存在しない（切断との競合。黙って無視する）
    pub async fn execute(&self, id: &SessionId, position: Position) -> bool {
        self.repository.update_position(id, position).await
    }
}
