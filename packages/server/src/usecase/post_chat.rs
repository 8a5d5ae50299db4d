//! UseCase: チャット投稿処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - PostChatUseCase::execute() メソッド
//! - 本文のメッセージログへの追加（検証なし、そのまま）
//!
//! ### なぜこのテストが必要か
//! - ログが新しい順を保ち、容量を超えないことを保証
//! - 満杯時に最も古いエントリが追い出されることを確認
//!
//! ### どのような状況を想定しているか
//! - 正常系: チャットの投稿
//! - エッジケース: 容量 + 1 件目の投稿（最古エントリの追い出し）

use std::sync::Arc;

use crate::domain::WorldRepository;

/// チャット投稿のユースケース
pub struct PostChatUseCase {
    /// Repository（データアクセス層の抽象化）
    repository: Arc<dyn WorldRepository>,
}

impl PostChatUseCase {
    /// 新しい PostChatUseCase を作成
    pub fn new(repository: Arc<dyn WorldRepository>) -> Self {
        Self { repository }
    }

    /// チャット投稿を実行
    ///
    /// 本文をそのままメッセージログへ追加します。常に成功し、ログが
    /// 満杯の場合は最も古いエントリが追い出されます。
    pub async fn execute(&self, text: String) {
        self.repository.append_message(text).await;
    }
}
