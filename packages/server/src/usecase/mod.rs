//! UseCase 層
//!
//! ビジネスロジックを実装するレイヤー。
//! UI 層から呼び出され、Domain 層を操作します。

pub mod connect_session;
pub mod disconnect_session;
pub mod error;
pub mod post_chat;
pub mod update_position;

pub use connect_session::ConnectSessionUseCase;
pub use disconnect_session::DisconnectSessionUseCase;
pub use error::ConnectError;
pub use post_chat::PostChatUseCase;
pub use update_position::UpdatePositionUseCase;
