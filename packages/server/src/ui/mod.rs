//! WebSocket world-state server implementation.

pub mod broadcast;
mod handler;
mod runner;
mod signal;
pub mod state; // Domain/UseCase 層からアクセスするため public

pub use runner::{ServerConfig, run_server};
