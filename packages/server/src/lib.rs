//! WebSocket world-state synchronization server.
//!
//! Maintains a bounded chat log and a registry of live sessions (position,
//! color and delivery handle) and fans the combined world state out to every
//! connected client whenever either resource changes.

pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod ui;
pub mod usecase;

pub use error::ServerError;
pub use ui::{ServerConfig, run_server};
