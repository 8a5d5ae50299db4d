//! WebSocket message DTOs for the world-state protocol.
//!
//! Inbound frames are plain text classified by the `POS:` sentinel prefix;
//! outbound documents are JSON tagged with a kebab-case `type` field.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::{Position, Session, ValueObjectError};

/// Sentinel prefix marking an inbound position-update frame
pub const POSITION_PREFIX: &str = "POS:";

/// Message type enum
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MessageType {
    Welcome,
    ComposerReset,
    WorldState,
}

/// Private message establishing the newcomer's own session id
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WelcomeMessage {
    pub r#type: MessageType,
    pub session_id: String,
}

/// Directive telling the originating client to clear its composer,
/// sent after each inbound frame independently of the broadcast
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComposerResetMessage {
    pub r#type: MessageType,
}

/// Per-session state as rendered into the world-state document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionStateDto {
    /// Components in `[x, y, z]` order
    pub position: [f64; 3],
    /// Packed 24-bit RGB value
    pub color: u32,
}

/// Broadcast document carrying the full world snapshot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorldStateMessage {
    pub r#type: MessageType,
    /// Chat log, newest first, sentinel entries filtered out
    pub messages: Vec<String>,
    /// Full session mapping for client-side interpolation, keyed by id
    pub sessions: BTreeMap<String, SessionStateDto>,
}

impl WorldStateMessage {
    /// Render the document from per-resource snapshots.
    pub fn render(log_snapshot: Vec<String>, registry_snapshot: Vec<Session>) -> Self {
        let messages = log_snapshot
            .into_iter()
            .filter(|m| !m.starts_with(POSITION_PREFIX))
            .collect();

        let sessions = registry_snapshot
            .into_iter()
            .map(|s| {
                (
                    s.id.into_string(),
                    SessionStateDto {
                        position: s.position.to_array(),
                        color: s.color.as_u32(),
                    },
                )
            })
            .collect();

        Self {
            r#type: MessageType::WorldState,
            messages,
            sessions,
        }
    }
}

/// Inbound frame, classified by the sentinel prefix
#[derive(Debug, Clone, PartialEq)]
pub enum ClientFrame {
    /// Well-formed position update
    Position(Position),
    /// Position-update frame whose payload did not parse
    MalformedPosition(ValueObjectError),
    /// Anything else is an opaque chat line
    Chat(String),
}

impl ClientFrame {
    /// Classify one raw text frame.
    pub fn classify(text: &str) -> Self {
        match text.strip_prefix(POSITION_PREFIX) {
            Some(components) => match Position::parse(components) {
                Ok(position) => Self::Position(position),
                Err(e) => Self::MalformedPosition(e),
            },
            None => Self::Chat(text.to_string()),
        }
    }
}
