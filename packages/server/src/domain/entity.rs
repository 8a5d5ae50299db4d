//! Core domain models for the world-state server.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use super::value_object::{Color, Position, SessionId};

/// Default maximum number of chat messages retained in the log
pub const DEFAULT_LOG_CAPACITY: usize = 15;

/// Represents one live connection's identity and world state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    /// Session identifier, stable for the connection's lifetime
    pub id: SessionId,
    /// Last-known position; the most recent update wins
    pub position: Position,
    /// Color assigned at connect time, immutable afterwards
    pub color: Color,
    /// Unix timestamp (milliseconds, JST) when the session connected
    pub connected_at: i64,
}

impl Session {
    /// Create a new session
    pub fn new(id: SessionId, position: Position, color: Color, connected_at: i64) -> Self {
        Self {
            id,
            position,
            color,
            connected_at,
        }
    }
}

/// Bounded chat history, newest first.
///
/// Appending never fails: when the log is full the oldest entry is evicted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageLog {
    entries: VecDeque<String>,
    capacity: usize,
}

impl MessageLog {
    /// Create an empty log with the default capacity
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_LOG_CAPACITY)
    }

    /// Create an empty log with a custom capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Insert a message at the front, evicting the oldest entry when full
    pub fn append(&mut self, text: String) {
        self.entries.push_front(text);
        while self.entries.len() > self.capacity {
            self.entries.pop_back();
        }
    }

    /// Ordered copy of the log, newest first, detached from internal storage
    pub fn snapshot(&self) -> Vec<String> {
        self.entries.iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl Default for MessageLog {
    fn default() -> Self {
        Self::new()
    }
}
