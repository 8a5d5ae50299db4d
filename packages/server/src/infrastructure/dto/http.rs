//! HTTP API response DTOs for the world-state server.

use serde::{Deserialize, Serialize};

/// World summary for the overview endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorldSummaryDto {
    pub session_count: usize,
    pub sessions: Vec<SessionSummaryDto>,
    pub message_count: usize,
}

/// Per-session entry in the world summary
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionSummaryDto {
    pub session_id: String,
    pub connected_at: String, // ISO 8601
}
