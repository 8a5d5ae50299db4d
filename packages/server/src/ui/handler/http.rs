//! HTTP API endpoint handlers.

use std::sync::Arc;

use axum::{Json, extract::State};

use hiroba_shared::time::timestamp_to_jst_rfc3339;

use crate::{
    infrastructure::dto::{
        http::{SessionSummaryDto, WorldSummaryDto},
        websocket::WorldStateMessage,
    },
    ui::state::AppState,
};

/// Health check endpoint
pub async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({"status": "ok"}))
}

/// Get a summary of the current world
pub async fn get_world(State(state): State<Arc<AppState>>) -> Json<WorldSummaryDto> {
    let registry = state.repository.registry_snapshot().await;
    let message_count = state.repository.log_snapshot().await.len();

    let mut sessions: Vec<SessionSummaryDto> = registry
        .iter()
        .map(|s| SessionSummaryDto {
            session_id: s.id.as_str().to_string(),
            connected_at: timestamp_to_jst_rfc3339(s.connected_at),
        })
        .collect();

    // Sort by session_id for consistent ordering
    sessions.sort_by(|a, b| a.session_id.cmp(&b.session_id));

    Json(WorldSummaryDto {
        session_count: sessions.len(),
        sessions,
        message_count,
    })
}

/// Debug endpoint returning the full rendered world state (for testing purposes)
pub async fn debug_world_state(State(state): State<Arc<AppState>>) -> Json<WorldStateMessage> {
    Json(state.broadcaster.render_world_state().await)
}
