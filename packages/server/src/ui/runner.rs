//! Server runner: routing, state wiring and graceful shutdown.

use std::sync::Arc;

use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

use crate::{
    domain::WorldRepository,
    error::ServerError,
    infrastructure::repository::InMemoryWorldRepository,
    ui::{
        handler::{debug_world_state, get_world, health_check, websocket_handler},
        signal,
        state::AppState,
    },
};

/// Listen configuration for the server
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
        }
    }
}

/// Run the world-state server until shutdown is requested.
pub async fn run_server(config: ServerConfig) -> Result<(), ServerError> {
    let repository: Arc<dyn WorldRepository> = Arc::new(InMemoryWorldRepository::new());
    let state = Arc::new(AppState::new(repository));

    let app = Router::new()
        .route("/ws", get(websocket_handler))
        .route("/api/health", get(health_check))
        .route("/api/world", get(get_world))
        .route("/api/debug/world", get(debug_world_state))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|source| ServerError::Bind {
            addr: addr.clone(),
            source,
        })?;
    tracing::info!("Listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(signal::shutdown_signal())
        .await?;

    Ok(())
}
