//! WebSocket connection handlers.
//!
//! One task pair per connection: a receive task routing inbound frames and
//! a send task draining the session's bounded delivery queue into the
//! socket. The session lives from registration inside the upgraded socket
//! until the single cleanup pass at the end of `handle_socket`.

use std::sync::Arc;

use axum::{
    extract::{
        State,
        ws::{Message, WebSocket, WebSocketUpgrade},
    },
    response::IntoResponse,
};
use futures_util::{sink::SinkExt, stream::StreamExt};
use tokio::sync::mpsc;

use crate::{
    domain::SessionId,
    infrastructure::dto::websocket::{
        ClientFrame, ComposerResetMessage, MessageType, WelcomeMessage,
    },
    ui::state::{AppState, ClientHandle, DELIVERY_QUEUE_CAPACITY},
    usecase::{
        ConnectSessionUseCase, DisconnectSessionUseCase, PostChatUseCase, UpdatePositionUseCase,
    },
};

pub async fn websocket_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    ws.on_upgrade(|socket| handle_socket(socket, state))
}

async fn handle_socket(socket: WebSocket, state: Arc<AppState>) {
    let (mut sender, mut receiver) = socket.split();

    // Delivery queue for this session, drained by the send task below
    let (tx, mut rx) = mpsc::channel::<String>(DELIVERY_QUEUE_CAPACITY);

    // Register the session with a fresh id, color and spawn position
    let connect_usecase = ConnectSessionUseCase::new(state.repository.clone());
    let session = match connect_usecase.execute(ClientHandle::new(tx)).await {
        Ok(session) => session,
        Err(e) => {
            // Duplicate generated id: fatal to this connection attempt only
            tracing::error!("Failed to register session: {}", e);
            return;
        }
    };
    let session_id = session.id.clone();
    tracing::info!(
        "Session '{}' connected with color {} at {}",
        session_id,
        session.color,
        session.position
    );

    // Send the newcomer its own id, then a private full world snapshot so
    // it renders existing state without waiting for the next broadcast
    let welcome = WelcomeMessage {
        r#type: MessageType::Welcome,
        session_id: session_id.as_str().to_string(),
    };
    let welcome_json = serde_json::to_string(&welcome).unwrap();
    if let Err(e) = sender.send(Message::Text(welcome_json.into())).await {
        tracing::error!("Failed to send welcome to '{}': {}", session_id, e);
        state.repository.remove_session(&session_id).await;
        return;
    }

    let snapshot = state.broadcaster.render_world_state().await;
    let snapshot_json = serde_json::to_string(&snapshot).unwrap();
    if let Err(e) = sender.send(Message::Text(snapshot_json.into())).await {
        tracing::error!("Failed to send world snapshot to '{}': {}", session_id, e);
        state.repository.remove_session(&session_id).await;
        return;
    }
    tracing::info!("Sent welcome and world snapshot to '{}'", session_id);

    // Tell everyone else about the newcomer
    state.broadcaster.broadcast_to_others(&session_id).await;

    let session_id_recv = session_id.clone();
    let state_recv = state.clone();

    // Spawn a task to receive frames from this client
    let mut recv_task = tokio::spawn(async move {
        while let Some(msg) = receiver.next().await {
            let msg = match msg {
                Ok(msg) => msg,
                Err(e) => {
                    tracing::error!("WebSocket error: {}", e);
                    break;
                }
            };

            match msg {
                Message::Text(text) => {
                    route_frame(&state_recv, &session_id_recv, &text).await;
                }
                Message::Ping(_) => {
                    tracing::debug!("Received ping");
                    // Ping/pong is handled automatically by the WebSocket protocol
                }
                Message::Close(_) => {
                    tracing::info!("Session '{}' requested close", session_id_recv);
                    break;
                }
                _ => {}
            }
        }
    });

    // Spawn a task draining the delivery queue into the socket
    let mut send_task = tokio::spawn(async move {
        while let Some(msg) = rx.recv().await {
            if sender.send(Message::Text(msg.into())).await.is_err() {
                break;
            }
        }
    });

    // If any one of the tasks completes, abort the other
    tokio::select! {
        _ = &mut recv_task => send_task.abort(),
        _ = &mut send_task => recv_task.abort(),
    };

    // Exactly-once cleanup: remove the session, then let the remaining
    // sessions see the departure
    let disconnect_usecase = DisconnectSessionUseCase::new(state.repository.clone());
    if disconnect_usecase.execute(&session_id).await {
        tracing::info!("Session '{}' disconnected and removed from registry", session_id);
    } else {
        tracing::warn!("Session '{}' was already removed", session_id);
    }
    state.broadcaster.broadcast_all().await;
}

/// Classify one inbound frame, apply it to the right store, acknowledge
/// the originating session, and broadcast the refreshed world state to
/// every session (the sender included).
async fn route_frame(state: &Arc<AppState>, session_id: &SessionId, text: &str) {
    match ClientFrame::classify(text) {
        ClientFrame::Position(position) => {
            let usecase = UpdatePositionUseCase::new(state.repository.clone());
            if !usecase.execute(session_id, position).await {
                tracing::debug!("Stale position update for session '{}' ignored", session_id);
            }
        }
        ClientFrame::MalformedPosition(e) => {
            tracing::warn!(
                "Discarding malformed position frame from '{}': {}",
                session_id,
                e
            );
        }
        ClientFrame::Chat(content) => {
            tracing::info!("Chat from '{}': {}", session_id, content);
            let usecase = PostChatUseCase::new(state.repository.clone());
            usecase.execute(content).await;
        }
    }

    // Acknowledge the originating session only, so its composer clears
    // without waiting for the broadcast
    if let Some(handle) = state.repository.delivery_handle(session_id).await {
        let reset = ComposerResetMessage {
            r#type: MessageType::ComposerReset,
        };
        let reset_json = serde_json::to_string(&reset).unwrap();
        if handle.try_send(reset_json).is_err() {
            tracing::warn!("Failed to acknowledge frame from session '{}'", session_id);
        }
    }

    state.broadcaster.broadcast_all().await;
}
