//! CLI client for the Hiroba world-state server.
//!
//! Connects to the server's WebSocket endpoint, prints incoming documents,
//! and sends chat lines verbatim. `/pos <x> <y> <z>` sends a position
//! update in the `POS:x,y,z` wire form, `/quit` exits.

use chrono::Local;
use futures_util::{SinkExt, StreamExt};
use rustyline::error::ReadlineError;
use thiserror::Error;
use tokio::sync::mpsc;
use tokio_tungstenite::{connect_async, tungstenite::Message};

use hiroba_server::infrastructure::dto::websocket::{WelcomeMessage, WorldStateMessage};

/// Connection configuration for the client
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// WebSocket endpoint of the server
    pub url: String,
}

/// Errors surfaced by the client
#[derive(Debug, Error)]
pub enum ClientError {
    /// WebSocket connection or transport error
    #[error("WebSocket error: {0}")]
    WebSocket(#[from] tokio_tungstenite::tungstenite::Error),

    /// Line editor could not be initialized
    #[error("readline error: {0}")]
    Readline(#[from] ReadlineError),
}

/// One parsed input line
#[derive(Debug, Clone, PartialEq)]
enum Input {
    /// Text frame to send to the server
    Frame(String),
    /// Exit the client
    Quit,
    /// Nothing to do
    Empty,
    /// Unrecognized slash command
    Unknown(String),
}

fn parse_line(line: &str) -> Input {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Input::Empty;
    }
    if trimmed == "/quit" {
        return Input::Quit;
    }
    if let Some(rest) = trimmed.strip_prefix("/pos ") {
        let parts: Vec<&str> = rest.split_whitespace().collect();
        if parts.len() == 3 && parts.iter().all(|p| p.parse::<f64>().is_ok()) {
            return Input::Frame(format!("POS:{},{},{}", parts[0], parts[1], parts[2]));
        }
        return Input::Unknown(trimmed.to_string());
    }
    if trimmed.starts_with('/') {
        return Input::Unknown(trimmed.to_string());
    }
    Input::Frame(trimmed.to_string())
}

fn print_document(text: &str) {
    let Ok(doc) = serde_json::from_str::<serde_json::Value>(text) else {
        println!("{text}");
        return;
    };
    let now = Local::now().format("%H:%M:%S");

    match doc["type"].as_str() {
        Some("welcome") => {
            if let Ok(welcome) = serde_json::from_str::<WelcomeMessage>(text) {
                println!("[{now}] connected as session {}", welcome.session_id);
            }
        }
        Some("world-state") => {
            if let Ok(world) = serde_json::from_str::<WorldStateMessage>(text) {
                println!(
                    "[{now}] {} session(s) online, {} message(s)",
                    world.sessions.len(),
                    world.messages.len()
                );
                if let Some(latest) = world.messages.first() {
                    println!("[{now}] latest: {latest}");
                }
            }
        }
        // The composer-reset ack carries no content worth printing
        Some("composer-reset") => {}
        _ => println!("[{now}] {text}"),
    }
}

/// Run the client until `/quit`, EOF or the server closes the connection.
pub async fn run_client(config: ClientConfig) -> Result<(), ClientError> {
    let (stream, _) = connect_async(config.url.clone()).await?;
    tracing::info!("Connected to {}", config.url);
    let (mut sink, mut stream) = stream.split();

    // Reader task printing incoming documents
    let read_task = tokio::spawn(async move {
        while let Some(msg) = stream.next().await {
            match msg {
                Ok(Message::Text(text)) => print_document(&text),
                Ok(Message::Close(_)) => {
                    println!("server closed the connection");
                    break;
                }
                Ok(_) => {}
                Err(e) => {
                    tracing::error!("WebSocket error: {}", e);
                    break;
                }
            }
        }
    });

    // Line input runs on its own thread so the editor can block freely
    let mut editor = rustyline::DefaultEditor::new()?;
    let (line_tx, mut line_rx) = mpsc::channel::<String>(16);
    std::thread::spawn(move || {
        loop {
            match editor.readline("> ") {
                Ok(line) => {
                    if line_tx.blocking_send(line).is_err() {
                        break;
                    }
                }
                Err(ReadlineError::Interrupted | ReadlineError::Eof) => break,
                Err(e) => {
                    tracing::error!("Readline error: {}", e);
                    break;
                }
            }
        }
    });

    while let Some(line) = line_rx.recv().await {
        match parse_line(&line) {
            Input::Quit => break,
            Input::Frame(frame) => {
                if sink.send(Message::Text(frame.into())).await.is_err() {
                    break;
                }
            }
            Input::Empty => {}
            Input::Unknown(command) => {
                println!("unknown command: {command} (try /pos <x> <y> <z> or /quit)");
            }
        }
    }

    let _ = sink.close().await;
    read_task.abort();
    Ok(())
}
