//! WebSocket world-state server with broadcast fan-out.
//!
//! Receives chat and position frames from clients and broadcasts the
//! combined world state to all connected clients.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin hiroba-server
//! ```

use clap::Parser;

use hiroba_server::{ServerConfig, run_server};
use hiroba_shared::logger::setup_logger;

/// Command-line arguments for the server
#[derive(Debug, Parser)]
#[command(name = "hiroba-server", about = "Hiroba world-state synchronization server")]
struct Args {
    /// Address to listen on
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Port to listen on
    #[arg(long, default_value_t = 8080)]
    port: u16,
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    setup_logger(env!("CARGO_BIN_NAME"), "debug");

    let args = Args::parse();
    let config = ServerConfig {
        host: args.host,
        port: args.port,
    };

    // Run the server
    if let Err(e) = run_server(config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
