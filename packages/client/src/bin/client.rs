//! CLI client for the Hiroba world-state server.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin hiroba-client -- --url ws://127.0.0.1:8080/ws
//! ```

use clap::Parser;

use hiroba_client::{ClientConfig, run_client};
use hiroba_shared::logger::setup_logger;

/// Command-line arguments for the client
#[derive(Debug, Parser)]
#[command(name = "hiroba-client", about = "CLI client for the Hiroba world-state server")]
struct Args {
    /// WebSocket endpoint of the server
    #[arg(long, default_value = "ws://127.0.0.1:8080/ws")]
    url: String,
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    setup_logger(env!("CARGO_BIN_NAME"), "info");

    let args = Args::parse();

    if let Err(e) = run_client(ClientConfig { url: args.url }).await {
        tracing::error!("Client error: {}", e);
        std::process::exit(1);
    }
}
