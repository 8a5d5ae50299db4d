//! Server startup and runtime errors.

use thiserror::Error;

/// Errors surfaced by the server runner
#[derive(Debug, Error)]
pub enum ServerError {
    /// The listen address could not be bound
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        source: std::io::Error,
    },

    /// The accept loop failed
    #[error("server I/O error: {0}")]
    Serve(#[from] std::io::Error),
}
