//! Logger initialization shared by the server and client binaries.

use tracing_subscriber::EnvFilter;

/// Initialize the global tracing subscriber.
///
/// The filter defaults to `<bin_name>=<default_level>` (binary names are
/// normalized to module-path form, so `hiroba-server` covers the
/// `hiroba_server` crate). `RUST_LOG` overrides the default when set.
pub fn setup_logger(bin_name: &str, default_level: &str) {
    let default_directive = format!("{}={}", bin_name.replace('-', "_"), default_level);
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::fmt().with_env_filter(filter).init();

    tracing::debug!("Logger initialized for '{}'", bin_name);
}
