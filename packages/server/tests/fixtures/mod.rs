//! Test fixtures for integration tests.

use std::time::Duration;

use hiroba_server::{ServerConfig, run_server};

/// Server running on a background task for the duration of a test.
///
/// Each test uses its own port so tests can run in parallel.
pub struct TestServer {
    port: u16,
}

impl TestServer {
    /// Spawn the server on the given port and wait until it answers the
    /// health check.
    pub async fn start(port: u16) -> Self {
        let config = ServerConfig {
            host: "127.0.0.1".to_string(),
            port,
        };
        let _ = tokio::spawn(async move {
            if let Err(e) = run_server(config).await {
                panic!("test server failed: {e}");
            }
        });

        let server = Self { port };
        server.wait_ready().await;
        server
    }

    async fn wait_ready(&self) {
        let client = reqwest::Client::new();
        let url = format!("{}/api/health", self.base_url());
        for _ in 0..50 {
            if let Ok(response) = client.get(&url).send().await
                && response.status().is_success()
            {
                return;
            }
            tokio::time::sleep(Duration::from_millis(100)).await;
        }
        panic!("server on port {} did not become ready", self.port);
    }

    pub fn base_url(&self) -> String {
        format!("http://127.0.0.1:{}", self.port)
    }

    #[allow(dead_code)] // HTTP-only tests never open a socket
    pub fn ws_url(&self) -> String {
        format!("ws://127.0.0.1:{}/ws", self.port)
    }
}
