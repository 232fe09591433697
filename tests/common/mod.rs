//! Shared utilities for integration tests.

use std::net::SocketAddr;

use greeting_server::config::AppConfig;
use greeting_server::http::{AppState, HttpServer};
use greeting_server::lifecycle::Shutdown;
use tokio::net::TcpListener;

/// A server running in the background on an ephemeral port.
pub struct TestServer {
    pub addr: SocketAddr,
    shutdown: Shutdown,
}

impl TestServer {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.shutdown.trigger();
    }
}

/// Start a server with the default greeters and artist directory.
#[allow(dead_code)]
pub async fn spawn_default_server() -> TestServer {
    spawn_server(AppState::with_defaults().unwrap()).await
}

/// Start a server with the given state.
pub async fn spawn_server(state: AppState) -> TestServer {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let mut config = AppConfig::default();
    config.listener.bind_address = addr.to_string();

    let shutdown = Shutdown::new();
    let server = HttpServer::with_state(config, state);
    let server_shutdown = shutdown.subscribe();

    tokio::spawn(async move {
        let _ = server.run(listener, server_shutdown).await;
    });

    TestServer { addr, shutdown }
}

pub fn client() -> reqwest::Client {
    reqwest::Client::builder().no_proxy().build().unwrap()
}
