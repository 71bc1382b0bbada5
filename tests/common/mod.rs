//! Shared utilities for integration tests.

use std::path::PathBuf;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use vector_service::config::ServiceConfig;
use vector_service::http::HttpServer;
use vector_service::lifecycle::Shutdown;

/// A server running on an ephemeral port.
pub struct TestService {
    pub base_url: String,
    pub shutdown: Shutdown,
    pub handle: JoinHandle<Result<(), std::io::Error>>,
}

/// Config pointing at the repository's front-end directory.
pub fn test_config() -> ServiceConfig {
    let mut config = ServiceConfig::default();
    config.listener.bind_address = "127.0.0.1:0".into();
    config.static_files.dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("frontend");
    config
}

/// Bind before spawning so requests can be sent as soon as this returns.
pub async fn spawn_service(config: ServiceConfig) -> TestService {
    let listener = TcpListener::bind(&config.listener.bind_address).await.unwrap();
    let base_url = format!("http://{}", listener.local_addr().unwrap());

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    let server = HttpServer::new(config);
    let handle = tokio::spawn(async move { server.run(listener, server_shutdown).await });

    TestService {
        base_url,
        shutdown,
        handle,
    }
}
