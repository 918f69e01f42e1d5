//! Shared utilities for integration tests.

#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;

use album_service::config::ServiceConfig;
use album_service::remote::AlbumBackend;
use album_service::{AlbumStore, HttpServer, Shutdown};

/// Config with no seeding and a backend address nothing listens on.
pub fn test_config() -> ServiceConfig {
    let mut config = ServiceConfig::default();
    config.listener.bind_address = "127.0.0.1:0".to_string();
    config.store.seed_count = 0;
    config.remote.address = "http://127.0.0.1:9".to_string();
    config.remote.connect_timeout_secs = 1;
    config.remote.request_timeout_secs = 5;
    config
}

/// Start the HTTP service on an ephemeral port.
pub async fn start_service(config: ServiceConfig, store: Arc<AlbumStore>) -> (SocketAddr, Shutdown) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let server = HttpServer::new(config, store);
    let server_shutdown = shutdown.subscribe();
    tokio::spawn(async move {
        let _ = server.run(listener, server_shutdown).await;
    });

    (addr, shutdown)
}

/// Start the gRPC backend on `addr` and wait until it accepts connections.
pub async fn start_backend(addr: SocketAddr, store: Arc<AlbumStore>) -> Shutdown {
    let shutdown = Shutdown::new();
    let backend = AlbumBackend::new(store, 64 * 1024 * 1024);
    let backend_shutdown = shutdown.subscribe();
    tokio::spawn(async move {
        let _ = backend.serve(addr, backend_shutdown).await;
    });

    for _ in 0..50 {
        if tokio::net::TcpStream::connect(addr).await.is_ok() {
            break;
        }
        tokio::time::sleep(Duration::from_millis(20)).await;
    }
    shutdown
}

pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .pool_max_idle_per_host(0)
        .no_proxy()
        .build()
        .unwrap()
}
