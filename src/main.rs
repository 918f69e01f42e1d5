//! Album service.
//!
//! # Architecture Overview
//!
//! ```text
//!                       ┌──────────────────────────────────────────────┐
//!                       │                ALBUM SERVICE                 │
//!   Client Request      │  ┌─────────┐    ┌──────────┐    ┌─────────┐  │
//!   ────────────────────┼─▶│  http   │───▶│ encoding │───▶│  store  │  │
//!                       │  │ server  │    │dispatcher│    │(RwLock) │  │
//!                       │  └─────────┘    └────┬─────┘    └─────────┘  │
//!                       │                      │ proto-2               │
//!                       │                      ▼                       │
//!                       │                ┌──────────┐                  │      ┌───────────────┐
//!                       │                │  remote  │──────────────────┼─────▶│ album-backend │
//!                       │                │  client  │   gRPC GetAlbum  │      │   (gRPC)      │
//!                       │                └──────────┘                  │      └───────────────┘
//!                       │  config · observability · lifecycle          │
//!                       └──────────────────────────────────────────────┘
//! ```

use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::net::TcpListener;

use album_service::config::{load_config, validate_config, ConfigError, ServiceConfig};
use album_service::observability::{logging, metrics};
use album_service::{AlbumStore, HttpServer, Shutdown};

#[derive(Parser)]
#[command(name = "album-service")]
#[command(about = "Serve the album catalogue as JSON, XML, YAML or protobuf", long_about = None)]
struct Args {
    /// TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override `listener.bind_address`.
    #[arg(long)]
    bind: Option<String>,

    /// Override `store.seed_count`.
    #[arg(long)]
    seed_count: Option<usize>,

    /// Override `remote.address`.
    #[arg(long)]
    backend: Option<String>,
}

fn resolve_config(args: &Args) -> Result<ServiceConfig, ConfigError> {
    let mut config = match &args.config {
        Some(path) => load_config(path)?,
        None => ServiceConfig::default(),
    };
    if let Some(bind) = &args.bind {
        config.listener.bind_address = bind.clone();
    }
    if let Some(count) = args.seed_count {
        config.store.seed_count = count;
    }
    if let Some(backend) = &args.backend {
        config.remote.address = backend.clone();
    }
    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let config = resolve_config(&args)?;

    logging::init(&config.observability.log_level);
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "album-service starting");

    tracing::info!(
        bind_address = %config.listener.bind_address,
        backend = %config.remote.address,
        seed_count = config.store.seed_count,
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        metrics::init_metrics(config.observability.metrics_address.parse()?);
    }

    let store = Arc::new(AlbumStore::seed(
        config.store.seed_count,
        config.store.seed_price,
    ));

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let shutdown = Shutdown::new();
    shutdown.trigger_on_signal();

    let server = HttpServer::new(config, store);
    server.run(listener, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
