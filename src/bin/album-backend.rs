//! Album gRPC backend.
//!
//! Seeds its own album store and serves it over `albums.AlbumService/GetAlbum`,
//! the call relayed by the service's `/proto-2/albums` route.

use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use album_service::config::{load_config, ServiceConfig};
use album_service::observability::logging;
use album_service::remote::AlbumBackend;
use album_service::{AlbumStore, Shutdown};

#[derive(Parser)]
#[command(name = "album-backend")]
#[command(about = "gRPC backend serving the album list", long_about = None)]
struct Args {
    /// TOML configuration file (uses the `backend` and `store` sections).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override `backend.bind_address`.
    #[arg(long)]
    bind: Option<SocketAddr>,

    /// Override `store.seed_count`.
    #[arg(long)]
    seed_count: Option<usize>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let config = match &args.config {
        Some(path) => load_config(path)?,
        None => ServiceConfig::default(),
    };

    logging::init(&config.observability.log_level);

    let addr = match args.bind {
        Some(addr) => addr,
        None => config.backend.bind_address.parse()?,
    };
    let seed_count = args.seed_count.unwrap_or(config.store.seed_count);

    let store = Arc::new(AlbumStore::seed(seed_count, config.store.seed_price));

    let shutdown = Shutdown::new();
    shutdown.trigger_on_signal();

    AlbumBackend::new(store, config.backend.max_message_bytes)
        .serve(addr, shutdown.subscribe())
        .await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
