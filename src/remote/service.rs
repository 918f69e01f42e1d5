//! gRPC album service served by the `album-backend` binary.

use std::net::SocketAddr;
use std::sync::Arc;
use tokio::sync::broadcast;
use tonic::transport::Server;
use tonic::{Request, Response, Status};

use crate::proto::album_service_server::{AlbumService, AlbumServiceServer};
use crate::proto::{AlbumRequest, ListOfAlbums};
use crate::store::AlbumStore;

/// Serves the album list from a local store.
pub struct AlbumBackend {
    store: Arc<AlbumStore>,
    max_message_bytes: usize,
}

impl AlbumBackend {
    pub fn new(store: Arc<AlbumStore>, max_message_bytes: usize) -> Self {
        Self {
            store,
            max_message_bytes,
        }
    }

    /// Wrap in the generated tonic server with message size limits applied.
    pub fn into_server(self) -> AlbumServiceServer<Self> {
        let limit = self.max_message_bytes;
        AlbumServiceServer::new(self)
            .max_encoding_message_size(limit)
            .max_decoding_message_size(limit)
    }

    /// Serve on `addr` until the shutdown signal fires.
    pub async fn serve(
        self,
        addr: SocketAddr,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), tonic::transport::Error> {
        tracing::info!(address = %addr, "Album backend starting");
        Server::builder()
            .add_service(self.into_server())
            .serve_with_shutdown(addr, async move {
                let _ = shutdown.recv().await;
            })
            .await?;
        tracing::info!("Album backend stopped");
        Ok(())
    }
}

#[tonic::async_trait]
impl AlbumService for AlbumBackend {
    async fn get_album(
        &self,
        _request: Request<AlbumRequest>,
    ) -> Result<Response<ListOfAlbums>, Status> {
        let albums = self.store.snapshot().await;
        let list = tokio::task::spawn_blocking(move || ListOfAlbums::from(albums.as_slice()))
            .await
            .map_err(|e| Status::internal(format!("failed to build album list: {}", e)))?;

        tracing::debug!(albums = list.albums.len(), "Serving album list");
        Ok(Response::new(list))
    }
}
