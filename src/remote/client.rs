//! gRPC client for the remote album backend.

use std::time::Duration;
use thiserror::Error;
use tonic::transport::Endpoint;

use crate::config::RemoteConfig;
use crate::observability::metrics;
use crate::proto::album_service_client::AlbumServiceClient;
use crate::proto::{AlbumRequest, ListOfAlbums};

#[derive(Debug, Error)]
pub enum RemoteError {
    #[error("invalid backend address '{address}': {reason}")]
    InvalidAddress { address: String, reason: String },

    #[error("failed to connect to backend: {0}")]
    Connect(#[from] tonic::transport::Error),

    #[error("backend call failed: {0}")]
    Call(#[from] tonic::Status),
}

/// Fetches the album list from the backend, one connection per call.
#[derive(Debug, Clone)]
pub struct RemoteAlbums {
    config: RemoteConfig,
}

impl RemoteAlbums {
    pub fn new(config: RemoteConfig) -> Self {
        Self { config }
    }

    pub fn address(&self) -> &str {
        &self.config.address
    }

    fn endpoint(&self) -> Result<Endpoint, RemoteError> {
        let endpoint = Endpoint::from_shared(self.config.address.clone()).map_err(|e| {
            RemoteError::InvalidAddress {
                address: self.config.address.clone(),
                reason: e.to_string(),
            }
        })?;
        Ok(endpoint
            .connect_timeout(Duration::from_secs(self.config.connect_timeout_secs))
            .timeout(Duration::from_secs(self.config.request_timeout_secs)))
    }

    /// Call `AlbumService/GetAlbum` and return the backend's list.
    pub async fn fetch_albums(&self) -> Result<ListOfAlbums, RemoteError> {
        let result = self.call().await;
        match &result {
            Ok(list) => {
                metrics::record_remote_call("ok");
                tracing::info!(
                    backend = %self.config.address,
                    albums = list.albums.len(),
                    "Fetched albums from backend"
                );
            }
            Err(e) => {
                metrics::record_remote_call("error");
                tracing::warn!(backend = %self.config.address, error = %e, "Backend call failed");
            }
        }
        result
    }

    async fn call(&self) -> Result<ListOfAlbums, RemoteError> {
        let channel = self.endpoint()?.connect().await?;
        let mut client = AlbumServiceClient::new(channel)
            .max_decoding_message_size(self.config.max_message_bytes);
        let response = client.get_album(AlbumRequest {}).await?;
        Ok(response.into_inner())
    }
}
