//! Format dispatch.
//!
//! Maps a format tag to a response body: local formats go through the
//! registered encoder, the remote format goes through the gRPC backend.

use prost::Message;
use std::sync::Arc;
use std::time::Instant;
use thiserror::Error;

use crate::encoding::protobuf::PROTOBUF_CONTENT_TYPE;
use crate::encoding::{EncodeError, Encoded, Encoder, EncoderRegistry, Format, Payload};
use crate::remote::{RemoteAlbums, RemoteError};
use crate::store::AlbumStore;

#[derive(Debug, Error)]
pub enum DispatchError {
    #[error(transparent)]
    Encode(#[from] EncodeError),

    #[error(transparent)]
    Remote(#[from] RemoteError),
}

/// Selects and runs the serialization path for a request.
pub struct Dispatcher {
    encoders: EncoderRegistry,
    remote: RemoteAlbums,
}

impl Dispatcher {
    pub fn new(encoders: EncoderRegistry, remote: RemoteAlbums) -> Self {
        Self { encoders, remote }
    }

    fn encoder(&self, format: Format) -> Result<Arc<dyn Encoder>, EncodeError> {
        self.encoders
            .get(format)
            .ok_or(EncodeError::Unsupported(format))
    }

    /// Encode `payload` with the encoder registered for `format`.
    ///
    /// Only local formats can render a caller-supplied payload; the remote
    /// format is `Unsupported` here.
    pub fn render(&self, format: Format, payload: Payload<'_>) -> Result<Encoded, EncodeError> {
        let encoder = self.encoder(format)?;
        Ok(Encoded {
            content_type: encoder.content_type(),
            body: encoder.encode(payload)?,
        })
    }

    /// Encode the whole collection in `format`.
    ///
    /// The remote format ignores `store` and asks the gRPC backend instead.
    pub async fn render_all(
        &self,
        format: Format,
        store: &AlbumStore,
    ) -> Result<Encoded, DispatchError> {
        match format {
            Format::RemoteProtobuf => self.relay_remote().await,
            _ => {
                let encoder = self.encoder(format)?;
                let albums = store.snapshot().await;
                let content_type = encoder.content_type();
                let body = tokio::task::spawn_blocking(move || {
                    encoder.encode(Payload::All(albums.as_slice()))
                })
                .await
                .map_err(|e| EncodeError::Join(e.to_string()))??;
                Ok(Encoded { content_type, body })
            }
        }
    }

    /// Fetch the backend's list, decode it, and re-encode it as protobuf.
    ///
    /// The bytes match the backend's own encoding of the same message, but
    /// this is not a byte-for-byte passthrough.
    async fn relay_remote(&self) -> Result<Encoded, DispatchError> {
        let start = Instant::now();
        let message = self.remote.fetch_albums().await?;
        let count = message.albums.len();

        let body = tokio::task::spawn_blocking(move || message.encode_to_vec())
            .await
            .map_err(|e| EncodeError::Join(e.to_string()))?;

        tracing::debug!(
            albums = count,
            bytes = body.len(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Relayed remote album list"
        );
        Ok(Encoded {
            content_type: PROTOBUF_CONTENT_TYPE,
            body,
        })
    }
}
