//! Remote album backend over gRPC.
//!
//! # Data Flow
//! ```text
//! GET /proto-2/albums
//!     → client.rs: fresh channel → AlbumService/GetAlbum → ListOfAlbums
//!     → dispatcher re-encodes as protobuf
//!
//! album-backend binary
//!     → service.rs: AlbumService over its own AlbumStore
//! ```
//!
//! # Design Decisions
//! - One channel per request, dropped after the call (no pooling)
//! - Decoded message size is capped by `remote.max_message_bytes`
//! - Connect and call timeouts come from config; nothing is retried

pub mod client;
pub mod service;

pub use client::{RemoteAlbums, RemoteError};
pub use service::AlbumBackend;
