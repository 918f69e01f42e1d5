//! Album catalogue service.
//!
//! Serves an in-memory album collection over HTTP as JSON, XML, YAML or
//! protobuf, and can relay the protobuf list from a separate gRPC backend.

// Core
pub mod encoding;
pub mod proto;
pub mod remote;
pub mod store;

// Serving
pub mod http;

// Cross-cutting concerns
pub mod config;
pub mod lifecycle;
pub mod observability;

pub use config::ServiceConfig;
pub use encoding::{Dispatcher, Encoded, Format, Payload};
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use store::{Album, AlbumStore};
