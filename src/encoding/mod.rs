//! Response encoding subsystem.
//!
//! # Data Flow
//! ```text
//! handler (format tag, payload)
//!     → dispatcher.rs (pick path by Format)
//!         local formats  → EncoderRegistry → Encoder::encode(payload)
//!         RemoteProtobuf → remote::RemoteAlbums → protobuf bytes
//!     → Encoded { content_type, body }
//! ```
//!
//! # Design Decisions
//! - Closed set of formats; one `Encoder` per local format, registered by tag
//! - Encoders only see `Album`; wire shapes are built inside the encoder
//! - Full-list encoding runs on the blocking pool

pub mod dispatcher;
pub mod json;
pub mod protobuf;
pub mod xml;
pub mod yaml;

use serde::Serialize;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use thiserror::Error;

use crate::store::Album;

pub use dispatcher::{DispatchError, Dispatcher};
pub use json::JsonEncoder;
pub use protobuf::ProtobufEncoder;
pub use xml::XmlEncoder;
pub use yaml::YamlEncoder;

/// Response format selected by the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    Json,
    Xml,
    Yaml,
    /// Protobuf encoding of the local store.
    Protobuf,
    /// Protobuf relayed from the remote backend.
    RemoteProtobuf,
}

impl Format {
    pub const ALL: [Format; 5] = [
        Format::Json,
        Format::Xml,
        Format::Yaml,
        Format::Protobuf,
        Format::RemoteProtobuf,
    ];

    /// Path segment used in `/{segment}/albums`.
    pub fn path_segment(&self) -> &'static str {
        match self {
            Format::Json => "json",
            Format::Xml => "xml",
            Format::Yaml => "yaml",
            Format::Protobuf => "proto",
            Format::RemoteProtobuf => "proto-2",
        }
    }

    /// Whether the bytes are protobuf rather than text.
    pub fn is_binary(&self) -> bool {
        matches!(self, Format::Protobuf | Format::RemoteProtobuf)
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path_segment())
    }
}

#[derive(Debug, Error)]
#[error("unknown format '{0}' (expected one of json, xml, yaml, proto, proto-2)")]
pub struct ParseFormatError(String);

impl FromStr for Format {
    type Err = ParseFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Format::ALL
            .into_iter()
            .find(|format| format.path_segment().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseFormatError(s.to_string()))
    }
}

/// What is being encoded: the whole store or one record.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(untagged)]
pub enum Payload<'a> {
    All(&'a [Album]),
    One(&'a Album),
}

/// Encoded response body and its media type.
#[derive(Debug, Clone, PartialEq)]
pub struct Encoded {
    pub content_type: &'static str,
    pub body: Vec<u8>,
}

#[derive(Debug, Error)]
pub enum EncodeError {
    #[error("JSON encoding failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("XML encoding failed: {0}")]
    Xml(String),

    #[error("YAML encoding failed: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("no encoder registered for format '{0}'")]
    Unsupported(Format),

    #[error("encoding task failed: {0}")]
    Join(String),
}

/// Serializes albums into one wire format.
pub trait Encoder: Send + Sync {
    /// The format tag this encoder is registered under.
    fn format(&self) -> Format;

    /// Media type sent as `Content-Type`.
    fn content_type(&self) -> &'static str;

    fn encode(&self, payload: Payload<'_>) -> Result<Vec<u8>, EncodeError>;
}

/// Encoders keyed by format tag.
#[derive(Clone)]
pub struct EncoderRegistry {
    encoders: HashMap<Format, Arc<dyn Encoder>>,
}

impl EncoderRegistry {
    /// A registry with no encoders.
    pub fn empty() -> Self {
        Self {
            encoders: HashMap::new(),
        }
    }

    /// Register `encoder`, replacing any encoder for the same format.
    pub fn register(&mut self, encoder: Arc<dyn Encoder>) {
        self.encoders.insert(encoder.format(), encoder);
    }

    pub fn get(&self, format: Format) -> Option<Arc<dyn Encoder>> {
        self.encoders.get(&format).cloned()
    }
}

impl Default for EncoderRegistry {
    fn default() -> Self {
        let mut registry = Self::empty();
        registry.register(Arc::new(JsonEncoder));
        registry.register(Arc::new(XmlEncoder));
        registry.register(Arc::new(YamlEncoder));
        registry.register(Arc::new(ProtobufEncoder));
        registry
    }
}
