//! Protobuf encoder for the local store.

use prost::Message;

use crate::encoding::{EncodeError, Encoder, Format, Payload};
use crate::proto::{list_of_albums, ListOfAlbums};

pub const PROTOBUF_CONTENT_TYPE: &str = "application/x-protobuf";

#[derive(Debug, Clone, Copy, Default)]
pub struct ProtobufEncoder;

impl Encoder for ProtobufEncoder {
    fn format(&self) -> Format {
        Format::Protobuf
    }

    fn content_type(&self) -> &'static str {
        PROTOBUF_CONTENT_TYPE
    }

    fn encode(&self, payload: Payload<'_>) -> Result<Vec<u8>, EncodeError> {
        Ok(match payload {
            Payload::All(albums) => ListOfAlbums::from(albums).encode_to_vec(),
            Payload::One(album) => list_of_albums::Album::from(album).encode_to_vec(),
        })
    }
}
