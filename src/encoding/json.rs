//! JSON encoder (four-space indented).

use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use crate::encoding::{EncodeError, Encoder, Format, Payload};

pub const JSON_CONTENT_TYPE: &str = "application/json; charset=utf-8";

#[derive(Debug, Clone, Copy, Default)]
pub struct JsonEncoder;

impl Encoder for JsonEncoder {
    fn format(&self) -> Format {
        Format::Json
    }

    fn content_type(&self) -> &'static str {
        JSON_CONTENT_TYPE
    }

    fn encode(&self, payload: Payload<'_>) -> Result<Vec<u8>, EncodeError> {
        let mut body = Vec::new();
        let mut serializer =
            serde_json::Serializer::with_formatter(&mut body, PrettyFormatter::with_indent(b"    "));
        payload.serialize(&mut serializer)?;
        Ok(body)
    }
}
