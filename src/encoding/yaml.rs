//! YAML encoder.

use crate::encoding::{EncodeError, Encoder, Format, Payload};

pub const YAML_CONTENT_TYPE: &str = "application/x-yaml; charset=utf-8";

#[derive(Debug, Clone, Copy, Default)]
pub struct YamlEncoder;

impl Encoder for YamlEncoder {
    fn format(&self) -> Format {
        Format::Yaml
    }

    fn content_type(&self) -> &'static str {
        YAML_CONTENT_TYPE
    }

    fn encode(&self, payload: Payload<'_>) -> Result<Vec<u8>, EncodeError> {
        Ok(serde_yaml::to_string(&payload)?.into_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::Album;

    #[test]
    fn test_sequence_of_mappings() {
        let albums = vec![
            Album::new("1", "Album 1", "Artist 1", 56.99),
            Album::new("2", "Album 2", "Artist 2", 56.99),
        ];
        let body = YamlEncoder.encode(Payload::All(&albums)).unwrap();
        let text = String::from_utf8(body).unwrap();

        assert!(text.starts_with("- id: '1'"));
        let decoded: Vec<Album> = serde_yaml::from_str(&text).unwrap();
        assert_eq!(decoded, albums);
    }
}
