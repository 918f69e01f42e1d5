//! XML encoder.
//!
//! A list becomes `<albums><album>…</album>…</albums>`; a single record is one
//! `<album>` element. Child element names match the JSON field names.

use serde::Serialize;

use crate::encoding::{EncodeError, Encoder, Format, Payload};
use crate::store::Album;

pub const XML_CONTENT_TYPE: &str = "application/xml; charset=utf-8";

#[derive(Serialize)]
#[serde(rename = "albums")]
struct AlbumsElement<'a> {
    album: &'a [Album],
}

#[derive(Debug, Clone, Copy, Default)]
pub struct XmlEncoder;

impl Encoder for XmlEncoder {
    fn format(&self) -> Format {
        Format::Xml
    }

    fn content_type(&self) -> &'static str {
        XML_CONTENT_TYPE
    }

    fn encode(&self, payload: Payload<'_>) -> Result<Vec<u8>, EncodeError> {
        let text = match payload {
            Payload::All(albums) => quick_xml::se::to_string(&AlbumsElement { album: albums }),
            Payload::One(album) => quick_xml::se::to_string(album),
        }
        .map_err(|e| EncodeError::Xml(e.to_string()))?;
        Ok(text.into_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct AlbumsDocument {
        #[serde(default)]
        album: Vec<Album>,
    }

    #[test]
    fn test_list_layout() {
        let albums = vec![
            Album::new("1", "Album 1", "Artist 1", 56.99),
            Album::new("2", "Album 2", "Artist 2", 56.99),
        ];
        let body = XmlEncoder.encode(Payload::All(&albums)).unwrap();
        let text = String::from_utf8(body).unwrap();

        assert!(text.starts_with("<albums>"));
        assert!(text.ends_with("</albums>"));
        assert!(text.contains(
            "<album><id>1</id><title>Album 1</title><artist>Artist 1</artist><price>56.99</price></album>"
        ));

        let document: AlbumsDocument = quick_xml::de::from_str(&text).unwrap();
        assert_eq!(document.album, albums);
    }

    #[test]
    fn test_single_album_root() {
        let album = Album::new("4", "X & Y", "Coldplay", 10.5);
        let body = XmlEncoder.encode(Payload::One(&album)).unwrap();
        let text = String::from_utf8(body).unwrap();

        assert!(text.starts_with("<album>"));
        assert!(text.contains("X &amp; Y"));
        let decoded: Album = quick_xml::de::from_str(&text).unwrap();
        assert_eq!(decoded, album);
    }
}
