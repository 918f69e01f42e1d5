//! The album record.

use serde::{Deserialize, Serialize};

/// A single album.
///
/// The identifier is assigned by whoever creates the record; the store never
/// generates or checks it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename = "album")]
pub struct Album {
    pub id: String,
    pub title: String,
    pub artist: String,
    pub price: f64,
}

impl Album {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        artist: impl Into<String>,
        price: f64,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            artist: artist.into(),
            price,
        }
    }
}
