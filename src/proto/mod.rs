//! Protobuf wire schema for the binary album encoding.
//!
//! ```text
//! package albums;
//!
//! message AlbumRequest {}
//! message ListOfAlbums {
//!   message Album { string id = 1; string title = 2; string artist = 3; double price = 4; }
//!   repeated Album albums = 1;
//! }
//! service AlbumService { rpc GetAlbum(AlbumRequest) returns (ListOfAlbums); }
//! ```
//!
//! The service stubs (`album_service_client`, `album_service_server`) are generated by
//! `build.rs`.

use crate::store::Album;

/// Parameterless request for the full album list.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct AlbumRequest {}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ListOfAlbums {
    #[prost(message, repeated, tag = "1")]
    pub albums: ::prost::alloc::vec::Vec<list_of_albums::Album>,
}

/// Nested message types for `ListOfAlbums`.
pub mod list_of_albums {
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct Album {
        #[prost(string, tag = "1")]
        pub id: ::prost::alloc::string::String,
        #[prost(string, tag = "2")]
        pub title: ::prost::alloc::string::String,
        #[prost(string, tag = "3")]
        pub artist: ::prost::alloc::string::String,
        #[prost(double, tag = "4")]
        pub price: f64,
    }
}

include!(concat!(env!("OUT_DIR"), "/albums.AlbumService.rs"));

////////////////////////////////////////////////////////////////////////////////////////////////////
//                                Album <=> list_of_albums::Album                                 //
////////////////////////////////////////////////////////////////////////////////////////////////////

impl From<&Album> for list_of_albums::Album {
    fn from(value: &Album) -> Self {
        list_of_albums::Album {
            id: value.id.clone(),
            title: value.title.clone(),
            artist: value.artist.clone(),
            price: value.price,
        }
    }
}

impl From<list_of_albums::Album> for Album {
    fn from(value: list_of_albums::Album) -> Self {
        Album {
            id: value.id,
            title: value.title,
            artist: value.artist,
            price: value.price,
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////
//                                    [Album] <=> ListOfAlbums                                    //
////////////////////////////////////////////////////////////////////////////////////////////////////

impl From<&[Album]> for ListOfAlbums {
    fn from(value: &[Album]) -> Self {
        ListOfAlbums {
            albums: value.iter().map(Into::into).collect(),
        }
    }
}

impl From<ListOfAlbums> for Vec<Album> {
    fn from(value: ListOfAlbums) -> Self {
        value.albums.into_iter().map(Into::into).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prost::Message;

    #[test]
    fn test_list_conversion_keeps_order_and_fields() {
        let albums = vec![
            Album::new("1", "Album 1", "Artist 1", 56.99),
            Album::new("2", "Album 2", "Artist 2", 0.1 + 0.2),
        ];
        let message = ListOfAlbums::from(albums.as_slice());
        assert_eq!(message.albums.len(), 2);
        assert_eq!(message.albums[1].title, "Album 2");

        let bytes = message.encode_to_vec();
        let decoded: Vec<Album> = ListOfAlbums::decode(bytes.as_slice()).unwrap().into();
        assert_eq!(decoded, albums);
    }

    #[test]
    fn test_empty_list_encodes_to_nothing() {
        let empty: &[Album] = &[];
        let message = ListOfAlbums::from(empty);
        assert!(message.encode_to_vec().is_empty());
    }
}
