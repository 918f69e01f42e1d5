//! Synthetic startup dataset.

use crate::store::Album;

/// Price given to every seeded album unless configured otherwise.
pub const DEFAULT_SEED_PRICE: f64 = 56.99;

/// Number of albums seeded at startup unless configured otherwise.
pub const DEFAULT_SEED_COUNT: usize = 999_999;

/// Build `count` albums with sequential ids starting at `"1"`.
pub fn synthetic_albums(count: usize, price: f64) -> Vec<Album> {
    (1..=count)
        .map(|i| Album {
            id: i.to_string(),
            title: format!("Album {}", i),
            artist: format!("Artist {}", i),
            price,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_sequential_from_one() {
        let albums = synthetic_albums(3, DEFAULT_SEED_PRICE);
        assert_eq!(albums.len(), 3);
        assert_eq!(albums[0], Album::new("1", "Album 1", "Artist 1", 56.99));
        assert_eq!(albums[2], Album::new("3", "Album 3", "Artist 3", 56.99));
    }

    #[test]
    fn test_zero_count_is_empty() {
        assert!(synthetic_albums(0, 1.0).is_empty());
    }
}
