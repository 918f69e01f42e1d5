//! In-memory album store.
//!
//! # Data Flow
//! ```text
//! startup:  seed(count) → Vec<Album>
//! reads:    snapshot() → Arc<Vec<Album>> (encoders, lookups)
//! writes:   append(album) → copy-on-write push
//! ```
//!
//! # Design Decisions
//! - One canonical store; wire shapes are produced at serialization time
//! - Insertion order is scan order; lookups are a linear scan
//! - Readers hold an `Arc` snapshot, so a large list can be encoded without
//!   holding the lock
//! - Appends copy the backing vector only while a snapshot is still alive

pub mod album;
pub mod seed;

use std::sync::Arc;
use tokio::sync::RwLock;

pub use album::Album;
pub use seed::{synthetic_albums, DEFAULT_SEED_COUNT, DEFAULT_SEED_PRICE};

use crate::observability::metrics;

/// Ordered, append-only collection of albums shared by all handlers.
#[derive(Debug, Default)]
pub struct AlbumStore {
    albums: RwLock<Arc<Vec<Album>>>,
}

impl AlbumStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding `albums` in the given order.
    pub fn with_albums(albums: Vec<Album>) -> Self {
        metrics::record_store_size(albums.len());
        Self {
            albums: RwLock::new(Arc::new(albums)),
        }
    }

    /// Create a store populated with `count` synthetic albums.
    pub fn seed(count: usize, price: f64) -> Self {
        let store = Self::with_albums(synthetic_albums(count, price));
        tracing::info!(count, price, "Album store seeded");
        store
    }

    /// Shared view of the albums as they are right now.
    pub async fn snapshot(&self) -> Arc<Vec<Album>> {
        self.albums.read().await.clone()
    }

    /// Every album, in insertion order.
    pub async fn list(&self) -> Vec<Album> {
        self.snapshot().await.as_ref().clone()
    }

    /// First album whose id equals `id`.
    pub async fn find_by_id(&self, id: &str) -> Option<Album> {
        self.albums
            .read()
            .await
            .iter()
            .find(|album| album.id == id)
            .cloned()
    }

    /// Add `album` to the end of the store.
    pub async fn append(&self, album: Album) {
        let mut guard = self.albums.write().await;
        Arc::make_mut(&mut guard).push(album);
        metrics::record_store_size(guard.len());
    }

    pub async fn len(&self) -> usize {
        self.albums.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.albums.read().await.is_empty()
    }
}
