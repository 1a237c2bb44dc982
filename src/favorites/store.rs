use std::sync::Arc;

use parking_lot::Mutex;
use serde::Deserialize;

use crate::model::Movie;
use crate::storage::KeyValueStore;

/// Whole-set persistence for favorites.
///
/// Implementations never fail outward: a store that was never written, or
/// whose payload no longer parses, loads as empty, and a failed save is
/// logged and dropped.
pub trait FavoritesStore: Send + Sync {
    fn save(&self, movies: &[Movie]);
    fn load(&self) -> Vec<Movie>;
    fn clear(&self);
}

/// Store held entirely in memory. Deterministic, for tests.
#[derive(Default)]
pub struct InMemoryFavoritesStore {
    movies: Mutex<Vec<Movie>>,
}

impl InMemoryFavoritesStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_movies(movies: Vec<Movie>) -> Self {
        Self {
            movies: Mutex::new(movies),
        }
    }
}

impl FavoritesStore for InMemoryFavoritesStore {
    fn save(&self, movies: &[Movie]) {
        *self.movies.lock() = movies.to_vec();
    }

    fn load(&self) -> Vec<Movie> {
        self.movies.lock().clone()
    }

    fn clear(&self) {
        self.movies.lock().clear();
    }
}

/// Store persisting the set as one JSON blob under one key.
pub struct KeyValueFavoritesStore {
    kv: Arc<dyn KeyValueStore>,
    key: String,
}

impl KeyValueFavoritesStore {
    pub const DEFAULT_KEY: &'static str = "FAVORITE_MOVIES";

    pub fn new(kv: Arc<dyn KeyValueStore>, key: impl Into<String>) -> Self {
        Self {
            kv,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }
}

impl FavoritesStore for KeyValueFavoritesStore {
    fn save(&self, movies: &[Movie]) {
        let payload = match serde_json::to_vec(movies) {
            Ok(payload) => payload,
            Err(e) => {
                tracing::warn!(key = %self.key, error = %e, "Failed to encode favorites");
                return;
            }
        };

        match self.kv.set(&self.key, &payload) {
            Ok(()) => tracing::debug!(key = %self.key, count = movies.len(), "Saved favorites"),
            Err(e) => tracing::warn!(key = %self.key, error = %e, "Failed to save favorites"),
        }
    }

    fn load(&self) -> Vec<Movie> {
        let payload = match self.kv.get(&self.key) {
            Ok(Some(payload)) => payload,
            Ok(None) => return Vec::new(),
            Err(e) => {
                tracing::warn!(key = %self.key, error = %e, "Failed to read favorites");
                return Vec::new();
            }
        };

        match decode_favorites(&payload) {
            Ok(movies) => movies,
            Err(e) => {
                tracing::warn!(key = %self.key, error = %e, "Stored favorites are corrupt, treating as empty");
                Vec::new()
            }
        }
    }

    fn clear(&self) {
        match self.kv.remove(&self.key) {
            Ok(()) => tracing::info!(key = %self.key, "Cleared favorites"),
            Err(e) => tracing::warn!(key = %self.key, error = %e, "Failed to clear favorites"),
        }
    }
}

/// Entries as they may appear on disk. Older payloads stored bare titles.
#[derive(Deserialize)]
#[serde(untagged)]
enum StoredEntry {
    Record(Movie),
    Title(String),
}

fn decode_favorites(payload: &[u8]) -> Result<Vec<Movie>, serde_json::Error> {
    let entries: Vec<StoredEntry> = serde_json::from_slice(payload)?;
    Ok(entries
        .into_iter()
        .map(|entry| match entry {
            StoredEntry::Record(movie) => movie,
            StoredEntry::Title(title) => Movie::new(title, ""),
        })
        .collect())
}
