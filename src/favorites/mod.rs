//! Favorite movies: persistence and membership rules.
//!
//! [`FavoritesStore`] only knows how to save and load the whole set.
//! [`FavoritesRepository`] owns the toggle/query semantics on top of it,
//! keyed by [`Movie::identity_key`](crate::model::Movie::identity_key).

mod repository;
mod store;

pub use repository::{FavoritesRepository, StoredFavorites};
pub use store::{FavoritesStore, InMemoryFavoritesStore, KeyValueFavoritesStore};
