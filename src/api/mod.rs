//! Remote movie source.
//!
//! [`MovieSource`] is the seam the list view-model depends on. The HTTP
//! implementation lives in [`client`]; [`MovieRepository`] wraps any source
//! with logging.

mod client;
mod error;
mod repository;

pub use client::{decode_movies, MovieApiClient};
pub use error::FetchError;
pub use repository::MovieRepository;

use crate::model::Movie;
use crate::signal::OneShot;

/// Anything that can produce the full movie list.
pub trait MovieSource: Send + Sync {
    /// Start fetching. The returned operation resolves once, with either
    /// the whole decoded list or a [`FetchError`].
    fn fetch_all(&self) -> OneShot<Vec<Movie>, FetchError>;
}
