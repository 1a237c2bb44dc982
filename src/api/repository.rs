use std::sync::Arc;

use crate::api::{FetchError, MovieSource};
use crate::model::Movie;
use crate::signal::OneShot;

/// Domain-facing movie source.
///
/// Forwards to the wrapped source and logs what it hands to view-models.
/// Cancellation passes straight through to the wrapped request.
pub struct MovieRepository {
    source: Arc<dyn MovieSource>,
}

impl MovieRepository {
    pub fn new(source: Arc<dyn MovieSource>) -> Self {
        Self { source }
    }
}

impl MovieSource for MovieRepository {
    fn fetch_all(&self) -> OneShot<Vec<Movie>, FetchError> {
        self.source.fetch_all().map(|movies| {
            tracing::debug!(count = movies.len(), "Repository provided movies");
            movies
        })
    }
}
