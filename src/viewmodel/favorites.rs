//! Favorites tab.

use std::sync::Arc;

use crate::favorites::FavoritesRepository;
use crate::model::Movie;
use crate::signal::{Signal, StateCell};

pub struct FavoritesViewModel {
    repository: Arc<dyn FavoritesRepository>,
    favorites: StateCell<Vec<Movie>>,
}

impl FavoritesViewModel {
    pub fn new(repository: Arc<dyn FavoritesRepository>) -> Self {
        let favorites = StateCell::new(repository.favorites());
        Self {
            repository,
            favorites,
        }
    }

    pub fn favorites(&self) -> Signal<Vec<Movie>> {
        self.favorites.signal()
    }

    /// Reload from the repository. Called each time the screen is shown.
    pub fn refresh(&self) {
        let movies = self.repository.favorites();
        tracing::debug!(count = movies.len(), "Loaded favorite movies");
        self.favorites.set_if_changed(movies);
    }
}
