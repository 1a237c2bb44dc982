//! Process-scoped dependencies.

use std::sync::Arc;

use thiserror::Error;

use crate::api::{MovieApiClient, MovieRepository, MovieSource};
use crate::config::{Config, ConfigError};
use crate::favorites::{FavoritesRepository, KeyValueFavoritesStore, StoredFavorites};
use crate::storage::{FileKeyValueStore, KeyValueStore};
use crate::theme::ThemeHandle;

#[derive(Debug, Error)]
pub enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Failed to build HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),
}

/// Everything coordinators need to build view-models.
///
/// Built once by the process root and passed down explicitly; cloning
/// shares the same instances.
#[derive(Clone)]
pub struct AppContext {
    pub movies: Arc<dyn MovieSource>,
    pub favorites: Arc<dyn FavoritesRepository>,
    pub theme: ThemeHandle,
    pub trailer_host: String,
}

impl AppContext {
    pub fn new(
        movies: Arc<dyn MovieSource>,
        favorites: Arc<dyn FavoritesRepository>,
        theme: ThemeHandle,
        trailer_host: impl Into<String>,
    ) -> Self {
        Self {
            movies,
            favorites,
            theme,
            trailer_host: trailer_host.into(),
        }
    }

    /// Production wiring: HTTP client behind the movie repository, and
    /// favorites plus theme in the on-disk key-value store.
    pub fn from_config(config: &Config) -> Result<Self, StartupError> {
        config.validate()?;

        let client = MovieApiClient::new(&config.api)?;
        let movies: Arc<dyn MovieSource> = Arc::new(MovieRepository::new(Arc::new(client)));

        let data_dir = config.storage.resolved_dir();
        tracing::debug!(dir = %data_dir.display(), "Using data directory");
        let kv: Arc<dyn KeyValueStore> = Arc::new(FileKeyValueStore::new(data_dir));

        let store = KeyValueFavoritesStore::new(kv.clone(), config.storage.favorites_key.clone());
        let favorites: Arc<dyn FavoritesRepository> =
            Arc::new(StoredFavorites::new(Arc::new(store)));
        let theme = ThemeHandle::load(kv, config.storage.theme_key.clone());

        Ok(Self::new(
            movies,
            favorites,
            theme,
            config.trailer.search_host.clone(),
        ))
    }
}
