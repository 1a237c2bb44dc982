use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::favorites::KeyValueFavoritesStore;
use crate::theme::ThemeHandle;
use crate::viewmodel::detail::DEFAULT_SEARCH_HOST;

/// Root configuration container.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub trailer: TrailerConfig,
}

/// Remote movie list endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Full URL of the JSON array endpoint.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Connection timeout in seconds (default: 10).
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u64,
    /// User-Agent header sent with every request.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

/// Local key-value persistence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Data directory. Defaults to the platform data dir.
    #[serde(default)]
    pub dir: Option<PathBuf>,
    /// Key holding the favorites blob.
    #[serde(default = "default_favorites_key")]
    pub favorites_key: String,
    /// Key holding the selected theme.
    #[serde(default = "default_theme_key")]
    pub theme_key: String,
}

/// Trailer search link construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrailerConfig {
    /// Host of the video search site (e.g., "www.youtube.com").
    #[serde(default = "default_search_host")]
    pub search_host: String,
}

fn default_base_url() -> String {
    "https://my-json-server.typicode.com/horizon-code-academy/fake-movies-api/movies".to_string()
}

fn default_connect_timeout() -> u64 {
    10
}

fn default_user_agent() -> String {
    concat!("moviefav/", env!("CARGO_PKG_VERSION")).to_string()
}

fn default_favorites_key() -> String {
    KeyValueFavoritesStore::DEFAULT_KEY.to_string()
}

fn default_theme_key() -> String {
    ThemeHandle::DEFAULT_KEY.to_string()
}

fn default_search_host() -> String {
    DEFAULT_SEARCH_HOST.to_string()
}

impl StorageConfig {
    /// Data directory to use: the configured one, else
    /// `<data_dir>/moviefav`, else `./.moviefav`.
    pub fn resolved_dir(&self) -> PathBuf {
        if let Some(dir) = &self.dir {
            return dir.clone();
        }
        dirs::data_dir()
            .map(|dir| dir.join("moviefav"))
            .unwrap_or_else(|| PathBuf::from(".moviefav"))
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            connect_timeout_seconds: default_connect_timeout(),
            user_agent: default_user_agent(),
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            dir: None,
            favorites_key: default_favorites_key(),
            theme_key: default_theme_key(),
        }
    }
}

impl Default for TrailerConfig {
    fn default() -> Self {
        Self {
            search_host: default_search_host(),
        }
    }
}
