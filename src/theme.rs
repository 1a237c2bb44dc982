//! Light/dark appearance preference.
//!
//! One [`ThemeHandle`] is created by the process root and handed to
//! whatever needs it through [`AppContext`](crate::app::AppContext).

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::signal::{Signal, StateCell};
use crate::storage::KeyValueStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

/// Shared, persisted theme state. Clones observe the same value.
#[derive(Clone)]
pub struct ThemeHandle {
    inner: Arc<ThemeInner>,
}

struct ThemeInner {
    current: StateCell<Theme>,
    kv: Arc<dyn KeyValueStore>,
    key: String,
}

impl ThemeHandle {
    pub const DEFAULT_KEY: &'static str = "APP_THEME";

    /// Read the persisted theme. Missing or unreadable values mean light.
    pub fn load(kv: Arc<dyn KeyValueStore>, key: impl Into<String>) -> Self {
        let key = key.into();
        let theme = match kv.get(&key) {
            Ok(Some(payload)) => serde_json::from_slice(&payload).unwrap_or_else(|e| {
                tracing::warn!(key = %key, error = %e, "Stored theme is corrupt, using default");
                Theme::default()
            }),
            Ok(None) => Theme::default(),
            Err(e) => {
                tracing::warn!(key = %key, error = %e, "Failed to read theme, using default");
                Theme::default()
            }
        };

        Self {
            inner: Arc::new(ThemeInner {
                current: StateCell::new(theme),
                kv,
                key,
            }),
        }
    }

    pub fn current(&self) -> Theme {
        self.inner.current.get()
    }

    pub fn signal(&self) -> Signal<Theme> {
        self.inner.current.signal()
    }

    pub fn toggle(&self) -> Theme {
        let next = self.current().toggled();
        self.apply(next);
        next
    }

    /// Publish and persist `theme`. A failed write is logged; the in-memory
    /// value still changes.
    pub fn apply(&self, theme: Theme) {
        self.inner.current.set(theme);
        tracing::info!(theme = theme.as_str(), "Theme applied");

        match serde_json::to_vec(&theme) {
            Ok(payload) => {
                if let Err(e) = self.inner.kv.set(&self.inner.key, &payload) {
                    tracing::warn!(key = %self.inner.key, error = %e, "Failed to persist theme");
                }
            }
            Err(e) => tracing::warn!(error = %e, "Failed to encode theme"),
        }
    }
}
