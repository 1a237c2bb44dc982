//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_backend;

use moviefav::api::{FetchError, MovieSource};
use moviefav::app::AppContext;
use moviefav::config::ApiConfig;
use moviefav::favorites::{FavoritesRepository, InMemoryFavoritesStore, StoredFavorites};
use moviefav::model::Movie;
use moviefav::signal::OneShot;
use moviefav::storage::{KeyValueStore, MemoryKeyValueStore};
use moviefav::theme::ThemeHandle;
use moviefav::viewmodel::detail::DEFAULT_SEARCH_HOST;
use parking_lot::Mutex;
use std::collections::VecDeque;
use std::net::TcpListener;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;

/// Body the fake movies endpoint returns for a single movie.
pub const DOCTOR_STRANGE_JSON: &str = r#"[{
    "imdbID": "tt1",
    "Title": "Doctor Strange",
    "Year": "2016",
    "Runtime": "115",
    "Poster": null,
    "Type": "movie"
}]"#;

pub fn doctor_strange() -> Movie {
    Movie::new("Doctor Strange", "2016")
        .with_id("tt1")
        .with_runtime("115")
}

pub fn heat() -> Movie {
    Movie::new("Heat", "1995").with_id("tt0113277")
}

/// Find an address nothing is listening on.
pub fn closed_port_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind to free port");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{}/movies", port)
}

pub fn api_config(base_url: &str) -> ApiConfig {
    ApiConfig {
        base_url: base_url.to_string(),
        connect_timeout_seconds: 2,
        ..ApiConfig::default()
    }
}

/// One scripted reply of a [`ScriptedSource`].
pub struct Scripted {
    pub delay: Duration,
    pub result: Result<Vec<Movie>, FetchError>,
}

impl Scripted {
    pub fn ok(movies: Vec<Movie>) -> Self {
        Self {
            delay: Duration::ZERO,
            result: Ok(movies),
        }
    }

    pub fn err(error: FetchError) -> Self {
        Self {
            delay: Duration::ZERO,
            result: Err(error),
        }
    }

    pub fn after(mut self, ms: u64) -> Self {
        self.delay = Duration::from_millis(ms);
        self
    }
}

/// In-process movie source answering from a queue of scripted replies.
///
/// Once the queue is empty every fetch returns an empty list.
#[derive(Default)]
pub struct ScriptedSource {
    replies: Mutex<VecDeque<Scripted>>,
    calls: AtomicUsize,
}

impl ScriptedSource {
    pub fn new(replies: Vec<Scripted>) -> Arc<Self> {
        Arc::new(Self {
            replies: Mutex::new(replies.into()),
            calls: AtomicUsize::new(0),
        })
    }

    pub fn push(&self, reply: Scripted) {
        self.replies.lock().push_back(reply);
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl MovieSource for ScriptedSource {
    fn fetch_all(&self) -> OneShot<Vec<Movie>, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let reply = self
            .replies
            .lock()
            .pop_front()
            .unwrap_or_else(|| Scripted::ok(Vec::new()));

        OneShot::spawn(async move {
            if !reply.delay.is_zero() {
                tokio::time::sleep(reply.delay).await;
            }
            reply.result
        })
    }
}

pub fn memory_favorites() -> Arc<dyn FavoritesRepository> {
    Arc::new(StoredFavorites::new(Arc::new(InMemoryFavoritesStore::new())))
}

/// Context backed entirely by memory.
pub fn memory_context(source: Arc<dyn MovieSource>) -> AppContext {
    let kv: Arc<dyn KeyValueStore> = Arc::new(MemoryKeyValueStore::new());
    AppContext::new(
        source,
        memory_favorites(),
        ThemeHandle::load(kv, "APP_THEME"),
        DEFAULT_SEARCH_HOST,
    )
}

/// Write `content` to a config file in a fresh temp dir.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}

/// Poll `check` until it holds or `timeout` elapses.
pub async fn wait_until<F>(timeout: Duration, mut check: F) -> bool
where
    F: FnMut() -> bool,
{
    let deadline = tokio::time::Instant::now() + timeout;
    while tokio::time::Instant::now() < deadline {
        if check() {
            return true;
        }
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
    check()
}
