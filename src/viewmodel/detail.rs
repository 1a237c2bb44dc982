//! Movie detail screen.

use std::sync::Arc;

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

use crate::favorites::FavoritesRepository;
use crate::model::Movie;
use crate::signal::{Signal, StateCell};

/// Characters escaped inside a query-string value.
const QUERY_VALUE: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'&')
    .add(b'+')
    .add(b'<')
    .add(b'=')
    .add(b'>')
    .add(b'`');

pub const DEFAULT_SEARCH_HOST: &str = "www.youtube.com";

/// Fixed fields derived once from the record, plus the favorite flag.
pub struct MovieDetailViewModel {
    movie: Movie,
    repository: Arc<dyn FavoritesRepository>,
    search_host: String,

    title: Signal<String>,
    year: Signal<String>,
    runtime: Signal<Option<String>>,
    poster_url: Signal<Option<String>>,
    is_favorite: StateCell<bool>,
}

impl MovieDetailViewModel {
    pub fn new(
        movie: Movie,
        repository: Arc<dyn FavoritesRepository>,
        search_host: impl Into<String>,
    ) -> Self {
        let is_favorite = StateCell::new(repository.is_favorite(&movie));
        Self {
            title: Signal::constant(movie.title.clone()),
            year: Signal::constant(movie.year.clone()),
            runtime: Signal::constant(movie.runtime.clone()),
            poster_url: Signal::constant(movie.artwork_url().map(str::to_string)),
            is_favorite,
            movie,
            repository,
            search_host: search_host.into(),
        }
    }

    pub fn movie(&self) -> &Movie {
        &self.movie
    }

    pub fn title(&self) -> Signal<String> {
        self.title.clone()
    }

    pub fn year(&self) -> Signal<String> {
        self.year.clone()
    }

    pub fn runtime(&self) -> Signal<Option<String>> {
        self.runtime.clone()
    }

    pub fn poster_url(&self) -> Signal<Option<String>> {
        self.poster_url.clone()
    }

    pub fn is_favorite(&self) -> Signal<bool> {
        self.is_favorite.signal()
    }

    /// Toggle membership, then publish whatever the repository now reports.
    pub fn toggle_favorite(&self) {
        self.repository.toggle_favorite(&self.movie);
        let now = self.repository.is_favorite(&self.movie);
        tracing::debug!(title = %self.movie.title, is_favorite = now, "Favorite toggled");
        self.is_favorite.set(now);
    }

    /// Re-read membership, for when the screen is shown again.
    pub fn refresh(&self) {
        self.is_favorite
            .set_if_changed(self.repository.is_favorite(&self.movie));
    }

    /// External video search for this title's trailer.
    pub fn trailer_search_url(&self) -> String {
        trailer_search_url(&self.search_host, &self.movie.title)
    }
}

pub fn trailer_search_url(host: &str, title: &str) -> String {
    format!(
        "https://{host}/results?search_query={}+trailer",
        utf8_percent_encode(title, QUERY_VALUE)
    )
}
