//! Movie record shared by the fetch client, the favorites store and the
//! view-models.

use serde::{Deserialize, Serialize};

/// Immutable movie record.
///
/// The serde names match the remote endpoint's field names, and the same
/// shape is used for the persisted favorites blob. Unknown fields (`Type`
/// and friends) are ignored on decode.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Movie {
    #[serde(rename = "imdbID", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Year")]
    pub year: String,
    #[serde(rename = "Runtime", default)]
    pub runtime: Option<String>,
    #[serde(rename = "Poster", default)]
    pub poster_url: Option<String>,
}

/// Key deciding whether two records are the same favorite-able entity.
///
/// The source id wins when present; records without one fall back to
/// their title.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MovieKey<'a> {
    Id(&'a str),
    Title(&'a str),
}

impl Movie {
    pub fn new(title: impl Into<String>, year: impl Into<String>) -> Self {
        Self {
            id: None,
            title: title.into(),
            year: year.into(),
            runtime: None,
            poster_url: None,
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_runtime(mut self, runtime: impl Into<String>) -> Self {
        self.runtime = Some(runtime.into());
        self
    }

    pub fn with_poster(mut self, poster_url: impl Into<String>) -> Self {
        self.poster_url = Some(poster_url.into());
        self
    }

    pub fn identity_key(&self) -> MovieKey<'_> {
        match self.id.as_deref() {
            Some(id) if !id.is_empty() => MovieKey::Id(id),
            _ => MovieKey::Title(&self.title),
        }
    }

    pub fn same_entity(&self, other: &Movie) -> bool {
        self.identity_key() == other.identity_key()
    }

    fn has_id(&self) -> bool {
        self.id.as_deref().is_some_and(|id| !id.is_empty())
    }

    /// Whether a stored favorite refers to the same film as `other`.
    ///
    /// Like [`Movie::same_entity`], except a record without an id also
    /// matches by title. Favorites saved as bare titles carry no id, while
    /// fetched movies always do.
    pub fn refers_to(&self, other: &Movie) -> bool {
        if self.has_id() && other.has_id() {
            return self.same_entity(other);
        }
        self.title == other.title
    }

    /// Poster URL usable for artwork, if any.
    ///
    /// Sources use an empty string or `N/A` for "no poster".
    pub fn artwork_url(&self) -> Option<&str> {
        self.poster_url
            .as_deref()
            .filter(|url| !url.is_empty() && *url != "N/A")
    }

    /// Whether `query` names this movie by id or by title (case-insensitive).
    pub fn matches(&self, query: &str) -> bool {
        self.id.as_deref() == Some(query) || self.title.eq_ignore_ascii_case(query)
    }
}
