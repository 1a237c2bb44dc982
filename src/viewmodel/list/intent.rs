use crate::model::Movie;
use crate::viewmodel::mvi::Intent;

#[derive(Debug, Clone)]
pub enum ListIntent {
    /// Screen became active or the user asked for a refresh.
    Reload,
    /// The current request finished with data.
    Loaded(Vec<Movie>),
    /// The current request failed; carries the message to show.
    Failed(String),
}

impl Intent for ListIntent {}
