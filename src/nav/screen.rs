use std::fmt;
use std::sync::Arc;

use crate::nav::FlowId;
use crate::viewmodel::{
    FavoritesViewModel, ListPhase, MovieDetailViewModel, MovieListViewModel,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tab {
    Movies,
    Favorites,
}

impl Tab {
    pub const ALL: [Tab; 2] = [Tab::Movies, Tab::Favorites];

    pub fn title(self) -> &'static str {
        match self {
            Self::Movies => "Movies",
            Self::Favorites => "Favorites",
        }
    }
}

/// What a presentation layer renders for one stack entry.
#[derive(Clone)]
pub enum ScreenView {
    MovieList(Arc<MovieListViewModel>),
    Favorites(Arc<FavoritesViewModel>),
    MovieDetail(Arc<MovieDetailViewModel>),
}

impl ScreenView {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::MovieList(_) => "movie_list",
            Self::Favorites(_) => "favorites",
            Self::MovieDetail(_) => "movie_detail",
        }
    }

    pub fn title(&self) -> String {
        match self {
            Self::MovieList(_) => Tab::Movies.title().to_string(),
            Self::Favorites(_) => Tab::Favorites.title().to_string(),
            Self::MovieDetail(vm) => vm.title().get(),
        }
    }

    /// The screen just became the visible top of its stack.
    pub(crate) fn appeared(&self) {
        match self {
            Self::MovieList(vm) => {
                if vm.state().phase == ListPhase::Idle {
                    vm.reload();
                }
            }
            Self::Favorites(vm) => vm.refresh(),
            Self::MovieDetail(vm) => vm.refresh(),
        }
    }
}

impl fmt::Debug for ScreenView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScreenView")
            .field("kind", &self.kind())
            .field("title", &self.title())
            .finish()
    }
}

#[derive(Debug, Clone)]
pub struct Screen {
    pub flow: FlowId,
    pub view: ScreenView,
}

/// One tab's navigation stack. The first entry is the tab's root.
#[derive(Debug, Default)]
pub struct ScreenStack {
    screens: Vec<Screen>,
}

impl ScreenStack {
    pub fn top(&self) -> Option<&Screen> {
        self.screens.last()
    }

    pub fn len(&self) -> usize {
        self.screens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.screens.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Screen> {
        self.screens.iter()
    }

    pub(crate) fn push(&mut self, screen: Screen) {
        self.screens.push(screen);
    }

    pub(crate) fn pop(&mut self) -> Option<Screen> {
        self.screens.pop()
    }
}
