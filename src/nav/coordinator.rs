use std::sync::Arc;

use crate::app::AppContext;
use crate::model::Movie;
use crate::nav::ScreenView;
use crate::viewmodel::{FavoritesViewModel, MovieDetailViewModel, MovieListViewModel};

/// Owner of one flow: builds its screen's view-model on start and keeps it
/// alive until the flow is released.
pub trait Coordinator: Send {
    fn name(&self) -> &'static str;

    fn start(&mut self, context: &AppContext) -> ScreenView;

    /// Flows whose screen lists movies handle selection here.
    fn movie_selection(&mut self) -> Option<&mut dyn MovieSelection> {
        None
    }
}

pub trait MovieSelection {
    /// Build the coordinator for the flow that shows `movie`.
    fn did_select_movie(&mut self, movie: Movie) -> Box<dyn Coordinator>;
}

#[derive(Default)]
pub struct MovieListCoordinator {
    view_model: Option<Arc<MovieListViewModel>>,
}

impl MovieListCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view_model(&self) -> Option<&Arc<MovieListViewModel>> {
        self.view_model.as_ref()
    }
}

impl Coordinator for MovieListCoordinator {
    fn name(&self) -> &'static str {
        "movie_list"
    }

    fn start(&mut self, context: &AppContext) -> ScreenView {
        let view_model = MovieListViewModel::new(context.movies.clone());
        self.view_model = Some(view_model.clone());
        ScreenView::MovieList(view_model)
    }

    fn movie_selection(&mut self) -> Option<&mut dyn MovieSelection> {
        Some(self)
    }
}

impl MovieSelection for MovieListCoordinator {
    fn did_select_movie(&mut self, movie: Movie) -> Box<dyn Coordinator> {
        Box::new(MovieDetailCoordinator::new(movie))
    }
}

#[derive(Default)]
pub struct FavoritesCoordinator {
    view_model: Option<Arc<FavoritesViewModel>>,
}

impl FavoritesCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view_model(&self) -> Option<&Arc<FavoritesViewModel>> {
        self.view_model.as_ref()
    }
}

impl Coordinator for FavoritesCoordinator {
    fn name(&self) -> &'static str {
        "favorites"
    }

    fn start(&mut self, context: &AppContext) -> ScreenView {
        let view_model = Arc::new(FavoritesViewModel::new(context.favorites.clone()));
        self.view_model = Some(view_model.clone());
        ScreenView::Favorites(view_model)
    }

    fn movie_selection(&mut self) -> Option<&mut dyn MovieSelection> {
        Some(self)
    }
}

impl MovieSelection for FavoritesCoordinator {
    fn did_select_movie(&mut self, movie: Movie) -> Box<dyn Coordinator> {
        Box::new(MovieDetailCoordinator::new(movie))
    }
}

pub struct MovieDetailCoordinator {
    movie: Movie,
    view_model: Option<Arc<MovieDetailViewModel>>,
}

impl MovieDetailCoordinator {
    pub fn new(movie: Movie) -> Self {
        Self {
            movie,
            view_model: None,
        }
    }

    pub fn movie(&self) -> &Movie {
        &self.movie
    }

    pub fn view_model(&self) -> Option<&Arc<MovieDetailViewModel>> {
        self.view_model.as_ref()
    }
}

impl Coordinator for MovieDetailCoordinator {
    fn name(&self) -> &'static str {
        "movie_detail"
    }

    fn start(&mut self, context: &AppContext) -> ScreenView {
        let view_model = Arc::new(MovieDetailViewModel::new(
            self.movie.clone(),
            context.favorites.clone(),
            context.trailer_host.clone(),
        ));
        self.view_model = Some(view_model.clone());
        ScreenView::MovieDetail(view_model)
    }
}
