use crate::model::Movie;
use crate::viewmodel::mvi::UiState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListPhase {
    #[default]
    Idle,
    Loading,
    Loaded,
    Failed,
}

impl ListPhase {
    /// Loaded or failed: the request that was running has finished.
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Loaded | Self::Failed)
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ListState {
    pub phase: ListPhase,
    /// Last successfully loaded list. Kept across failures.
    pub movies: Vec<Movie>,
    pub error: Option<String>,
}

impl UiState for ListState {}

impl ListState {
    pub fn is_loading(&self) -> bool {
        self.phase == ListPhase::Loading
    }
}
