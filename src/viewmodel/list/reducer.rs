use crate::viewmodel::list::intent::ListIntent;
use crate::viewmodel::list::state::{ListPhase, ListState};
use crate::viewmodel::mvi::Reducer;

pub struct ListReducer;

impl Reducer for ListReducer {
    type State = ListState;
    type Intent = ListIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ListIntent::Reload => ListState {
                phase: ListPhase::Loading,
                error: None,
                ..state
            },
            ListIntent::Loaded(movies) => match state.phase {
                ListPhase::Loading => ListState {
                    phase: ListPhase::Loaded,
                    movies,
                    error: None,
                },
                _ => state,
            },
            ListIntent::Failed(message) => match state.phase {
                // Previous data stays visible under the error
                ListPhase::Loading => ListState {
                    phase: ListPhase::Failed,
                    error: Some(message),
                    ..state
                },
                _ => state,
            },
        }
    }
}
