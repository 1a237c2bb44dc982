mod intent;
mod reducer;
mod state;
mod view_model;

pub use intent::ListIntent;
pub use reducer::ListReducer;
pub use state::{ListPhase, ListState};
pub use view_model::MovieListViewModel;
