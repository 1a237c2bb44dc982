//! Per-screen view-models.
//!
//! Each view-model exposes read-only [`Signal`](crate::signal::Signal)
//! outputs and plain-method inputs. Coordinators create them when a screen
//! is pushed and drop them when it is popped.

pub mod detail;
pub mod favorites;
pub mod list;
pub mod mvi;

pub use detail::MovieDetailViewModel;
pub use favorites::FavoritesViewModel;
pub use list::{ListIntent, ListPhase, ListReducer, ListState, MovieListViewModel};
