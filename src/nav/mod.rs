//! Screen-to-screen navigation.
//!
//! The root [`Navigator`] owns one [`ScreenStack`] per [`Tab`] and an arena
//! of live coordinators keyed by [`FlowId`]. A coordinator builds its
//! view-model when started and keeps it for as long as its flow is in the
//! arena. Selection events reach the coordinator that owns the top screen
//! through [`MovieSelection`]; popping a screen removes its flow from the
//! arena and from the parent's child slot, so nothing keeps the popped
//! view-model alive.

mod arena;
mod coordinator;
mod navigator;
mod screen;

pub use arena::FlowId;
pub use coordinator::{
    Coordinator, FavoritesCoordinator, MovieDetailCoordinator, MovieListCoordinator,
    MovieSelection,
};
pub use navigator::{Navigator, DETAIL_SLOT};
pub use screen::{Screen, ScreenStack, ScreenView, Tab};
