//! Base trait for screen state.

/// Marker trait for screen state objects.
///
/// States should be:
/// - Immutable (Clone to create new states)
/// - Self-contained (all data a screen needs)
/// - Comparable (PartialEq to skip no-op publishes)
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
