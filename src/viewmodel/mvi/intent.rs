//! Base trait for intents.

/// Marker trait for intent objects.
///
/// Intents represent:
/// - User gestures (reload, toggle)
/// - Async completions (fetch succeeded, fetch failed)
///
/// Intents are processed by reducers to produce new states.
pub trait Intent: Send + 'static {}
