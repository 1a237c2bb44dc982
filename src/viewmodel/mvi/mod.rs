//! Model-View-Intent primitives shared by the view-models.
//!
//! ```text
//! Input ──→ Intent ──→ Reducer ──→ State ──→ StateCells ──→ View
//!   ↑                                                        │
//!   └────────────────────────────────────────────────────────┘
//! ```
//!
//! - **State**: immutable snapshot of one screen
//! - **Intent**: user gesture or async completion
//! - **Reducer**: pure `(State, Intent) -> State`

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
