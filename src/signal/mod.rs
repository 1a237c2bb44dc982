//! Observable state primitives.
//!
//! Every value that crosses a boundary between the core and a presentation
//! layer travels through one of two shapes:
//!
//! - [`StateCell`] / [`Signal`]: a current value plus an ordered stream of
//!   every later update. New subscribers receive the current value first.
//! - [`OneShot`]: a pending asynchronous operation that resolves to at most
//!   one success or exactly one error.
//!
//! Both hand out a [`CancelHandle`] on subscription. Cancelling is
//! idempotent and is a no-op once the producer has finished.
//!
//! Updates are delivered through per-subscriber channels, so whichever task
//! drains a [`Watcher`] is the single context that observes them, in
//! emission order.

mod cancel;
mod once;
mod state;

pub use cancel::CancelHandle;
pub use once::{OneShot, Outcome};
pub use state::{Signal, StateCell, Watcher};
