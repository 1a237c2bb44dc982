use std::fmt;
use std::sync::{Arc, Weak};

use parking_lot::Mutex;
use tokio::sync::mpsc;

use super::cancel::CancelHandle;

/// Writable state cell.
///
/// Holds a current value readable synchronously with [`StateCell::get`].
/// Setting always overwrites; every subscriber receives every value in the
/// order it was set. Clones share the same cell.
pub struct StateCell<T> {
    inner: Arc<Mutex<CellInner<T>>>,
}

struct CellInner<T> {
    value: T,
    next_id: u64,
    subscribers: Vec<(u64, mpsc::UnboundedSender<T>)>,
}

impl<T: Clone + Send + 'static> StateCell<T> {
    pub fn new(value: T) -> Self {
        Self {
            inner: Arc::new(Mutex::new(CellInner {
                value,
                next_id: 0,
                subscribers: Vec::new(),
            })),
        }
    }

    pub fn get(&self) -> T {
        self.inner.lock().value.clone()
    }

    /// Replace the current value and push it to every live subscriber.
    ///
    /// The lock is held while fanning out so concurrent setters cannot
    /// interleave their deliveries.
    pub fn set(&self, value: T) {
        let mut inner = self.inner.lock();
        inner.value = value.clone();
        inner
            .subscribers
            .retain(|(_, tx)| tx.send(value.clone()).is_ok());
    }

    /// Set only when the value differs from the current one.
    ///
    /// Returns whether an update was emitted.
    pub fn set_if_changed(&self, value: T) -> bool
    where
        T: PartialEq,
    {
        let mut inner = self.inner.lock();
        if inner.value == value {
            return false;
        }
        inner.value = value.clone();
        inner
            .subscribers
            .retain(|(_, tx)| tx.send(value.clone()).is_ok());
        true
    }

    /// Subscribe to the current value and all later updates.
    pub fn subscribe(&self) -> Watcher<T> {
        let (tx, rx) = mpsc::unbounded_channel();
        let mut inner = self.inner.lock();
        let id = inner.next_id;
        inner.next_id += 1;
        // Current value goes first, under the same lock as registration.
        let _ = tx.send(inner.value.clone());
        inner.subscribers.push((id, tx));
        drop(inner);

        let cell: Weak<Mutex<CellInner<T>>> = Arc::downgrade(&self.inner);
        let handle = CancelHandle::new(move || {
            if let Some(cell) = cell.upgrade() {
                cell.lock().subscribers.retain(|(sub_id, _)| *sub_id != id);
            }
        });

        Watcher { rx, handle }
    }

    pub fn subscriber_count(&self) -> usize {
        self.inner.lock().subscribers.len()
    }

    /// Read-only view for handing to a presentation layer.
    pub fn signal(&self) -> Signal<T> {
        Signal { cell: self.clone() }
    }
}

impl<T> Clone for StateCell<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for StateCell<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StateCell")
            .field("value", &self.inner.lock().value)
            .finish()
    }
}

/// Read-only side of a [`StateCell`].
pub struct Signal<T> {
    cell: StateCell<T>,
}

impl<T: Clone + Send + 'static> Signal<T> {
    /// A signal whose value never changes after construction.
    pub fn constant(value: T) -> Self {
        StateCell::new(value).signal()
    }

    pub fn get(&self) -> T {
        self.cell.get()
    }

    pub fn subscribe(&self) -> Watcher<T> {
        self.cell.subscribe()
    }
}

impl<T> Clone for Signal<T> {
    fn clone(&self) -> Self {
        Self {
            cell: self.cell.clone(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Signal<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Signal").field(&self.cell).finish()
    }
}

/// A live subscription to a [`StateCell`].
///
/// Dropping the watcher unsubscribes it.
pub struct Watcher<T> {
    rx: mpsc::UnboundedReceiver<T>,
    handle: CancelHandle,
}

impl<T> Watcher<T> {
    /// Wait for the next value.
    ///
    /// Returns `None` once cancelled or once the cell is gone and every
    /// buffered value has been read.
    pub async fn next(&mut self) -> Option<T> {
        if self.handle.is_cancelled() {
            return None;
        }
        let value = self.rx.recv().await?;
        if self.handle.is_cancelled() {
            return None;
        }
        Some(value)
    }

    /// Take the next buffered value without waiting.
    pub fn try_next(&mut self) -> Option<T> {
        if self.handle.is_cancelled() {
            return None;
        }
        self.rx.try_recv().ok()
    }

    /// Drain everything buffered so far.
    pub fn drain(&mut self) -> Vec<T> {
        let mut values = Vec::new();
        while let Some(value) = self.try_next() {
            values.push(value);
        }
        values
    }

    pub fn cancel_handle(&self) -> CancelHandle {
        self.handle.clone()
    }

    pub fn cancel(&self) {
        self.handle.cancel();
    }
}

impl<T> Drop for Watcher<T> {
    fn drop(&mut self) {
        self.handle.cancel();
    }
}
