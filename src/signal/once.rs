use std::future::Future;

use tokio::sync::oneshot;

use super::cancel::CancelHandle;

/// Terminal result of a [`OneShot`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<T, E> {
    Value(T),
    Failed(E),
    Cancelled,
}

impl<T, E> Outcome<T, E> {
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}

/// A pending asynchronous operation producing one value or one error.
///
/// The work runs on a spawned tokio task. Cancelling aborts that task, so
/// any future it was driving (an HTTP request, a timer) is dropped rather
/// than merely ignored.
pub struct OneShot<T, E> {
    rx: oneshot::Receiver<Result<T, E>>,
    handle: CancelHandle,
}

impl<T, E> OneShot<T, E>
where
    T: Send + 'static,
    E: Send + 'static,
{
    /// Start `future` in the background. Must be called inside a runtime.
    pub fn spawn<F>(future: F) -> Self
    where
        F: Future<Output = Result<T, E>> + Send + 'static,
    {
        let (tx, rx) = oneshot::channel();
        let task = tokio::spawn(async move {
            let _ = tx.send(future.await);
        });
        let abort = task.abort_handle();
        Self {
            rx,
            handle: CancelHandle::new(move || abort.abort()),
        }
    }

    /// An operation that has already finished.
    pub fn ready(result: Result<T, E>) -> Self {
        let (tx, rx) = oneshot::channel();
        let _ = tx.send(result);
        Self {
            rx,
            handle: CancelHandle::detached(),
        }
    }

    pub fn cancel_handle(&self) -> CancelHandle {
        self.handle.clone()
    }

    /// Wait for the operation to finish.
    ///
    /// A result that lands after cancellation is discarded.
    pub async fn outcome(self) -> Outcome<T, E> {
        let result = self.rx.await;
        if self.handle.is_cancelled() {
            return Outcome::Cancelled;
        }
        match result {
            Ok(Ok(value)) => Outcome::Value(value),
            Ok(Err(err)) => Outcome::Failed(err),
            Err(_) => Outcome::Cancelled,
        }
    }

    /// Deliver the result to `on_result` from a background task.
    ///
    /// Nothing is delivered once the returned handle is cancelled.
    pub fn subscribe<F>(self, on_result: F) -> CancelHandle
    where
        F: FnOnce(Result<T, E>) + Send + 'static,
    {
        let handle = self.handle.clone();
        let delivery = self.handle.clone();
        tokio::spawn(async move {
            let result = match self.outcome().await {
                Outcome::Value(value) => Ok(value),
                Outcome::Failed(err) => Err(err),
                Outcome::Cancelled => return,
            };
            // Cancel may land after the outcome resolved.
            if !delivery.is_cancelled() {
                on_result(result);
            }
        });
        handle
    }

    /// Transform the success value. Cancelling the mapped operation also
    /// cancels this one.
    pub fn map<U, F>(self, f: F) -> OneShot<U, E>
    where
        U: Send + 'static,
        F: FnOnce(T) -> U + Send + 'static,
    {
        let upstream = self.handle.clone();
        let (tx, rx) = oneshot::channel();
        let task = tokio::spawn(async move {
            match self.outcome().await {
                Outcome::Value(value) => {
                    let _ = tx.send(Ok(f(value)));
                }
                Outcome::Failed(err) => {
                    let _ = tx.send(Err(err));
                }
                Outcome::Cancelled => {}
            }
        });
        let abort = task.abort_handle();
        OneShot {
            rx,
            handle: CancelHandle::new(move || {
                abort.abort();
                upstream.cancel();
            }),
        }
    }
}
