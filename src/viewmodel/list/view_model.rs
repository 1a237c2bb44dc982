//! Movie list screen.
//!
//! Outputs are read-only [`Signal`]s; the only input is
//! [`MovieListViewModel::reload`]. Fetch completions land on a background
//! task and go through [`ListReducer`] under a lock, then fan out to the
//! output cells. The presentation consumer observes them, in order, by
//! draining its own watchers.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::api::{FetchError, MovieSource};
use crate::model::Movie;
use crate::signal::{CancelHandle, Signal, StateCell};
use crate::viewmodel::list::intent::ListIntent;
use crate::viewmodel::list::reducer::ListReducer;
use crate::viewmodel::list::state::{ListPhase, ListState};
use crate::viewmodel::mvi::Reducer;

pub struct MovieListViewModel {
    source: Arc<dyn MovieSource>,
    state: Mutex<ListState>,
    requests: Mutex<RequestSlot>,

    movies: StateCell<Vec<Movie>>,
    loading: StateCell<bool>,
    error: StateCell<Option<String>>,
    phase: StateCell<ListPhase>,
}

#[derive(Default)]
struct RequestSlot {
    issued: u64,
    active: Option<InFlight>,
}

struct InFlight {
    request: u64,
    handle: CancelHandle,
}

impl MovieListViewModel {
    pub fn new(source: Arc<dyn MovieSource>) -> Arc<Self> {
        let initial = ListState::default();
        Arc::new(Self {
            source,
            movies: StateCell::new(initial.movies.clone()),
            loading: StateCell::new(initial.is_loading()),
            error: StateCell::new(initial.error.clone()),
            phase: StateCell::new(initial.phase),
            state: Mutex::new(initial),
            requests: Mutex::new(RequestSlot::default()),
        })
    }

    pub fn movies(&self) -> Signal<Vec<Movie>> {
        self.movies.signal()
    }

    pub fn loading(&self) -> Signal<bool> {
        self.loading.signal()
    }

    pub fn error(&self) -> Signal<Option<String>> {
        self.error.signal()
    }

    pub fn phase(&self) -> Signal<ListPhase> {
        self.phase.signal()
    }

    pub fn state(&self) -> ListState {
        self.state.lock().clone()
    }

    /// Start a fresh fetch. A request still in flight is cancelled first,
    /// so only the newest request can ever reach the state.
    pub fn reload(self: &Arc<Self>) {
        let mut slot = self.requests.lock();
        if let Some(previous) = slot.active.take() {
            tracing::debug!(request = previous.request, "Superseding in-flight movie request");
            previous.handle.cancel();
        }

        slot.issued += 1;
        let request = slot.issued;
        self.dispatch(ListIntent::Reload);

        let view_model = Arc::downgrade(self);
        let handle = self.source.fetch_all().subscribe(move |result| {
            if let Some(view_model) = view_model.upgrade() {
                view_model.complete(request, result);
            }
        });
        slot.active = Some(InFlight { request, handle });
    }

    /// Wait until the current request has finished and return the state.
    ///
    /// Returns immediately if the last request already finished; waits
    /// indefinitely on a list that has never been reloaded.
    pub async fn settled(&self) -> ListState {
        let mut phase = self.phase.subscribe();
        while let Some(current) = phase.next().await {
            if current.is_terminal() {
                break;
            }
        }
        self.state()
    }

    fn complete(&self, request: u64, result: Result<Vec<Movie>, FetchError>) {
        let mut slot = self.requests.lock();
        match &slot.active {
            Some(active) if active.request == request => {}
            _ => {
                tracing::trace!(request, "Dropping result of superseded movie request");
                return;
            }
        }
        slot.active = None;

        let intent = match result {
            Ok(movies) => {
                tracing::debug!(request, count = movies.len(), "Movie list loaded");
                ListIntent::Loaded(movies)
            }
            Err(e) => {
                tracing::warn!(request, kind = e.kind(), error = %e, "Movie list failed to load");
                ListIntent::Failed(e.to_string())
            }
        };
        self.dispatch(intent);
    }

    fn dispatch(&self, intent: ListIntent) {
        let mut state = self.state.lock();
        let next = ListReducer::reduce(state.clone(), intent);
        if next == *state {
            return;
        }

        // Data before flags, so anyone reacting to `loading == false`
        // already sees the outcome.
        if next.phase == ListPhase::Loaded {
            self.movies.set(next.movies.clone());
        } else {
            self.movies.set_if_changed(next.movies.clone());
        }
        self.error.set_if_changed(next.error.clone());
        self.loading.set_if_changed(next.is_loading());
        self.phase.set_if_changed(next.phase);

        *state = next;
    }
}

impl Drop for MovieListViewModel {
    fn drop(&mut self) {
        if let Some(active) = self.requests.get_mut().active.take() {
            active.handle.cancel();
        }
    }
}
