use crate::app::AppContext;
use crate::model::Movie;
use crate::nav::arena::FlowArena;
use crate::nav::coordinator::{FavoritesCoordinator, MovieListCoordinator};
use crate::nav::{FlowId, Screen, ScreenStack, ScreenView, Tab};

/// Child slot a list flow uses for the detail flow it opened.
pub const DETAIL_SLOT: &str = "detail";

/// Root of the navigation tree.
///
/// Owns the two tab stacks and the arena of live flows. Every method is
/// expected to be called from one task; starting a movie list flow spawns
/// its first fetch, so a tokio runtime must be running.
pub struct Navigator {
    context: AppContext,
    arena: FlowArena,
    movies: ScreenStack,
    favorites: ScreenStack,
    active_tab: Tab,
    started: bool,
}

impl Navigator {
    pub fn new(context: AppContext) -> Self {
        Self {
            context,
            arena: FlowArena::default(),
            movies: ScreenStack::default(),
            favorites: ScreenStack::default(),
            active_tab: Tab::Movies,
            started: false,
        }
    }

    pub fn context(&self) -> &AppContext {
        &self.context
    }

    /// Start both tab root flows. Calling it again does nothing.
    pub fn start(&mut self) {
        if self.started {
            tracing::warn!("Navigator already started");
            return;
        }
        self.started = true;

        let movies = self.arena.insert(Box::new(MovieListCoordinator::new()), None);
        self.present(Tab::Movies, movies);
        let favorites = self.arena.insert(Box::new(FavoritesCoordinator::new()), None);
        self.present(Tab::Favorites, favorites);
    }

    pub fn active_tab(&self) -> Tab {
        self.active_tab
    }

    pub fn select_tab(&mut self, tab: Tab) {
        if self.active_tab == tab {
            return;
        }
        tracing::debug!(tab = tab.title(), "Switching tab");
        self.active_tab = tab;
        if let Some(top) = self.stack(tab).top() {
            top.view.appeared();
        }
    }

    pub fn stack(&self, tab: Tab) -> &ScreenStack {
        match tab {
            Tab::Movies => &self.movies,
            Tab::Favorites => &self.favorites,
        }
    }

    pub fn top(&self, tab: Tab) -> Option<&ScreenView> {
        self.stack(tab).top().map(|screen| &screen.view)
    }

    /// Forward a selection on `tab`'s top screen to the flow that owns it.
    ///
    /// Returns the new child flow, or `None` when the top flow does not
    /// handle movie selection.
    pub fn select_movie(&mut self, tab: Tab, movie: Movie) -> Option<FlowId> {
        let parent = self.stack(tab).top()?.flow;
        let title = movie.title.clone();
        let coordinator = {
            let node = self.arena.get_mut(parent)?;
            node.coordinator.movie_selection()?.did_select_movie(movie)
        };

        let stale = self
            .arena
            .get(parent)
            .and_then(|node| node.children.get(DETAIL_SLOT).copied());
        if let Some(stale) = stale {
            self.release(stale);
        }

        let child = self.arena.insert(coordinator, Some(parent));
        if let Some(node) = self.arena.get_mut(parent) {
            node.children.insert(DETAIL_SLOT, child);
        }
        tracing::info!(tab = tab.title(), movie = %title, "Opening movie detail");
        self.present(tab, child);
        Some(child)
    }

    /// Pop `tab`'s top screen and release its flow.
    ///
    /// A tab's root screen is never popped.
    pub fn pop(&mut self, tab: Tab) -> bool {
        let stack = self.stack_mut(tab);
        if stack.len() <= 1 {
            tracing::debug!(tab = tab.title(), "Nothing to pop");
            return false;
        }
        let Some(screen) = stack.pop() else {
            return false;
        };
        let flow = screen.flow;
        drop(screen);
        self.release(flow);

        if let Some(top) = self.stack(tab).top() {
            top.view.appeared();
        }
        true
    }

    /// Number of live flows.
    pub fn flow_count(&self) -> usize {
        self.arena.len()
    }

    pub fn is_live(&self, flow: FlowId) -> bool {
        self.arena.get(flow).is_some()
    }

    pub fn coordinator_name(&self, flow: FlowId) -> Option<&'static str> {
        self.arena.get(flow).map(|node| node.coordinator.name())
    }

    pub fn child(&self, flow: FlowId, slot: &str) -> Option<FlowId> {
        self.arena
            .get(flow)
            .and_then(|node| node.children.get(slot).copied())
    }

    fn stack_mut(&mut self, tab: Tab) -> &mut ScreenStack {
        match tab {
            Tab::Movies => &mut self.movies,
            Tab::Favorites => &mut self.favorites,
        }
    }

    fn present(&mut self, tab: Tab, flow: FlowId) {
        let Some(node) = self.arena.get_mut(flow) else {
            return;
        };
        let view = node.coordinator.start(&self.context);
        tracing::debug!(
            tab = tab.title(),
            flow = ?flow,
            coordinator = node.coordinator.name(),
            "Started flow"
        );
        view.appeared();
        self.stack_mut(tab).push(Screen { flow, view });
    }

    /// Remove `flow` and its descendants from the arena and clear the
    /// parent's slot that pointed at it.
    fn release(&mut self, flow: FlowId) {
        let Some(node) = self.arena.remove(flow) else {
            return;
        };
        let children: Vec<FlowId> = node.children.values().copied().collect();
        for child in children {
            self.release(child);
        }
        if let Some(parent) = node.parent.and_then(|id| self.arena.get_mut(id)) {
            parent.children.retain(|_, id| *id != flow);
        }
        tracing::debug!(flow = ?flow, coordinator = node.coordinator.name(), "Released flow");
    }
}
