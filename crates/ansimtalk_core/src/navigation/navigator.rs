//! Back-stack navigator with bottom-tab state restore.
//!
//! # Invariants
//! - `stack[0]` is always `Route::START`.
//! - Tab navigation never pushes a route that is already on top.
//! - Saved tab stacks are keyed by their root route.

use crate::navigation::route::Route;
use crate::observer::{ObserverRegistry, SubscriptionId};
use log::debug;
use std::collections::HashMap;

/// Emitted whenever the current route changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteChanged {
    pub previous: Route,
    pub current: Route,
}

/// Single back stack shared by all screens.
#[derive(Debug)]
pub struct Navigator {
    stack: Vec<Route>,
    saved_tabs: HashMap<Route, Vec<Route>>,
    observers: ObserverRegistry<RouteChanged>,
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}

impl Navigator {
    /// Creates a navigator positioned at the start destination.
    pub fn new() -> Self {
        Self {
            stack: vec![Route::START],
            saved_tabs: HashMap::new(),
            observers: ObserverRegistry::new(),
        }
    }

    pub fn current_route(&self) -> Route {
        *self.stack.last().unwrap_or(&Route::START)
    }

    pub fn back_stack(&self) -> &[Route] {
        &self.stack
    }

    pub fn subscribe(
        &mut self,
        observer: impl FnMut(&RouteChanged) + Send + 'static,
    ) -> SubscriptionId {
        self.observers.subscribe(observer)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.observers.unsubscribe(id)
    }

    /// Pushes `route`, as home dashboard cards do.
    pub fn navigate(&mut self, route: Route) {
        let previous = self.current_route();
        self.stack.push(route);
        self.emit(previous);
    }

    /// Bottom-bar navigation with pop-to-start, single-top, and restore.
    pub fn navigate_tab(&mut self, route: Route) {
        let previous = self.current_route();
        if previous == route {
            return;
        }

        let popped = self.stack.split_off(1);
        if let Some(root) = popped.first().copied() {
            self.saved_tabs.insert(root, popped);
        }

        if route != Route::START {
            match self.saved_tabs.remove(&route) {
                Some(saved) => self.stack.extend(saved),
                None => self.stack.push(route),
            }
        }

        self.emit(previous);
    }

    /// Pops one entry. Returns `false` when already at the start destination.
    pub fn navigate_up(&mut self) -> bool {
        if self.stack.len() <= 1 {
            return false;
        }
        let previous = self.current_route();
        self.stack.pop();
        self.emit(previous);
        true
    }

    fn emit(&mut self, previous: Route) {
        let current = self.current_route();
        debug!(
            "event=route_change module=navigation status=ok from={} to={} depth={}",
            previous,
            current,
            self.stack.len()
        );
        if previous != current {
            self.observers.notify(&RouteChanged { previous, current });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Navigator;
    use crate::navigation::route::Route;

    #[test]
    fn starts_at_home() {
        let nav = Navigator::new();
        assert_eq!(nav.current_route(), Route::Home);
        assert_eq!(nav.back_stack(), &[Route::Home]);
    }

    #[test]
    fn navigate_up_never_pops_start_destination() {
        let mut nav = Navigator::new();
        nav.navigate(Route::Medication);
        assert!(nav.navigate_up());
        assert!(!nav.navigate_up());
        assert_eq!(nav.back_stack(), &[Route::Home]);
    }
}
