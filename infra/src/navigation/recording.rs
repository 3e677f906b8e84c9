//! Recording navigator
//!
//! Keeps the route stack in memory and logs every transition. Stands in
//! for the app shell's router in demos and tests.

use std::sync::Mutex;

use tracing::info;

use bs_core::domain::value_objects::Route;
use bs_core::services::flow::Navigator;

/// Navigator that records the route stack and transition history
#[derive(Debug)]
pub struct RecordingNavigator {
    stack: Mutex<Vec<Route>>,
    history: Mutex<Vec<Route>>,
}

impl RecordingNavigator {
    /// Create a navigator positioned at the given route
    pub fn new(initial: Route) -> Self {
        Self {
            stack: Mutex::new(vec![initial]),
            history: Mutex::new(vec![initial]),
        }
    }

    /// The route currently on top of the stack
    pub fn current(&self) -> Option<Route> {
        self.lock_stack().last().copied()
    }

    /// Every route navigated to, in order
    pub fn history(&self) -> Vec<Route> {
        self.history
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    fn lock_stack(&self) -> std::sync::MutexGuard<'_, Vec<Route>> {
        self.stack
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn record(&self, route: Route) {
        self.history
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(route);
    }
}

impl Default for RecordingNavigator {
    fn default() -> Self {
        Self::new(Route::Login)
    }
}

impl Navigator for RecordingNavigator {
    fn replace(&self, route: Route) {
        let mut stack = self.lock_stack();
        stack.pop();
        stack.push(route);
        drop(stack);
        self.record(route);
        info!(route = %route, action = "replace", "Route changed");
    }

    fn push(&self, route: Route) {
        self.lock_stack().push(route);
        self.record(route);
        info!(route = %route, action = "push", "Route changed");
    }

    fn back(&self) {
        let mut stack = self.lock_stack();
        if stack.len() > 1 {
            stack.pop();
        }
        if let Some(route) = stack.last() {
            info!(route = %route, action = "back", "Route changed");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_replace_back() {
        let navigator = RecordingNavigator::default();
        assert_eq!(navigator.current(), Some(Route::Login));

        navigator.push(Route::SecurityCheck);
        assert_eq!(navigator.current(), Some(Route::SecurityCheck));

        navigator.replace(Route::Verification);
        assert_eq!(navigator.current(), Some(Route::Verification));

        // replace swapped the top; back lands on the initial login route
        navigator.back();
        assert_eq!(navigator.current(), Some(Route::Login));
    }

    #[test]
    fn test_back_never_empties_the_stack() {
        let navigator = RecordingNavigator::default();
        navigator.back();
        navigator.back();
        assert_eq!(navigator.current(), Some(Route::Login));
    }

    #[test]
    fn test_history_records_every_transition() {
        let navigator = RecordingNavigator::default();
        navigator.push(Route::SecurityCheck);
        navigator.replace(Route::Verification);
        navigator.replace(Route::Home);

        assert_eq!(
            navigator.history(),
            vec![
                Route::Login,
                Route::SecurityCheck,
                Route::Verification,
                Route::Home
            ]
        );
    }
}
