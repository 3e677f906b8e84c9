//! Navigation collaborator.

use crate::domain::value_objects::Route;

/// Route transitions exposed by the app shell.
///
/// Synchronous: navigation is a UI-thread effect with no failure mode the
/// core could meaningfully handle.
pub trait Navigator: Send + Sync {
    /// Replace the current route
    fn replace(&self, route: Route);

    /// Push a route onto the stack
    fn push(&self, route: Route);

    /// Pop back to the previous route
    fn back(&self);
}
