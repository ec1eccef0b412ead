//! Dispatch abstraction.

use crate::{Action, DispatchResult};

/// Trait for dispatching actions to the document engine.
///
/// The binary holds a `Box<dyn Dispatcher>` so the runtime loop does not
/// depend on how state is stored.
pub trait Dispatcher {
    /// Dispatch an action and return the result.
    fn dispatch(&mut self, action: &Action) -> DispatchResult;
}
