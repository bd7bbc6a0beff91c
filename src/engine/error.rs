//! Simulation errors.

use std::fmt::Debug;
use thiserror::Error;

/// Simulation reached a state with no registered handler.
///
/// Carries the unhandled state so the missing transition can be traced
/// back to the automaton's definition.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("no handler registered for state {state:?}")]
pub struct LookupError<S: Debug> {
    pub state: S,
}

impl<S: Debug> LookupError<S> {
    /// The state that has no handler.
    pub fn state(&self) -> &S {
        &self.state
    }

    /// Consume the error, returning the unhandled state.
    pub fn into_state(self) -> S {
        self.state
    }
}
