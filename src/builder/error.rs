//! Build errors for the automaton builder.

use thiserror::Error;

/// Errors that can occur when building an automaton.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("Initial state not specified. Call .initial(state) before .build()")]
    MissingInitialState,
}
