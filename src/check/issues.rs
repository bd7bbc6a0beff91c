//! Definition issues reported by the automaton check.

use std::fmt::Debug;
use thiserror::Error;

/// Problems found in an automaton's definition.
///
/// None of these stop an automaton from being built or simulated; they
/// describe words that will fail or a language that is empty.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum DefinitionIssue<S: Debug, A: Debug> {
    #[error("Initial state {state:?} has no handler; every non-empty word fails")]
    UnhandledInitialState { state: S },

    #[error("State {from:?} on symbol {symbol:?} leads to {to:?}, which has no handler")]
    DanglingTransition { from: S, symbol: A, to: S },

    #[error("No accepting states; every word is rejected")]
    NoAcceptingStates,
}
