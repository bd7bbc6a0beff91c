//! Builder API for ergonomic automaton construction.
//!
//! This module provides a fluent builder, handler helpers and the
//! [`transitions!`](crate::transitions) macro for defining automata with
//! minimal boilerplate.

pub mod automaton;
pub mod error;
pub mod macros;

pub use automaton::AutomatonBuilder;
pub use error::BuildError;

use crate::core::{Handler, State};

/// Create a handler that sends every symbol to `target`.
///
/// Useful for dead states and for accepting states that absorb the rest
/// of the word.
///
/// # Example
///
/// ```
/// use automaton::builder::{sink, AutomatonBuilder};
///
/// let automaton = AutomatonBuilder::<char, &str>::new()
///     .initial("start")
///     .state("start", |c| if c == 'a' { "start" } else { "dead" })
///     .handler("dead", sink("dead"))
///     .accepting("start")
///     .build()
///     .unwrap();
///
/// assert!(automaton.accepts("aaa".chars()).unwrap());
/// assert!(!automaton.accepts("abaa".chars()).unwrap());
/// ```
pub fn sink<A, S>(target: S) -> Handler<A, S>
where
    A: 'static,
    S: State + Send + Sync + 'static,
{
    Handler::new(move |_symbol: A| target.clone())
}
