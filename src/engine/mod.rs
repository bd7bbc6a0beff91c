//! The automaton engine.
//!
//! # Key Concepts
//!
//! - **Dispatch table**: one handler per state, built once at construction
//! - **Simulation**: a fold of the word over the dispatch table, starting
//!   from the initial state on every call
//! - **Acceptance**: equality against the accepting states
//!
//! The only failure is a [`LookupError`]: a symbol had to be read in a
//! state that has no handler.

mod automaton;
mod error;

pub use automaton::Automaton;
pub use error::LookupError;
