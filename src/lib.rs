//! Automaton: a generic deterministic finite automaton simulation engine
//!
//! An automaton is defined by one transition handler per state, an
//! initial state and a set of accepting states. Simulation folds a word
//! over the handlers starting from the initial state; acceptance is
//! membership of the final state in the accepting set.
//!
//! # Core Concepts
//!
//! - **State / Symbol**: any `Clone + Eq + Hash + Debug` type can be a state;
//!   symbols are unbounded, except that checks need `Clone + PartialEq + Debug`
//! - **Handlers**: per-state transition rules via the `StateHandler` trait
//! - **Automaton**: the immutable dispatch table plus initial and accepting states
//! - **Lookup errors**: the single failure, reading a symbol in an unhandled state
//! - **Checks**: an opt-in audit accumulating every definition issue
//!
//! # Example
//!
//! ```rust
//! use automaton::{transitions, AutomatonBuilder};
//!
//! let automaton = AutomatonBuilder::<u8, u8>::new()
//!     .initial(0)
//!     .state(0, transitions! { 0 => 2, _ => 1 })
//!     .state(1, transitions! { 0 => 3, _ => 0 })
//!     .state(2, transitions! { 0 => 0, _ => 3 })
//!     .state(3, transitions! { 0 => 1, _ => 2 })
//!     .accepting(0)
//!     .build()
//!     .unwrap();
//!
//! let state = automaton.simulate([0, 0, 1, 0, 1, 1, 0, 1]).unwrap();
//! assert_eq!(state, 0);
//! assert!(automaton.is_accepting_state(&state));
//!
//! // State 1 has no handler, so reading a symbol there fails.
//! let partial = AutomatonBuilder::<u8, u8>::new()
//!     .initial(0)
//!     .state(0, transitions! { 0 => 2, _ => 1 })
//!     .build()
//!     .unwrap();
//!
//! let error = partial.simulate([1, 0]).unwrap_err();
//! assert_eq!(error.state, 1);
//! ```

pub mod builder;
pub mod check;
pub mod core;
pub mod engine;

// Re-export commonly used types
pub use builder::{AutomatonBuilder, BuildError};
pub use check::DefinitionIssue;
pub use crate::core::{Handler, RunTrace, State, StateHandler, Step, Symbol};
pub use engine::{Automaton, LookupError};
