//! Core automaton types.
//!
//! This module contains the building blocks the engine is assembled from:
//! - State and symbol bounds via the `State` and `Symbol` traits
//! - Transition handlers attached to individual states
//! - Traces recording the path of a single run
//!
//! Everything here is pure: handlers map a symbol to a state and traces
//! are plain values.

mod handler;
mod history;
mod state;

pub use handler::{Handler, StateHandler};
pub use history::{RunTrace, Step};
pub use state::{State, Symbol};
