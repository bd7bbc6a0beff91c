//! Bounds for automaton states and alphabet symbols.
//!
//! Both traits are blanket-implemented, so any type meeting the bounds
//! can be used directly: integers, chars, strings or user enums.

use std::fmt::Debug;
use std::hash::Hash;

/// Trait for automaton states.
///
/// # Required Traits
///
/// - `Clone`: the initial state is cloned at the start of every run
/// - `Eq` + `Hash`: states are keys of the dispatch table
/// - `Debug`: states are rendered into lookup errors and log events
///
/// # Example
///
/// ```rust
/// use automaton::core::State;
///
/// #[derive(Clone, PartialEq, Eq, Hash, Debug)]
/// enum Parity {
///     Even,
///     Odd,
/// }
///
/// fn assert_state<S: State>() {}
///
/// assert_state::<Parity>();
/// assert_state::<u32>();
/// assert_state::<String>();
/// ```
pub trait State: Clone + Eq + Hash + Debug {}

impl<T> State for T where T: Clone + Eq + Hash + Debug {}

/// Trait for alphabet symbols.
///
/// Symbols are moved into handlers one at a time. `Clone` and `Debug` are
/// needed by the definition check, which feeds every symbol of an
/// alphabet to every handler and reports the offending symbol.
pub trait Symbol: Clone + PartialEq + Debug {}

impl<T> Symbol for T where T: Clone + PartialEq + Debug {}
