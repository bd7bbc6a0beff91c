//! Per-state transition handlers.
//!
//! A handler is the transition rule attached to one source state: it maps
//! an incoming symbol to the next state. Handlers are pure functions, so
//! running the same word twice always takes the same path.

use std::fmt;

/// Single-method transition capability.
///
/// Implemented for every `Fn(A) -> S` closure. Implement it directly for
/// table-driven or precomputed transition rules.
///
/// # Example
///
/// ```rust
/// use automaton::core::StateHandler;
///
/// struct Toggle;
///
/// impl StateHandler<bool, u8> for Toggle {
///     fn next(&self, symbol: bool) -> u8 {
///         if symbol { 1 } else { 0 }
///     }
/// }
///
/// assert_eq!(Toggle.next(true), 1);
/// ```
pub trait StateHandler<A, S> {
    /// Compute the next state for `symbol`.
    fn next(&self, symbol: A) -> S;
}

impl<A, S, F> StateHandler<A, S> for F
where
    F: Fn(A) -> S,
{
    fn next(&self, symbol: A) -> S {
        self(symbol)
    }
}

/// Type-erased handler stored in the dispatch table.
///
/// Handlers must be thread-safe (Send + Sync) so that a built automaton
/// can be shared between threads and simulated concurrently.
///
/// # Example
///
/// ```rust
/// use automaton::core::Handler;
///
/// let from_zero = Handler::new(|symbol: u8| if symbol == 0 { 2u8 } else { 1 });
///
/// assert_eq!(from_zero.next(0), 2);
/// assert_eq!(from_zero.next(1), 1);
/// ```
pub struct Handler<A, S> {
    rule: Box<dyn StateHandler<A, S> + Send + Sync>,
}

impl<A, S> Handler<A, S> {
    /// Create a handler from a closure.
    pub fn new<F>(rule: F) -> Self
    where
        F: Fn(A) -> S + Send + Sync + 'static,
    {
        Self::from_handler(rule)
    }

    /// Create a handler from any [`StateHandler`] implementation.
    pub fn from_handler<H>(rule: H) -> Self
    where
        H: StateHandler<A, S> + Send + Sync + 'static,
    {
        Handler {
            rule: Box::new(rule),
        }
    }

    /// Apply the transition rule to one symbol.
    pub fn next(&self, symbol: A) -> S {
        self.rule.next(symbol)
    }
}

impl<A, S> fmt::Debug for Handler<A, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Handler").finish_non_exhaustive()
    }
}
