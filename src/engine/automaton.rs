//! Deterministic finite automaton simulation.

use crate::core::{Handler, RunTrace, State};
use crate::engine::error::LookupError;
use std::collections::HashMap;
use std::fmt;
use tracing::{debug, trace};

/// Deterministic finite automaton driven by per-state handlers.
///
/// Owns the dispatch table (state to handler), the initial state and the
/// accepting states. Nothing changes after construction: every call to
/// [`simulate`](Self::simulate) restarts from the initial state, so an
/// automaton can be run any number of times and shared between threads.
///
/// # Example
///
/// ```rust
/// use automaton::{Automaton, Handler};
///
/// let automaton: Automaton<u8, u8> = Automaton::new(
///     vec![
///         (0, Handler::new(|symbol: u8| if symbol == 0 { 2 } else { 1 })),
///         (1, Handler::new(|symbol: u8| if symbol == 0 { 3 } else { 0 })),
///         (2, Handler::new(|symbol: u8| if symbol == 0 { 0 } else { 3 })),
///         (3, Handler::new(|symbol: u8| if symbol == 0 { 1 } else { 2 })),
///     ],
///     0,
///     vec![0],
/// );
///
/// let state = automaton.simulate([0, 1]).unwrap();
/// assert_eq!(state, 3);
/// assert!(!automaton.is_accepting_state(&state));
/// ```
pub struct Automaton<A, S: State> {
    handlers: HashMap<S, Handler<A, S>>,
    initial: S,
    accepting: Vec<S>,
}

impl<A, S: State> Automaton<A, S> {
    /// Build an automaton from `(state, handler)` pairs.
    ///
    /// Pairs are inserted in order; a state listed twice keeps the later
    /// handler. Neither the initial state nor the accepting states need a
    /// handler, so construction never fails.
    pub fn new<H, F>(state_handlers: H, initial_state: S, accepting_states: F) -> Self
    where
        H: IntoIterator<Item = (S, Handler<A, S>)>,
        F: IntoIterator<Item = S>,
    {
        let mut handlers = HashMap::new();
        for (state, handler) in state_handlers {
            handlers.insert(state, handler);
        }

        let accepting: Vec<S> = accepting_states.into_iter().collect();
        debug!(
            handlers = handlers.len(),
            accepting = accepting.len(),
            initial = ?initial_state,
            "automaton constructed"
        );

        Self {
            handlers,
            initial: initial_state,
            accepting,
        }
    }

    /// Run `word` from the initial state and return the final state.
    ///
    /// An empty word returns the initial state without any lookup.
    /// Fails with [`LookupError`] as soon as a symbol has to be read in a
    /// state that has no handler.
    pub fn simulate<W>(&self, word: W) -> Result<S, LookupError<S>>
    where
        W: IntoIterator<Item = A>,
    {
        word.into_iter()
            .try_fold(self.initial.clone(), |current, symbol| self.step(current, symbol))
    }

    /// Run `word` and record every transition taken.
    ///
    /// Same semantics as [`simulate`](Self::simulate); the final state of
    /// the returned trace is the state `simulate` would return.
    pub fn simulate_traced<W>(&self, word: W) -> Result<RunTrace<S>, LookupError<S>>
    where
        W: IntoIterator<Item = A>,
    {
        let run = word.into_iter().try_fold(
            RunTrace::start(self.initial.clone()),
            |run, symbol| -> Result<RunTrace<S>, LookupError<S>> {
                let from = run.final_state().clone();
                let to = self.step(from.clone(), symbol)?;
                Ok(run.record(from, to))
            },
        )?;

        Ok(run.finish())
    }

    /// Run `word` and report whether it ends in an accepting state.
    pub fn accepts<W>(&self, word: W) -> Result<bool, LookupError<S>>
    where
        W: IntoIterator<Item = A>,
    {
        let state = self.simulate(word)?;
        Ok(self.is_accepting_state(&state))
    }

    /// Take a single transition out of `state` on `symbol`.
    pub fn step(&self, state: S, symbol: A) -> Result<S, LookupError<S>> {
        let Some(handler) = self.handlers.get(&state) else {
            debug!(state = ?state, "no handler registered");
            return Err(LookupError { state });
        };

        let next = handler.next(symbol);
        trace!(from = ?state, to = ?next, "transition");
        Ok(next)
    }

    /// Check if `state` is one of the accepting states (pure).
    ///
    /// Compares by equality against the accepting states as given at
    /// construction; the state does not need a handler.
    pub fn is_accepting_state(&self, state: &S) -> bool {
        self.accepting.iter().any(|accepting| accepting == state)
    }

    /// Get the initial state.
    pub fn initial_state(&self) -> &S {
        &self.initial
    }

    /// Get the accepting states, exactly as supplied.
    pub fn accepting_states(&self) -> &[S] {
        &self.accepting
    }

    /// Check if `state` has a registered handler.
    pub fn has_handler(&self, state: &S) -> bool {
        self.handlers.contains_key(state)
    }

    /// States with a registered handler, in no particular order.
    pub fn handled_states(&self) -> impl Iterator<Item = &S> + '_ {
        self.handlers.keys()
    }

    pub(crate) fn handlers(&self) -> impl Iterator<Item = (&S, &Handler<A, S>)> + '_ {
        self.handlers.iter()
    }

    /// Number of states with a registered handler.
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// True when no state has a handler.
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

impl<A, S: State> fmt::Debug for Automaton<A, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Automaton")
            .field("handled_states", &self.handlers.keys().collect::<Vec<_>>())
            .field("initial_state", &self.initial)
            .field("accepting_states", &self.accepting)
            .finish()
    }
}
