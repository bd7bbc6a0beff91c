//! Builder for constructing automata.

use crate::builder::error::BuildError;
use crate::core::{Handler, State};
use crate::engine::Automaton;

/// Builder for constructing automata with a fluent API.
///
/// Only the initial state is required. Handlers are registered in call
/// order and a state registered twice keeps its later handler, exactly as
/// with [`Automaton::new`].
pub struct AutomatonBuilder<A, S: State> {
    initial: Option<S>,
    handlers: Vec<(S, Handler<A, S>)>,
    accepting: Vec<S>,
}

impl<A, S: State> AutomatonBuilder<A, S> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            initial: None,
            handlers: Vec::new(),
            accepting: Vec::new(),
        }
    }

    /// Set the initial state (required).
    pub fn initial(mut self, state: S) -> Self {
        self.initial = Some(state);
        self
    }

    /// Register a closure as the handler for `state`.
    pub fn state<F>(self, state: S, rule: F) -> Self
    where
        F: Fn(A) -> S + Send + Sync + 'static,
    {
        self.handler(state, Handler::new(rule))
    }

    /// Register a pre-built handler for `state`.
    pub fn handler(mut self, state: S, handler: Handler<A, S>) -> Self {
        self.handlers.push((state, handler));
        self
    }

    /// Add one accepting state.
    pub fn accepting(mut self, state: S) -> Self {
        self.accepting.push(state);
        self
    }

    /// Add multiple accepting states at once.
    pub fn accepting_states<I>(mut self, states: I) -> Self
    where
        I: IntoIterator<Item = S>,
    {
        self.accepting.extend(states);
        self
    }

    /// Build the automaton.
    /// Returns an error if the initial state is missing.
    pub fn build(self) -> Result<Automaton<A, S>, BuildError> {
        let initial = self.initial.ok_or(BuildError::MissingInitialState)?;

        Ok(Automaton::new(self.handlers, initial, self.accepting))
    }
}

impl<A, S: State> Default for AutomatonBuilder<A, S> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, PartialEq, Eq, Hash, Debug)]
    enum Parity {
        Even,
        Odd,
    }

    fn parity_builder() -> AutomatonBuilder<u32, Parity> {
        AutomatonBuilder::new()
            .state(Parity::Even, |n: u32| {
                if n % 2 == 0 {
                    Parity::Even
                } else {
                    Parity::Odd
                }
            })
            .state(Parity::Odd, |n: u32| {
                if n % 2 == 0 {
                    Parity::Odd
                } else {
                    Parity::Even
                }
            })
    }

    #[test]
    fn builder_validates_required_fields() {
        let result = parity_builder().accepting(Parity::Even).build();

        assert!(matches!(result, Err(BuildError::MissingInitialState)));
    }

    #[test]
    fn handlers_are_optional() {
        let automaton = AutomatonBuilder::<u32, Parity>::new()
            .initial(Parity::Even)
            .build()
            .unwrap();

        assert!(automaton.is_empty());
        assert_eq!(automaton.simulate([]).unwrap(), Parity::Even);
    }

    #[test]
    fn fluent_api_builds_automaton() {
        let automaton = parity_builder()
            .initial(Parity::Even)
            .accepting(Parity::Even)
            .build()
            .unwrap();

        assert_eq!(automaton.initial_state(), &Parity::Even);
        assert_eq!(automaton.len(), 2);
        assert!(automaton.accepts([1, 3, 4]).unwrap());
        assert!(!automaton.accepts([1, 2, 4]).unwrap());
    }

    #[test]
    fn later_registration_wins() {
        let automaton = parity_builder()
            .state(Parity::Even, |_: u32| Parity::Even)
            .initial(Parity::Even)
            .accepting(Parity::Even)
            .build()
            .unwrap();

        assert_eq!(automaton.simulate([1, 1, 1]).unwrap(), Parity::Even);
    }

    #[test]
    fn accepting_states_accumulate() {
        let automaton = parity_builder()
            .initial(Parity::Even)
            .accepting(Parity::Odd)
            .accepting_states(vec![Parity::Even, Parity::Odd])
            .build()
            .unwrap();

        assert_eq!(
            automaton.accepting_states(),
            &[Parity::Odd, Parity::Even, Parity::Odd]
        );
    }

    #[test]
    fn prebuilt_handlers_are_accepted() {
        let automaton = AutomatonBuilder::new()
            .initial('a')
            .handler('a', Handler::new(|c: char| c))
            .accepting('z')
            .build()
            .unwrap();

        assert_eq!(automaton.accepts("xyz".chars()).unwrap_err().state, 'x');
        assert!(automaton.accepts("z".chars()).unwrap());
    }
}
