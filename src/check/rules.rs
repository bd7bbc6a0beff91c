//! Definition checks for automata using Validation.

use crate::check::issues::DefinitionIssue;
use crate::core::{State, Symbol};
use crate::engine::Automaton;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;
use tracing::debug;

/// Outcome of [`Automaton::check`].
pub type CheckResult<S, A> = Validation<(), NonEmptyVec<DefinitionIssue<S, A>>>;

impl<A: Symbol, S: State> Automaton<A, S> {
    /// Audit the definition against `alphabet`, accumulating ALL issues.
    ///
    /// Every handled state is fed every symbol of `alphabet`; a target
    /// state without a handler is reported as a dangling transition. The
    /// initial state must have a handler and at least one accepting state
    /// must exist. Accepting states without handlers are not reported: a
    /// word may legitimately end there.
    ///
    /// Returns `Validation::Success(())` if the definition is total over
    /// `alphabet`, or `Validation::Failure` with every issue found. The
    /// order of dangling transitions follows the dispatch table and is
    /// unspecified.
    ///
    /// # Example
    ///
    /// ```rust
    /// use automaton::{AutomatonBuilder, DefinitionIssue};
    /// use stillwater::validation::Validation;
    ///
    /// let automaton = AutomatonBuilder::<u8, u8>::new()
    ///     .initial(0)
    ///     .state(0, |symbol| symbol)
    ///     .accepting(0)
    ///     .build()
    ///     .unwrap();
    ///
    /// match automaton.check(&[0, 1]) {
    ///     Validation::Failure(issues) => {
    ///         assert_eq!(issues.len(), 1);
    ///         assert!(issues.iter().any(|issue| matches!(
    ///             issue,
    ///             DefinitionIssue::DanglingTransition { from: 0, symbol: 1, to: 1 }
    ///         )));
    ///     }
    ///     Validation::Success(_) => panic!("expected a dangling transition"),
    /// }
    /// ```
    pub fn check(&self, alphabet: &[A]) -> CheckResult<S, A> {
        let mut checks: Vec<CheckResult<S, A>> = Vec::new();

        // Check initial state
        let initial = self.initial_state();
        checks.push(if self.has_handler(initial) {
            Validation::success(())
        } else {
            Validation::fail(DefinitionIssue::UnhandledInitialState {
                state: initial.clone(),
            })
        });

        // Check accepting states
        checks.push(if self.accepting_states().is_empty() {
            Validation::fail(DefinitionIssue::NoAcceptingStates)
        } else {
            Validation::success(())
        });

        // Check every transition over the alphabet
        for (from, handler) in self.handlers() {
            for symbol in alphabet {
                let to = handler.next(symbol.clone());
                let check = if self.has_handler(&to) {
                    Validation::success(())
                } else {
                    Validation::fail(DefinitionIssue::DanglingTransition {
                        from: from.clone(),
                        symbol: symbol.clone(),
                        to,
                    })
                };
                checks.push(check);
            }
        }

        debug!(
            checks = checks.len(),
            symbols = alphabet.len(),
            "automaton definition checked"
        );

        // Accumulate ALL failures using all_vec
        Validation::all_vec(checks).map(|_| ())
    }
}
