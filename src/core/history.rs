//! Run traces.
//!
//! A trace records the path a single simulation run took through the
//! automaton: the initial state and one step per consumed symbol.

use super::state::State;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single transition taken during a run.
///
/// `index` is the position of the consumed symbol in the word.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step<S> {
    /// Position of the symbol in the word
    pub index: usize,
    /// The state the symbol was read in
    pub from: S,
    /// The state the handler returned
    pub to: S,
}

/// Ordered trace of one simulation run.
///
/// Produced by [`Automaton::simulate_traced`](crate::Automaton::simulate_traced).
///
/// # Example
///
/// ```rust
/// use automaton::{AutomatonBuilder, RunTrace};
///
/// let automaton = AutomatonBuilder::<u8, u8>::new()
///     .initial(0)
///     .state(0, |symbol| if symbol == 0 { 2 } else { 1 })
///     .state(2, |symbol| if symbol == 0 { 0 } else { 3 })
///     .accepting(0)
///     .build()
///     .unwrap();
///
/// let trace: RunTrace<u8> = automaton.simulate_traced([0, 0]).unwrap();
///
/// assert_eq!(trace.path(), vec![&0, &2, &0]);
/// assert_eq!(trace.final_state(), &0);
/// assert_eq!(trace.len(), 2);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RunTrace<S> {
    initial: S,
    steps: Vec<Step<S>>,
    started_at: DateTime<Utc>,
    finished_at: DateTime<Utc>,
}

impl<S: State> RunTrace<S> {
    /// Start an empty trace at `initial`.
    pub(crate) fn start(initial: S) -> Self {
        let now = Utc::now();
        Self {
            initial,
            steps: Vec::new(),
            started_at: now,
            finished_at: now,
        }
    }

    /// Append a step, returning the extended trace.
    pub(crate) fn record(mut self, from: S, to: S) -> Self {
        let index = self.steps.len();
        self.steps.push(Step { index, from, to });
        self
    }

    /// Stamp the completion time.
    pub(crate) fn finish(mut self) -> Self {
        self.finished_at = Utc::now();
        self
    }

    /// The state the run started in.
    pub fn initial_state(&self) -> &S {
        &self.initial
    }

    /// The state the run ended in.
    ///
    /// For an empty word this is the initial state.
    pub fn final_state(&self) -> &S {
        self.steps.last().map_or(&self.initial, |step| &step.to)
    }

    /// Get the path of states traversed.
    ///
    /// Returns the initial state followed by the `to` state of each step,
    /// so the path is always one longer than the word.
    pub fn path(&self) -> Vec<&S> {
        let mut path = Vec::with_capacity(self.steps.len() + 1);
        path.push(&self.initial);
        path.extend(self.steps.iter().map(|step| &step.to));
        path
    }

    /// Get all steps in order.
    pub fn steps(&self) -> &[Step<S>] {
        &self.steps
    }

    /// Number of symbols consumed.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// True when the run consumed no symbols.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// When the run started.
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// When the run completed.
    pub fn finished_at(&self) -> DateTime<Utc> {
        self.finished_at
    }

    /// Wall-clock time spent in the run.
    ///
    /// Returns `None` if the clock went backwards between start and finish.
    pub fn duration(&self) -> Option<Duration> {
        self.finished_at
            .signed_duration_since(self.started_at)
            .to_std()
            .ok()
    }
}
