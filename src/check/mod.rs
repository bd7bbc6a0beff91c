//! Validation-based definition check for automata.
//!
//! Construction never validates: an automaton with an unhandled initial
//! state or transitions that fall off the dispatch table is legal, and
//! only fails once a word drives it there. [`Automaton::check`] is the
//! opt-in audit for such definitions.
//!
//! The check uses Stillwater's `Validation` type to accumulate ALL issues
//! instead of stopping at the first one.
//!
//! [`Automaton::check`]: crate::Automaton::check

pub mod issues;
pub mod rules;

pub use issues::DefinitionIssue;
pub use rules::CheckResult;
