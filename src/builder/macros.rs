//! Macros for ergonomic handler construction.

/// Build a `match`-based handler closure.
///
/// Each arm maps a symbol pattern to the next state. The arms must cover
/// every symbol, so finish with a `_` arm unless the symbol type is an
/// enum matched exhaustively.
///
/// # Example
///
/// ```
/// use automaton::{transitions, AutomatonBuilder};
///
/// let automaton = AutomatonBuilder::<u8, u8>::new()
///     .initial(0)
///     .state(0, transitions! { 0 => 2, _ => 1 })
///     .state(1, transitions! { 0 => 3, _ => 0 })
///     .state(2, transitions! { 0 => 0, _ => 3 })
///     .state(3, transitions! { 0 => 1, _ => 2 })
///     .accepting(0)
///     .build()
///     .unwrap();
///
/// assert_eq!(automaton.simulate([0, 1]).unwrap(), 3);
/// ```
#[macro_export]
macro_rules! transitions {
    ($($symbol:pat => $next:expr),+ $(,)?) => {
        move |symbol| match symbol {
            $($symbol => $next),+
        }
    };
}
