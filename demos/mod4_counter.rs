//! Mod-4 Counter
//!
//! This example runs a four-state automaton over the alphabet {0, 1}.
//! Each `0` flips the high bit of the state and each `1` flips the low
//! bit, so the word is accepted when it holds an even number of both.
//!
//! Run with: cargo run --example mod4_counter

use automaton::{Automaton, Handler, LookupError};

fn main() -> Result<(), LookupError<i32>> {
    let automaton: Automaton<i32, i32> = Automaton::new(
        vec![
            (0, Handler::new(|value: i32| if value == 0 { 2 } else { 1 })),
            (1, Handler::new(|value: i32| if value == 0 { 3 } else { 0 })),
            (2, Handler::new(|value: i32| if value == 0 { 0 } else { 3 })),
            (3, Handler::new(|value: i32| if value == 0 { 1 } else { 2 })),
        ],
        0,
        vec![0],
    );

    let state = automaton.simulate([0, 0, 1, 0, 1, 1, 0, 1])?;
    println!("final state: {state}");
    if automaton.is_accepting_state(&state) {
        println!("valid");
    } else {
        println!("invalid");
    }

    Ok(())
}
