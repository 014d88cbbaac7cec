//! Mod-Three Recognizer
//!
//! This example computes the remainder of a binary number divided by three
//! with a three-state automaton.
//!
//! Key concepts:
//! - Every state is accepting and carries the remainder as its output
//! - The bulk and incremental builders produce the same automaton
//! - `reset` allows the same automaton to process several words
//!
//! Run with: RUST_LOG=debug cargo run --example mod_three

use dfa_engine::builder::{Builder, BulkBuilder, IncrementalBuilder};
use dfa_engine::core::{State, Symbol};
use dfa_engine::{transitions, Automaton, AutomatonError};
use tracing_subscriber::EnvFilter;

fn states() -> [State; 3] {
    [
        State::accepting("S0", "0"),
        State::accepting("S1", "1"),
        State::accepting("S2", "2"),
    ]
}

fn bulk() -> Result<Automaton, AutomatonError> {
    let [s0, s1, s2] = states();

    BulkBuilder::new()
        .states([s0.clone(), s1.clone(), s2.clone()])
        .symbols(["0", "1"])
        .initial_state(s0.clone())
        .accepting_states([s0.clone(), s1.clone(), s2.clone()])
        .transitions(transitions![
            (s0, "0", s0),
            (s0, "1", s1),
            (s1, "0", s2),
            (s1, "1", s0),
            (s2, "0", s1),
            (s2, "1", s2),
        ])
        .finalize()
}

fn incremental() -> Result<Automaton, AutomatonError> {
    let [s0, s1, s2] = states();

    let mut builder = IncrementalBuilder::new()
        .add_symbol("0")
        .add_symbol("1")
        .initial_state(s0.clone());
    for state in [&s0, &s1, &s2] {
        builder = builder
            .add_state(state.clone())
            .add_accepting_state(state.clone());
    }
    for transition in transitions![
        (s0, "0", s0),
        (s0, "1", s1),
        (s1, "0", s2),
        (s1, "1", s0),
        (s2, "0", s1),
        (s2, "1", s2),
    ] {
        builder = builder.add_transition(transition);
    }
    builder.strict().finalize()
}

fn main() -> Result<(), AutomatonError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Mod-Three Recognizer ===\n");

    let mut automaton = bulk()?;

    for (label, word) in [("Example 1", "110"), ("Example 2", "1010")] {
        automaton.reset();
        automaton.process_sequence(&Symbol::sequence(word))?;
        println!("{label} - {word}:");
        println!("Result: {}\n", automaton.output());
    }

    let mut automaton = incremental()?;
    let word = "110011001010110110011011";

    automaton.reset();
    automaton.process_sequence(&Symbol::sequence(word))?;
    println!("Example 3 - {word}:");
    println!("Result: {}", automaton.output());

    println!("\n=== Example Complete ===");
    Ok(())
}
