//! Transition triples.

use super::state::State;
use super::symbol::Symbol;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single entry of the transition function: `δ(source, input) = destination`.
///
/// Transitions are immutable values. Nothing is checked at construction
/// time; membership of the states and symbol is verified by
/// [`TransitionTable::validate`](super::TransitionTable::validate).
///
/// # Example
///
/// ```rust
/// use dfa_engine::core::{State, Symbol, Transition};
///
/// let t = Transition::new(State::plain("Locked"), "coin", State::plain("Unlocked"));
///
/// assert!(t.matches(&State::plain("Locked"), &Symbol::new("coin")));
/// assert_eq!(t.destination().name(), "Unlocked");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transition {
    source: State,
    input: Symbol,
    destination: State,
}

impl Transition {
    pub fn new(source: State, input: impl Into<Symbol>, destination: State) -> Self {
        Self {
            source,
            input: input.into(),
            destination,
        }
    }

    pub fn source(&self) -> &State {
        &self.source
    }

    pub fn input(&self) -> &Symbol {
        &self.input
    }

    pub fn destination(&self) -> &State {
        &self.destination
    }

    /// Whether this transition fires from `state` on `symbol`.
    pub fn matches(&self, state: &State, symbol: &Symbol) -> bool {
        self.source == *state && self.input == *symbol
    }
}

impl fmt::Display for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} --{}--> {}",
            self.source, self.input, self.destination
        )
    }
}
