//! Builder that assembles an automaton one element at a time.

use super::{Builder, Parts};
use crate::core::{AutomatonError, State, Symbol, Transition};
use crate::machine::Blueprint;

/// Builder for constructing automata element by element with a fluent API.
///
/// # Example
///
/// ```rust
/// use dfa_engine::builder::{Builder, IncrementalBuilder};
/// use dfa_engine::core::{State, Symbol, Transition};
///
/// let start = State::plain("Start");
/// let seen = State::accepting("Seen", "yes");
///
/// let mut automaton = IncrementalBuilder::new()
///     .add_state(start.clone())
///     .add_state(seen.clone())
///     .add_symbol("a")
///     .initial_state(start.clone())
///     .add_accepting_state(seen.clone())
///     .add_transition(Transition::new(start.clone(), "a", seen.clone()))
///     .add_transition(Transition::new(seen.clone(), "a", seen.clone()))
///     .finalize()
///     .unwrap();
///
/// automaton.process(&Symbol::new("a")).unwrap();
/// assert_eq!(automaton.output(), "yes");
/// ```
#[derive(Clone, Debug, Default)]
pub struct IncrementalBuilder {
    parts: Parts,
}

impl IncrementalBuilder {
    /// Create a new, empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_state(mut self, state: State) -> Self {
        self.parts.states.push(state);
        self
    }

    pub fn add_symbol(mut self, symbol: impl Into<Symbol>) -> Self {
        self.parts.symbols.push(symbol.into());
        self
    }

    /// Set the initial state (required).
    pub fn initial_state(mut self, state: State) -> Self {
        self.parts.initial = Some(state);
        self
    }

    /// Mark a state as accepting. It must be the accepting variant.
    pub fn add_accepting_state(mut self, state: State) -> Self {
        self.parts.accepting.push(state);
        self
    }

    pub fn add_transition(mut self, transition: Transition) -> Self {
        self.parts.transitions.push(transition);
        self
    }

    /// Reject duplicated `(state, symbol)` pairs at finalization.
    pub fn strict(mut self) -> Self {
        self.parts.strict = true;
        self
    }
}

impl Builder for IncrementalBuilder {
    fn blueprint(self) -> Result<Blueprint, AutomatonError> {
        self.parts.into_blueprint()
    }
}
