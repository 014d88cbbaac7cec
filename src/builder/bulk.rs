//! Builder that sets each component of an automaton from a complete list.

use super::{Builder, Parts};
use crate::core::{AutomatonError, State, Symbol, Transition};
use crate::machine::Blueprint;

/// Builder for constructing automata from whole component lists.
///
/// Each setter replaces the corresponding component.
///
/// # Example
///
/// ```rust
/// use dfa_engine::builder::{Builder, BulkBuilder};
/// use dfa_engine::core::{State, Symbol, Transition};
///
/// let even = State::accepting("Even", "even");
/// let odd = State::accepting("Odd", "odd");
///
/// let mut parity = BulkBuilder::new()
///     .states([even.clone(), odd.clone()])
///     .symbols(["0", "1"])
///     .initial_state(even.clone())
///     .accepting_states([even.clone(), odd.clone()])
///     .transitions([
///         Transition::new(even.clone(), "0", even.clone()),
///         Transition::new(even.clone(), "1", odd.clone()),
///         Transition::new(odd.clone(), "0", odd.clone()),
///         Transition::new(odd.clone(), "1", even.clone()),
///     ])
///     .finalize()
///     .unwrap();
///
/// parity.process_sequence(&Symbol::sequence("1011")).unwrap();
/// assert_eq!(parity.output(), "odd");
/// ```
#[derive(Clone, Debug, Default)]
pub struct BulkBuilder {
    parts: Parts,
}

impl BulkBuilder {
    /// Create a new, empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn states<I>(mut self, states: I) -> Self
    where
        I: IntoIterator<Item = State>,
    {
        self.parts.states = states.into_iter().collect();
        self
    }

    pub fn symbols<I, S>(mut self, symbols: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Symbol>,
    {
        self.parts.symbols = symbols.into_iter().map(Into::into).collect();
        self
    }

    /// Set the initial state (required).
    pub fn initial_state(mut self, state: State) -> Self {
        self.parts.initial = Some(state);
        self
    }

    pub fn accepting_states<I>(mut self, states: I) -> Self
    where
        I: IntoIterator<Item = State>,
    {
        self.parts.accepting = states.into_iter().collect();
        self
    }

    pub fn transitions<I>(mut self, transitions: I) -> Self
    where
        I: IntoIterator<Item = Transition>,
    {
        self.parts.transitions = transitions.into_iter().collect();
        self
    }

    /// Reject duplicated `(state, symbol)` pairs at finalization.
    pub fn strict(mut self) -> Self {
        self.parts.strict = true;
        self
    }
}

impl Builder for BulkBuilder {
    fn blueprint(self) -> Result<Blueprint, AutomatonError> {
        self.parts.into_blueprint()
    }
}
