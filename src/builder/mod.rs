//! Builder API for assembling automata.
//!
//! Two builders cover the two usual construction orders:
//! - [`IncrementalBuilder`] adds states, symbols and transitions one at a time
//! - [`BulkBuilder`] sets each component from a complete list
//!
//! Both produce a [`Blueprint`] and share the provided [`Builder::finalize`],
//! so every automaton goes through the same validation.

pub mod bulk;
pub mod incremental;
pub mod macros;

pub use bulk::BulkBuilder;
pub use incremental::IncrementalBuilder;

use crate::core::{
    AcceptingStateSet, AutomatonError, State, StateSet, Symbol, Transition,
};
use crate::machine::{Automaton, Blueprint};

/// Common finalization for automaton builders.
pub trait Builder: Sized {
    /// Assemble the collected parts without checking global invariants.
    ///
    /// Fails only if the parts cannot form the collections at all: a plain
    /// state marked accepting, or one name declared with two outputs.
    fn blueprint(self) -> Result<Blueprint, AutomatonError>;

    /// Assemble and validate the automaton.
    fn finalize(self) -> Result<Automaton, AutomatonError> {
        Automaton::new(self.blueprint()?)
    }
}

/// Raw components shared by both builders.
#[derive(Clone, Debug, Default)]
struct Parts {
    states: Vec<State>,
    symbols: Vec<Symbol>,
    initial: Option<State>,
    accepting: Vec<State>,
    transitions: Vec<Transition>,
    strict: bool,
}

impl Parts {
    fn into_blueprint(self) -> Result<Blueprint, AutomatonError> {
        Ok(Blueprint {
            states: StateSet::try_from_states(self.states)?,
            symbols: self.symbols.into_iter().collect(),
            initial: self.initial,
            accepting: AcceptingStateSet::try_from_states(self.accepting)?,
            transitions: self.transitions.into_iter().collect(),
            strict: self.strict,
        })
    }
}
