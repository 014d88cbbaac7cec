//! Unvalidated automaton parts.

use crate::core::{AcceptingStateSet, State, StateSet, SymbolSet, TransitionTable};

/// The five components of an automaton before validation.
///
/// A blueprint can hold inconsistent data; it becomes usable only through
/// [`Automaton::new`](super::Automaton::new), which checks every invariant.
/// Builders and definition files produce blueprints.
#[derive(Clone, Debug, Default)]
pub struct Blueprint {
    pub states: StateSet,
    pub symbols: SymbolSet,
    pub initial: Option<State>,
    pub accepting: AcceptingStateSet,
    pub transitions: TransitionTable,
    /// Reject tables with more than one transition per `(state, symbol)`.
    pub strict: bool,
}
