//! Errors raised while assembling, validating and running an automaton.

use thiserror::Error;

/// Errors that can occur when constructing or executing an automaton.
///
/// Every variant is a local, recoverable condition. Construction fails
/// closed and `process` fails without touching the current state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AutomatonError {
    #[error("State '{name}' is not an accepting state")]
    InvalidElementType { name: String },

    #[error("State '{name}' is declared more than once with different outputs")]
    ConflictingState { name: String },

    #[error("Initial state not specified. Call .initial_state(state) before .finalize()")]
    MissingInitialState,

    #[error("Initial state '{name}' is not in the state set")]
    InitialStateNotInStates { name: String },

    #[error("Accepting state '{name}' is not in the state set")]
    AcceptingStatesNotSubsetOfStates { name: String },

    #[error("Transition source state '{state}' is not in the state set")]
    UnknownSourceState { state: String },

    #[error("Transition destination state '{state}' is not in the state set")]
    UnknownDestinationState { state: String },

    #[error("Transition input '{symbol}' is not in the alphabet")]
    UnknownInputSymbol { symbol: String },

    #[error("Input '{symbol}' is not in the alphabet")]
    UnknownSymbol { symbol: String },

    #[error("No transition defined from state '{state}' on input '{symbol}'")]
    NoTransitionDefined { state: String, symbol: String },

    #[error("State '{state}' has more than one transition on input '{symbol}'")]
    NondeterministicTransition { state: String, symbol: String },
}

impl AutomatonError {
    /// Whether this error means the input word is simply not recognized.
    ///
    /// Language recognizers usually treat a missing transition as rejection
    /// rather than as a failure.
    pub fn is_rejection(&self) -> bool {
        matches!(self, Self::NoTransitionDefined { .. })
    }
}
