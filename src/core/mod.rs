//! Core automaton value types and collections.
//!
//! This module contains the building blocks of the 5-tuple `(Q, Σ, q0, F, δ)`:
//! - Symbols and the alphabet (`Σ`)
//! - States and state sets (`Q`, `F`)
//! - Transitions and the transition table (`δ`)
//!
//! Everything here is plain data with pure lookups; the mutable current-state
//! pointer lives in [`crate::machine::Automaton`].

mod alphabet;
mod error;
mod state;
mod states;
mod symbol;
mod table;
mod transition;

pub use alphabet::SymbolSet;
pub use error::AutomatonError;
pub use state::State;
pub use states::{AcceptingStateSet, StateSet};
pub use symbol::Symbol;
pub use table::TransitionTable;
pub use transition::Transition;

pub(crate) use table::check_transition;
