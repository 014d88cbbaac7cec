//! dfa-engine: a deterministic finite automaton engine
//!
//! An automaton is the 5-tuple `(Q, Σ, q0, F, δ)`: a finite set of states, an
//! input alphabet, an initial state, a set of accepting states and a
//! transition function. This crate validates such a tuple once, then runs it
//! one symbol at a time.
//!
//! # Core Concepts
//!
//! - **State**: named node, optionally accepting with an output label
//! - **Symbol**: element of the input alphabet
//! - **Transition table**: explicit, possibly partial `δ`, first match wins
//! - **Automaton**: validated machine holding a single current-state pointer
//!
//! # Example
//!
//! ```rust
//! use dfa_engine::builder::{Builder, BulkBuilder};
//! use dfa_engine::core::{State, Symbol};
//! use dfa_engine::transitions;
//!
//! let s0 = State::accepting("S0", "0");
//! let s1 = State::accepting("S1", "1");
//! let s2 = State::accepting("S2", "2");
//!
//! let mut mod_three = BulkBuilder::new()
//!     .states([s0.clone(), s1.clone(), s2.clone()])
//!     .symbols(["0", "1"])
//!     .initial_state(s0.clone())
//!     .accepting_states([s0.clone(), s1.clone(), s2.clone()])
//!     .transitions(transitions![
//!         (s0, "0", s0),
//!         (s0, "1", s1),
//!         (s1, "0", s2),
//!         (s1, "1", s0),
//!         (s2, "0", s1),
//!         (s2, "1", s2),
//!     ])
//!     .finalize()
//!     .unwrap();
//!
//! mod_three.process_sequence(&Symbol::sequence("110")).unwrap();
//! assert_eq!(mod_three.output(), "0");
//! ```

pub mod builder;
pub mod core;
pub mod definition;
pub mod machine;
pub mod validation;

// Re-export commonly used types
pub use self::builder::{Builder, BulkBuilder, IncrementalBuilder};
pub use self::core::{AutomatonError, State, Symbol, Transition};
pub use self::definition::{AutomatonDefinition, DefinitionError};
pub use self::machine::{Automaton, Blueprint, NOT_ACCEPTING};
