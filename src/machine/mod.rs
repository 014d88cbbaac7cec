//! Automaton execution.
//!
//! This module holds the validated automaton and the run-time operations
//! that move its current state.
//!
//! # Lifecycle
//!
//! - A [`Blueprint`] collects unvalidated parts
//! - [`Automaton::new`] validates a blueprint once and yields a usable automaton
//! - `process`, `process_sequence` and `reset` move the current state
//!
//! An automaton that failed validation never exists, so `process` can only
//! be called on a consistent machine.

mod automaton;
mod blueprint;
mod trace;

pub use automaton::{Automaton, NOT_ACCEPTING};
pub use blueprint::Blueprint;
pub use trace::{Step, Trace};
