//! Invariant checks for automaton blueprints.
//!
//! [`validate`] is fail-fast and backs [`Automaton::new`]: it returns the
//! first violated invariant, in a fixed order. [`diagnose`] runs the same
//! checks but accumulates every violation with Stillwater's `Validation`,
//! which is what an editor or linter for definition files wants.
//!
//! # Example
//!
//! ```rust
//! use dfa_engine::builder::{Builder, IncrementalBuilder};
//! use dfa_engine::core::{State, Transition};
//! use dfa_engine::validation::diagnose;
//!
//! let blueprint = IncrementalBuilder::new()
//!     .add_state(State::plain("A"))
//!     .add_symbol("x")
//!     .initial_state(State::plain("Z"))
//!     .add_transition(Transition::new(State::plain("A"), "y", State::plain("B")))
//!     .blueprint()
//!     .unwrap();
//!
//! let problems = diagnose(&blueprint);
//! assert!(problems.is_failure());
//! ```
//!
//! [`Automaton::new`]: crate::machine::Automaton::new

use crate::core::{check_transition, AutomatonError, State};
use crate::machine::Blueprint;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Accumulated result of [`diagnose`].
pub type Diagnosis = Validation<(), NonEmptyVec<AutomatonError>>;

/// State-set indices of a blueprint that passed [`validate`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Resolved {
    pub initial: usize,
    /// Destination index of each transition, in table order.
    pub destinations: Vec<usize>,
}

/// Check every invariant, returning the first violation.
///
/// Order: initial state present and in the state set, accepting states
/// within the state set, each transition's source, destination and input,
/// output consistency, then functional-table uniqueness when strict.
pub fn validate(blueprint: &Blueprint) -> Result<(), AutomatonError> {
    resolve(blueprint).map(|_| ())
}

/// [`validate`], keeping the state indices found along the way.
pub(crate) fn resolve(blueprint: &Blueprint) -> Result<Resolved, AutomatonError> {
    let initial = check_initial_state(blueprint)?;
    check_accepting_states(blueprint)?;
    let destinations = blueprint
        .transitions
        .resolve_destinations(&blueprint.states, &blueprint.symbols)?;
    check_outputs(blueprint)?;
    if blueprint.strict {
        blueprint.transitions.validate_functional()?;
    }
    Ok(Resolved {
        initial,
        destinations,
    })
}

/// Check every invariant, collecting ALL violations in check order.
pub fn diagnose(blueprint: &Blueprint) -> Diagnosis {
    let mut checks: Vec<Diagnosis> =
        vec![to_validation(check_initial_state(blueprint).map(|_| ()))];

    checks.extend(
        blueprint
            .accepting
            .iter()
            .map(|state| to_validation(check_member(blueprint, state))),
    );

    checks.extend(blueprint.transitions.iter().map(|transition| {
        to_validation(
            check_transition(transition, &blueprint.states, &blueprint.symbols).map(|_| ()),
        )
    }));

    checks.push(to_validation(check_outputs(blueprint)));

    if blueprint.strict {
        checks.push(to_validation(blueprint.transitions.validate_functional()));
    }

    Validation::all_vec(checks).map(|_| ())
}

fn to_validation(result: Result<(), AutomatonError>) -> Diagnosis {
    match result {
        Ok(()) => Validation::success(()),
        Err(err) => Validation::fail(err),
    }
}

fn check_initial_state(blueprint: &Blueprint) -> Result<usize, AutomatonError> {
    let initial = blueprint
        .initial
        .as_ref()
        .ok_or(AutomatonError::MissingInitialState)?;

    blueprint
        .states
        .position(initial)
        .ok_or_else(|| AutomatonError::InitialStateNotInStates {
            name: initial.name().to_string(),
        })
}

fn check_accepting_states(blueprint: &Blueprint) -> Result<(), AutomatonError> {
    if blueprint.accepting.within(&blueprint.states) {
        return Ok(());
    }
    blueprint
        .accepting
        .iter()
        .try_for_each(|state| check_member(blueprint, state))
}

fn check_member(blueprint: &Blueprint, accepting: &State) -> Result<(), AutomatonError> {
    if blueprint.states.contains(accepting) {
        Ok(())
    } else {
        Err(AutomatonError::AcceptingStatesNotSubsetOfStates {
            name: accepting.name().to_string(),
        })
    }
}

/// An accepting state must not disagree with an accepting state of the same
/// name in the state set. Plain members are fine; the accepting set marks them.
fn check_outputs(blueprint: &Blueprint) -> Result<(), AutomatonError> {
    for accepting in &blueprint.accepting {
        let conflicting = blueprint
            .states
            .get_by_name(accepting.name())
            .is_some_and(|declared| declared.is_accepting() && declared.conflicts_with(accepting));
        if conflicting {
            return Err(AutomatonError::ConflictingState {
                name: accepting.name().to_string(),
            });
        }
    }
    Ok(())
}
