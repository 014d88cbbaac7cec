//! State collections.
//!
//! [`StateSet`] holds the automaton's full set of states. [`AcceptingStateSet`]
//! holds the subset at which processing may end with an output, and only
//! admits accepting states.

use super::error::AutomatonError;
use super::state::State;

/// Ordered collection of uniquely named states.
///
/// # Example
///
/// ```rust
/// use dfa_engine::core::{State, StateSet};
///
/// let mut states = StateSet::new();
/// states.push(State::plain("Locked")).unwrap();
/// states.push(State::plain("Unlocked")).unwrap();
///
/// assert!(states.contains(&State::plain("Locked")));
/// assert_eq!(states.position(&State::plain("Unlocked")), Some(1));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StateSet {
    states: Vec<State>,
}

impl StateSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a set from a list of states, failing on the first name conflict.
    pub fn try_from_states<I>(states: I) -> Result<Self, AutomatonError>
    where
        I: IntoIterator<Item = State>,
    {
        let mut set = Self::new();
        for state in states {
            set.push(state)?;
        }
        Ok(set)
    }

    /// Append a state.
    ///
    /// Returns `Ok(false)` if an identical state is already present and
    /// fails with [`AutomatonError::ConflictingState`] if a state with the
    /// same name but a different output is present.
    pub fn push(&mut self, state: State) -> Result<bool, AutomatonError> {
        if let Some(existing) = self.get_by_name(state.name()) {
            if existing.conflicts_with(&state) {
                return Err(AutomatonError::ConflictingState {
                    name: state.name().to_string(),
                });
            }
            return Ok(false);
        }
        self.states.push(state);
        Ok(true)
    }

    /// Whether any member has the same comparison key as `state`.
    pub fn contains(&self, state: &State) -> bool {
        self.position(state).is_some()
    }

    /// Whether every member of `self` is contained in `other`.
    pub fn within(&self, other: &StateSet) -> bool {
        self.states.iter().all(|s| other.contains(s))
    }

    /// Index of the member equal to `state`.
    pub fn position(&self, state: &State) -> Option<usize> {
        self.states
            .iter()
            .position(|s| s.compare_key() == state.compare_key())
    }

    pub fn get(&self, index: usize) -> Option<&State> {
        self.states.get(index)
    }

    pub fn get_by_name(&self, name: &str) -> Option<&State> {
        self.states.iter().find(|s| s.name() == name)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, State> {
        self.states.iter()
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}

impl std::ops::Index<usize> for StateSet {
    type Output = State;

    fn index(&self, index: usize) -> &State {
        &self.states[index]
    }
}

impl<'a> IntoIterator for &'a StateSet {
    type Item = &'a State;
    type IntoIter = std::slice::Iter<'a, State>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// A [`StateSet`] whose members are all accepting states.
///
/// # Example
///
/// ```rust
/// use dfa_engine::core::{AcceptingStateSet, AutomatonError, State};
///
/// let mut accepting = AcceptingStateSet::new();
/// accepting.push(State::accepting("Done", "ok")).unwrap();
///
/// let err = accepting.push(State::plain("Idle")).unwrap_err();
/// assert!(matches!(err, AutomatonError::InvalidElementType { .. }));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AcceptingStateSet {
    inner: StateSet,
}

impl AcceptingStateSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a set from a list of states, failing on the first plain state
    /// or name conflict.
    pub fn try_from_states<I>(states: I) -> Result<Self, AutomatonError>
    where
        I: IntoIterator<Item = State>,
    {
        let mut set = Self::new();
        for state in states {
            set.push(state)?;
        }
        Ok(set)
    }

    /// Append an accepting state.
    ///
    /// Fails with [`AutomatonError::InvalidElementType`] for a plain state.
    pub fn push(&mut self, state: State) -> Result<bool, AutomatonError> {
        if !state.is_accepting() {
            return Err(AutomatonError::InvalidElementType {
                name: state.name().to_string(),
            });
        }
        self.inner.push(state)
    }

    pub fn contains(&self, state: &State) -> bool {
        self.inner.contains(state)
    }

    /// Whether every accepting state is a member of `states`.
    pub fn within(&self, states: &StateSet) -> bool {
        self.inner.within(states)
    }

    /// The accepting member equal to `state`, carrying its output label.
    pub fn get(&self, state: &State) -> Option<&State> {
        self.inner.position(state).and_then(|i| self.inner.get(i))
    }

    /// The output label reported when processing ends on `state`.
    pub fn output_of(&self, state: &State) -> Option<&str> {
        self.get(state).and_then(State::output)
    }

    pub fn as_state_set(&self) -> &StateSet {
        &self.inner
    }

    pub fn iter(&self) -> std::slice::Iter<'_, State> {
        self.inner.iter()
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

impl<'a> IntoIterator for &'a AcceptingStateSet {
    type Item = &'a State;
    type IntoIter = std::slice::Iter<'a, State>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
