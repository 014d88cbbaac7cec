//! The transition table.

use super::alphabet::SymbolSet;
use super::error::AutomatonError;
use super::state::State;
use super::states::StateSet;
use super::symbol::Symbol;
use super::transition::Transition;

/// Ordered collection of transitions.
///
/// The table is not required to be functional: several transitions may
/// share a `(state, symbol)` pair. Lookups return the earliest inserted
/// match, so insertion order is the tie-break.
///
/// # Example
///
/// ```rust
/// use dfa_engine::core::{State, Symbol, Transition, TransitionTable};
///
/// let mut table = TransitionTable::new();
/// table.push(Transition::new(State::plain("A"), "x", State::plain("B")));
/// table.push(Transition::new(State::plain("A"), "x", State::plain("C")));
///
/// let found = table
///     .find_by_state_and_symbol(&State::plain("A"), &Symbol::new("x"))
///     .unwrap();
/// assert_eq!(found.destination().name(), "B");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TransitionTable {
    transitions: Vec<Transition>,
}

impl TransitionTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a transition without validation.
    pub fn push(&mut self, transition: Transition) {
        self.transitions.push(transition);
    }

    /// Check every transition against the given states and alphabet.
    ///
    /// Transitions are visited in insertion order; for each one the source,
    /// then the destination, then the input symbol is checked. The first
    /// violation is returned.
    pub fn validate(&self, states: &StateSet, symbols: &SymbolSet) -> Result<(), AutomatonError> {
        self.resolve_destinations(states, symbols).map(|_| ())
    }

    /// Like [`validate`](Self::validate), but yields the index in `states`
    /// of each transition's destination, in table order.
    pub(crate) fn resolve_destinations(
        &self,
        states: &StateSet,
        symbols: &SymbolSet,
    ) -> Result<Vec<usize>, AutomatonError> {
        self.transitions
            .iter()
            .map(|t| check_transition(t, states, symbols))
            .collect()
    }

    /// Reject the first `(state, symbol)` pair that has more than one transition.
    pub fn validate_functional(&self) -> Result<(), AutomatonError> {
        for (i, transition) in self.transitions.iter().enumerate() {
            let duplicated = self.transitions[..i]
                .iter()
                .any(|earlier| earlier.matches(transition.source(), transition.input()));
            if duplicated {
                return Err(AutomatonError::NondeterministicTransition {
                    state: transition.source().name().to_string(),
                    symbol: transition.input().value().to_string(),
                });
            }
        }
        Ok(())
    }

    /// The first transition leaving `state` on `symbol`, if any.
    pub fn find_by_state_and_symbol(&self, state: &State, symbol: &Symbol) -> Option<&Transition> {
        self.position(state, symbol)
            .and_then(|i| self.transitions.get(i))
    }

    /// Index of the first transition leaving `state` on `symbol`.
    pub fn position(&self, state: &State, symbol: &Symbol) -> Option<usize> {
        self.transitions
            .iter()
            .position(|t| t.matches(state, symbol))
    }

    pub fn get(&self, index: usize) -> Option<&Transition> {
        self.transitions.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Transition> {
        self.transitions.iter()
    }

    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }
}

/// Check a single transition's source, destination and input, in that order.
///
/// Returns the destination's index in `states`.
pub(crate) fn check_transition(
    transition: &Transition,
    states: &StateSet,
    symbols: &SymbolSet,
) -> Result<usize, AutomatonError> {
    if !states.contains(transition.source()) {
        return Err(AutomatonError::UnknownSourceState {
            state: transition.source().name().to_string(),
        });
    }
    let destination = states.position(transition.destination()).ok_or_else(|| {
        AutomatonError::UnknownDestinationState {
            state: transition.destination().name().to_string(),
        }
    })?;
    if !symbols.contains(transition.input()) {
        return Err(AutomatonError::UnknownInputSymbol {
            symbol: transition.input().value().to_string(),
        });
    }
    Ok(destination)
}

impl FromIterator<Transition> for TransitionTable {
    fn from_iter<I: IntoIterator<Item = Transition>>(iter: I) -> Self {
        Self {
            transitions: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a TransitionTable {
    type Item = &'a Transition;
    type IntoIter = std::slice::Iter<'a, Transition>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn s(name: &str) -> State {
        State::plain(name)
    }

    fn states() -> StateSet {
        StateSet::try_from_states([s("S1"), s("S2")]).unwrap()
    }

    fn symbols() -> SymbolSet {
        ["1", "2"].into_iter().map(Symbol::from).collect()
    }

    #[test]
    fn validate_accepts_well_formed_table() {
        let table: TransitionTable = [
            Transition::new(s("S1"), "1", s("S2")),
            Transition::new(s("S2"), "2", s("S1")),
        ]
        .into_iter()
        .collect();

        assert_eq!(table.validate(&states(), &symbols()), Ok(()));
    }

    #[test]
    fn validate_reports_unknown_source() {
        let table: TransitionTable = [Transition::new(s("S9"), "1", s("S2"))]
            .into_iter()
            .collect();

        assert_eq!(
            table.validate(&states(), &symbols()),
            Err(AutomatonError::UnknownSourceState {
                state: "S9".to_string()
            })
        );
    }

    #[test]
    fn validate_reports_unknown_destination() {
        let table: TransitionTable = [Transition::new(s("S1"), "1", s("S9"))]
            .into_iter()
            .collect();

        assert_eq!(
            table.validate(&states(), &symbols()),
            Err(AutomatonError::UnknownDestinationState {
                state: "S9".to_string()
            })
        );
    }

    #[test]
    fn validate_reports_unknown_input() {
        let table: TransitionTable = [Transition::new(s("S1"), "3", s("S2"))]
            .into_iter()
            .collect();

        assert_eq!(
            table.validate(&states(), &symbols()),
            Err(AutomatonError::UnknownInputSymbol {
                symbol: "3".to_string()
            })
        );
    }

    #[test]
    fn validate_stops_at_first_violation_in_order() {
        // Second transition is bad on every count, the first only on input.
        let table: TransitionTable = [
            Transition::new(s("S1"), "3", s("S2")),
            Transition::new(s("X"), "4", s("Y")),
        ]
        .into_iter()
        .collect();

        assert!(matches!(
            table.validate(&states(), &symbols()),
            Err(AutomatonError::UnknownInputSymbol { .. })
        ));
    }

    #[test]
    fn source_is_checked_before_destination_and_input() {
        let table: TransitionTable = [Transition::new(s("X"), "4", s("Y"))]
            .into_iter()
            .collect();

        assert!(matches!(
            table.validate(&states(), &symbols()),
            Err(AutomatonError::UnknownSourceState { .. })
        ));
    }

    #[test]
    fn resolve_destinations_follows_table_order() {
        let table: TransitionTable = [
            Transition::new(s("S1"), "1", s("S2")),
            Transition::new(s("S2"), "2", s("S1")),
            Transition::new(s("S2"), "1", s("S2")),
        ]
        .into_iter()
        .collect();

        assert_eq!(
            table.resolve_destinations(&states(), &symbols()),
            Ok(vec![1, 0, 1])
        );
    }

    #[test]
    fn find_returns_first_inserted_match() {
        let mut table = TransitionTable::new();
        table.push(Transition::new(s("S1"), "1", s("S2")));
        table.push(Transition::new(s("S1"), "1", s("S1")));

        let found = table
            .find_by_state_and_symbol(&s("S1"), &Symbol::new("1"))
            .unwrap();
        assert_eq!(found.destination(), &s("S2"));
        assert_eq!(table.position(&s("S1"), &Symbol::new("1")), Some(0));
    }

    #[test]
    fn find_returns_none_without_match() {
        let mut table = TransitionTable::new();
        table.push(Transition::new(s("S1"), "1", s("S2")));

        assert!(table
            .find_by_state_and_symbol(&s("S2"), &Symbol::new("1"))
            .is_none());
        assert!(table
            .find_by_state_and_symbol(&s("S1"), &Symbol::new("2"))
            .is_none());
    }

    #[test]
    fn validate_functional_rejects_duplicate_pairs() {
        let mut table = TransitionTable::new();
        table.push(Transition::new(s("S1"), "1", s("S2")));
        table.push(Transition::new(s("S2"), "1", s("S2")));
        assert_eq!(table.validate_functional(), Ok(()));

        table.push(Transition::new(s("S1"), "1", s("S1")));
        assert_eq!(
            table.validate_functional(),
            Err(AutomatonError::NondeterministicTransition {
                state: "S1".to_string(),
                symbol: "1".to_string(),
            })
        );
    }
}
