//! The deterministic finite automaton.

use super::blueprint::Blueprint;
use super::trace::{Step, Trace};
use crate::core::{
    AcceptingStateSet, AutomatonError, State, StateSet, Symbol, SymbolSet, TransitionTable,
};
use crate::validation;
use tracing::{debug, trace};

/// Output reported when the current state is not accepting.
pub const NOT_ACCEPTING: &str = "not an accepting state";

/// A validated deterministic finite automaton `(Q, Σ, q0, F, δ)`.
///
/// The automaton owns all of its parts. Its only mutable piece is the
/// current state, an index into the state set, which changes solely through
/// [`process`](Self::process), [`process_sequence`](Self::process_sequence)
/// and [`reset`](Self::reset).
///
/// Instances are single-owner; share one across threads only behind a lock.
///
/// # Example
///
/// ```rust
/// use dfa_engine::builder::{Builder, BulkBuilder};
/// use dfa_engine::core::{State, Symbol, Transition};
///
/// let locked = State::accepting("Locked", "locked");
/// let unlocked = State::accepting("Unlocked", "unlocked");
///
/// let mut turnstile = BulkBuilder::new()
///     .states([locked.clone(), unlocked.clone()])
///     .symbols(["coin", "push"])
///     .initial_state(locked.clone())
///     .accepting_states([locked.clone(), unlocked.clone()])
///     .transitions([
///         Transition::new(locked.clone(), "coin", unlocked.clone()),
///         Transition::new(locked.clone(), "push", locked.clone()),
///         Transition::new(unlocked.clone(), "coin", unlocked.clone()),
///         Transition::new(unlocked.clone(), "push", locked.clone()),
///     ])
///     .finalize()
///     .unwrap();
///
/// turnstile.process(&Symbol::new("coin")).unwrap();
/// assert_eq!(turnstile.output(), "unlocked");
///
/// turnstile.reset();
/// assert_eq!(turnstile.current_state(), &locked);
/// ```
#[derive(Clone, Debug)]
pub struct Automaton {
    states: StateSet,
    symbols: SymbolSet,
    accepting: AcceptingStateSet,
    transitions: TransitionTable,
    /// Destination index of each transition, parallel to `transitions`.
    destinations: Vec<usize>,
    initial: usize,
    current: usize,
    strict: bool,
}

impl Automaton {
    /// Validate a blueprint and create an automaton positioned at its
    /// initial state.
    ///
    /// Invariants are checked in order and the first violation is returned:
    /// initial state membership, accepting-state inclusion, transition
    /// well-formedness, then output consistency and (in strict mode)
    /// uniqueness of `(state, symbol)` pairs.
    pub fn new(blueprint: Blueprint) -> Result<Self, AutomatonError> {
        let validation::Resolved {
            initial,
            destinations,
        } = validation::resolve(&blueprint)?;

        let Blueprint {
            states,
            symbols,
            accepting,
            transitions,
            strict,
            ..
        } = blueprint;

        debug!(
            states = states.len(),
            symbols = symbols.len(),
            accepting = accepting.len(),
            transitions = transitions.len(),
            initial = %states[initial],
            strict,
            "automaton validated"
        );

        Ok(Self {
            states,
            symbols,
            accepting,
            transitions,
            destinations,
            initial,
            current: initial,
            strict,
        })
    }

    pub fn states(&self) -> &StateSet {
        &self.states
    }

    pub fn alphabet(&self) -> &SymbolSet {
        &self.symbols
    }

    pub fn initial_state(&self) -> &State {
        &self.states[self.initial]
    }

    pub fn accepting_states(&self) -> &AcceptingStateSet {
        &self.accepting
    }

    pub fn transitions(&self) -> &TransitionTable {
        &self.transitions
    }

    /// Whether the transition table was checked to be functional.
    pub fn is_strict(&self) -> bool {
        self.strict
    }

    /// Get current state (pure)
    pub fn current_state(&self) -> &State {
        &self.states[self.current]
    }

    /// Check if the current state is accepting (pure)
    pub fn is_accepting(&self) -> bool {
        self.accepting.contains(self.current_state())
    }

    /// Consume one symbol.
    ///
    /// Fails with [`AutomatonError::UnknownSymbol`] if the symbol is outside
    /// the alphabet and with [`AutomatonError::NoTransitionDefined`] if the
    /// current state has no transition on it. The current state is left
    /// unchanged on failure.
    pub fn process(&mut self, symbol: &Symbol) -> Result<&State, AutomatonError> {
        let next = self.next_index(self.current, symbol)?;
        debug!(
            from = %self.states[self.current],
            input = %symbol,
            to = %self.states[next],
            "step"
        );
        self.current = next;
        Ok(self.current_state())
    }

    /// Consume symbols in order, stopping at the first failure.
    ///
    /// Steps taken before a failure are not rolled back.
    pub fn process_sequence<'a, I>(&mut self, symbols: I) -> Result<&State, AutomatonError>
    where
        I: IntoIterator<Item = &'a Symbol>,
    {
        for symbol in symbols {
            self.process(symbol)?;
        }
        Ok(self.current_state())
    }

    /// Output label of the current state, or [`NOT_ACCEPTING`].
    pub fn output(&self) -> &str {
        self.accepting
            .output_of(self.current_state())
            .unwrap_or(NOT_ACCEPTING)
    }

    /// Return to the initial state.
    pub fn reset(&mut self) {
        trace!(from = %self.current_state(), "reset");
        self.current = self.initial;
    }

    /// Decide whether a word is recognized, starting from the initial state.
    ///
    /// Runs on a scratch cursor; the automaton's current state is not
    /// touched. A missing transition rejects the word, while a symbol outside
    /// the alphabet is still an error.
    pub fn accepts<'a, I>(&self, symbols: I) -> Result<bool, AutomatonError>
    where
        I: IntoIterator<Item = &'a Symbol>,
    {
        let mut cursor = self.initial;
        for symbol in symbols {
            match self.next_index(cursor, symbol) {
                Ok(next) => cursor = next,
                Err(err) if err.is_rejection() => return Ok(false),
                Err(err) => return Err(err),
            }
        }
        Ok(self.accepting.contains(&self.states[cursor]))
    }

    /// Simulate a word from the initial state and record every step.
    ///
    /// Like [`accepts`](Self::accepts) this does not move the current state.
    pub fn trace<'a, I>(&self, symbols: I) -> Result<Trace, AutomatonError>
    where
        I: IntoIterator<Item = &'a Symbol>,
    {
        let mut cursor = self.initial;
        let mut run = Trace::new(self.states[cursor].clone());
        for symbol in symbols {
            let next = self.next_index(cursor, symbol)?;
            run.record(Step {
                from: self.states[cursor].clone(),
                input: symbol.clone(),
                to: self.states[next].clone(),
            });
            cursor = next;
        }
        Ok(run.finish(self.accepting.output_of(&self.states[cursor])))
    }

    fn next_index(&self, from: usize, symbol: &Symbol) -> Result<usize, AutomatonError> {
        if !self.symbols.contains(symbol) {
            return Err(AutomatonError::UnknownSymbol {
                symbol: symbol.value().to_string(),
            });
        }

        let state = &self.states[from];
        let index = self.transitions.position(state, symbol).ok_or_else(|| {
            AutomatonError::NoTransitionDefined {
                state: state.name().to_string(),
                symbol: symbol.value().to_string(),
            }
        })?;
        trace!(state = %state, input = %symbol, index, "transition found");

        Ok(self.destinations[index])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Transition;

    fn s(name: &str) -> State {
        State::plain(name)
    }

    fn sym(value: &str) -> Symbol {
        Symbol::new(value)
    }

    fn blueprint(
        states: &[State],
        symbols: &[&str],
        initial: Option<State>,
        accepting: &[State],
        transitions: Vec<Transition>,
    ) -> Blueprint {
        Blueprint {
            states: StateSet::try_from_states(states.to_vec()).unwrap(),
            symbols: symbols.iter().copied().map(Symbol::from).collect(),
            initial,
            accepting: AcceptingStateSet::try_from_states(accepting.to_vec()).unwrap(),
            transitions: transitions.into_iter().collect(),
            strict: false,
        }
    }

    fn two_state() -> Automaton {
        Automaton::new(blueprint(
            &[s("S1"), State::accepting("S2", "done")],
            &["1", "2"],
            Some(s("S1")),
            &[State::accepting("S2", "done")],
            vec![Transition::new(s("S1"), "1", s("S2"))],
        ))
        .unwrap()
    }

    #[test]
    fn starts_at_initial_state() {
        let automaton = two_state();
        assert_eq!(automaton.current_state(), &s("S1"));
        assert_eq!(automaton.initial_state(), &s("S1"));
        assert!(!automaton.is_accepting());
        assert_eq!(automaton.output(), NOT_ACCEPTING);
    }

    #[test]
    fn process_moves_to_destination() {
        let mut automaton = two_state();
        let state = automaton.process(&sym("1")).unwrap();
        assert_eq!(state, &s("S2"));
        assert!(automaton.is_accepting());
        assert_eq!(automaton.output(), "done");
    }

    #[test]
    fn unknown_symbol_leaves_state_unchanged() {
        let mut automaton = two_state();
        automaton.process(&sym("1")).unwrap();

        let err = automaton.process(&sym("3")).unwrap_err();
        assert_eq!(
            err,
            AutomatonError::UnknownSymbol {
                symbol: "3".to_string()
            }
        );
        assert_eq!(automaton.current_state(), &s("S2"));
    }

    #[test]
    fn missing_transition_leaves_state_unchanged() {
        let mut automaton = two_state();

        let err = automaton.process(&sym("2")).unwrap_err();
        assert_eq!(
            err,
            AutomatonError::NoTransitionDefined {
                state: "S1".to_string(),
                symbol: "2".to_string(),
            }
        );
        assert_eq!(automaton.current_state(), &s("S1"));
    }

    #[test]
    fn process_sequence_does_not_roll_back() {
        let mut automaton = two_state();

        let result = automaton.process_sequence(&[sym("1"), sym("1")]);
        assert!(matches!(
            result,
            Err(AutomatonError::NoTransitionDefined { .. })
        ));
        assert_eq!(automaton.current_state(), &s("S2"));
    }

    #[test]
    fn reset_returns_to_initial() {
        let mut automaton = two_state();
        automaton.process(&sym("1")).unwrap();
        automaton.reset();
        assert_eq!(automaton.current_state(), &s("S1"));
    }

    #[test]
    fn accepts_treats_missing_transition_as_rejection() {
        let automaton = two_state();

        assert_eq!(automaton.accepts(&[sym("1")]), Ok(true));
        assert_eq!(automaton.accepts(&Vec::<Symbol>::new()), Ok(false));
        assert_eq!(automaton.accepts(&[sym("2")]), Ok(false));
        assert!(automaton.accepts(&[sym("9")]).is_err());
        assert_eq!(automaton.current_state(), &s("S1"));
    }

    #[test]
    fn trace_records_steps_without_mutating() {
        let automaton = two_state();
        let run = automaton.trace(&[sym("1")]).unwrap();

        assert_eq!(run.steps().len(), 1);
        assert_eq!(run.final_state(), &s("S2"));
        assert_eq!(run.output(), "done");
        assert_eq!(automaton.current_state(), &s("S1"));
    }

    #[test]
    fn output_comes_from_accepting_set() {
        // The state set lists S1 as plain; the accepting set carries the label.
        let mut automaton = Automaton::new(blueprint(
            &[s("S0"), s("S1")],
            &["a"],
            Some(s("S0")),
            &[State::accepting("S1", "one")],
            vec![Transition::new(s("S0"), "a", s("S1"))],
        ))
        .unwrap();

        automaton.process(&sym("a")).unwrap();
        assert_eq!(automaton.output(), "one");
    }

    #[test]
    fn construction_rejects_invalid_blueprints() {
        let missing = blueprint(&[s("A")], &["x"], None, &[], vec![]);
        assert_eq!(
            Automaton::new(missing).unwrap_err(),
            AutomatonError::MissingInitialState
        );

        let stray_initial = blueprint(&[s("A")], &["x"], Some(s("B")), &[], vec![]);
        assert_eq!(
            Automaton::new(stray_initial).unwrap_err(),
            AutomatonError::InitialStateNotInStates {
                name: "B".to_string()
            }
        );
    }

    #[test]
    fn indices_resolve_by_name_in_state_order() {
        // Initial and destinations are given as fresh values, not the
        // declared ones; they still land on the declared states.
        let mut automaton = Automaton::new(blueprint(
            &[s("A"), s("B"), State::accepting("C", "c")],
            &["x"],
            Some(State::accepting("C", "ignored")),
            &[State::accepting("C", "c")],
            vec![
                Transition::new(s("C"), "x", s("B")),
                Transition::new(s("B"), "x", State::accepting("C", "other")),
            ],
        ))
        .unwrap();

        assert_eq!(automaton.current_state().output(), Some("c"));
        automaton.process(&sym("x")).unwrap();
        assert_eq!(automaton.current_state().name(), "B");
        automaton.process(&sym("x")).unwrap();
        assert_eq!(automaton.current_state().output(), Some("c"));
        assert_eq!(automaton.output(), "c");
    }

    #[test]
    fn first_transition_wins_at_runtime() {
        let mut automaton = Automaton::new(blueprint(
            &[s("A"), s("B"), s("C")],
            &["x"],
            Some(s("A")),
            &[],
            vec![
                Transition::new(s("A"), "x", s("B")),
                Transition::new(s("A"), "x", s("C")),
            ],
        ))
        .unwrap();

        automaton.process(&sym("x")).unwrap();
        assert_eq!(automaton.current_state(), &s("B"));
    }
}
