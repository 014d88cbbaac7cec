//! Record of a simulated run.

use super::automaton::NOT_ACCEPTING;
use crate::core::{State, Symbol};
use serde::{Deserialize, Serialize};

/// One applied transition.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    /// The state being left
    pub from: State,
    /// The symbol consumed
    pub input: Symbol,
    /// The state entered
    pub to: State,
}

/// Ordered record of the steps taken while processing a word.
///
/// Produced by [`Automaton::trace`](super::Automaton::trace), which runs on
/// a scratch cursor and leaves the automaton untouched.
///
/// # Example
///
/// ```rust
/// use dfa_engine::builder::{Builder, IncrementalBuilder};
/// use dfa_engine::core::{State, Symbol, Transition};
///
/// let even = State::accepting("Even", "even");
/// let odd = State::plain("Odd");
///
/// let automaton = IncrementalBuilder::new()
///     .add_state(even.clone())
///     .add_state(odd.clone())
///     .add_symbol("a")
///     .initial_state(even.clone())
///     .add_accepting_state(even.clone())
///     .add_transition(Transition::new(even.clone(), "a", odd.clone()))
///     .add_transition(Transition::new(odd.clone(), "a", even.clone()))
///     .finalize()
///     .unwrap();
///
/// let trace = automaton.trace(&Symbol::sequence("aa")).unwrap();
/// let path: Vec<&str> = trace.path().into_iter().map(State::name).collect();
///
/// assert_eq!(path, vec!["Even", "Odd", "Even"]);
/// assert_eq!(trace.output(), "even");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trace {
    start: State,
    steps: Vec<Step>,
    output: Option<String>,
}

impl Trace {
    pub(crate) fn new(start: State) -> Self {
        Self {
            start,
            steps: Vec::new(),
            output: None,
        }
    }

    pub(crate) fn record(&mut self, step: Step) {
        self.steps.push(step);
    }

    pub(crate) fn finish(mut self, output: Option<&str>) -> Self {
        self.output = output.map(str::to_string);
        self
    }

    /// The states traversed: the start state, then each step's target.
    pub fn path(&self) -> Vec<&State> {
        let mut path = vec![&self.start];
        path.extend(self.steps.iter().map(|step| &step.to));
        path
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// The state the run ended on.
    pub fn final_state(&self) -> &State {
        self.steps.last().map_or(&self.start, |step| &step.to)
    }

    /// Whether the run ended on an accepting state.
    pub fn is_accepted(&self) -> bool {
        self.output.is_some()
    }

    /// Output of the final state, or [`NOT_ACCEPTING`].
    pub fn output(&self) -> &str {
        self.output.as_deref().unwrap_or(NOT_ACCEPTING)
    }
}
