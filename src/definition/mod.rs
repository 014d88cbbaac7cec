//! Loading automata from JSON definitions.
//!
//! A definition names every state once, with an optional output label, and
//! refers to states by name everywhere else:
//!
//! ```json
//! {
//!   "states": [{ "name": "S0", "output": "0" }, { "name": "Dead" }],
//!   "alphabet": ["0", "1"],
//!   "initial": "S0",
//!   "accepting": ["S0"],
//!   "transitions": [{ "from": "S0", "input": "0", "to": "S0" }],
//!   "strict": false
//! }
//! ```
//!
//! This is the one place where element kinds arrive unchecked: an
//! `accepting` entry naming a state declared without an output fails with
//! [`AutomatonError::InvalidElementType`].

pub mod error;

pub use error::DefinitionError;

use crate::builder::{Builder, BulkBuilder};
use crate::core::{AutomatonError, State, Symbol, Transition};
use crate::machine::{Automaton, Blueprint};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::debug;

/// A declared state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StateDefinition {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
}

impl StateDefinition {
    fn to_state(&self) -> State {
        match &self.output {
            Some(output) => State::accepting(&self.name, output),
            None => State::plain(&self.name),
        }
    }
}

/// A transition row referring to states by name.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitionDefinition {
    pub from: String,
    pub input: Symbol,
    pub to: String,
}

/// Serializable description of an automaton.
///
/// # Example
///
/// ```rust
/// use dfa_engine::core::Symbol;
/// use dfa_engine::definition::AutomatonDefinition;
///
/// let json = r#"{
///     "states": [{"name": "Off", "output": "off"}, {"name": "On", "output": "on"}],
///     "alphabet": ["toggle"],
///     "initial": "Off",
///     "accepting": ["Off", "On"],
///     "transitions": [
///         {"from": "Off", "input": "toggle", "to": "On"},
///         {"from": "On", "input": "toggle", "to": "Off"}
///     ]
/// }"#;
///
/// let mut switch = AutomatonDefinition::from_json(json).unwrap().build().unwrap();
/// switch.process(&Symbol::new("toggle")).unwrap();
/// assert_eq!(switch.output(), "on");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AutomatonDefinition {
    pub states: Vec<StateDefinition>,
    pub alphabet: Vec<Symbol>,
    pub initial: String,
    #[serde(default)]
    pub accepting: Vec<String>,
    #[serde(default)]
    pub transitions: Vec<TransitionDefinition>,
    #[serde(default)]
    pub strict: bool,
}

impl AutomatonDefinition {
    pub fn from_json(json: &str) -> Result<Self, DefinitionError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, DefinitionError> {
        Ok(serde_json::from_reader(reader)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, DefinitionError> {
        let path = path.as_ref();
        debug!(path = %path.display(), "loading automaton definition");
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    pub fn to_json(&self) -> Result<String, DefinitionError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Resolve state names and assemble an unvalidated blueprint.
    ///
    /// Names that are not declared still resolve to states, so automaton
    /// validation reports them with the usual errors and in the usual order.
    /// Only an accepting entry naming a state declared without an output
    /// fails here.
    pub fn into_blueprint(self) -> Result<Blueprint, AutomatonError> {
        let states: Vec<State> = self.states.iter().map(StateDefinition::to_state).collect();

        let resolve = |name: &str| {
            states
                .iter()
                .find(|s| s.name() == name)
                .cloned()
                .unwrap_or_else(|| State::plain(name))
        };

        let accepting = self
            .accepting
            .iter()
            .map(|name| match states.iter().find(|s| s.name() == name) {
                Some(state) if state.is_accepting() => Ok(state.clone()),
                Some(_) => Err(AutomatonError::InvalidElementType { name: name.clone() }),
                // Left for validation, which reports it after the initial state.
                None => Ok(State::accepting(name, "")),
            })
            .collect::<Result<Vec<_>, _>>()?;

        let transitions: Vec<Transition> = self
            .transitions
            .iter()
            .map(|t| Transition::new(resolve(&t.from), t.input.clone(), resolve(&t.to)))
            .collect();

        let initial = resolve(&self.initial);

        let mut builder = BulkBuilder::new()
            .states(states)
            .symbols(self.alphabet)
            .initial_state(initial)
            .accepting_states(accepting)
            .transitions(transitions);
        if self.strict {
            builder = builder.strict();
        }
        builder.blueprint()
    }

    /// Resolve and validate the definition into a ready automaton.
    pub fn build(self) -> Result<Automaton, DefinitionError> {
        Ok(Automaton::new(self.into_blueprint()?)?)
    }
}
