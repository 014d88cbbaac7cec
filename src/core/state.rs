//! Automaton states.
//!
//! A state is a named node of the automaton. Accepting states additionally
//! carry an output label, reported when input processing ends on them.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

/// A named automaton state.
///
/// Equality, hashing and [`State::compare_key`] consider the name only. The
/// output label of an accepting state is payload: a plain `S0` and an
/// accepting `S0` denote the same node, which keeps membership checks
/// independent of how a state value was constructed.
///
/// # Example
///
/// ```rust
/// use dfa_engine::core::State;
///
/// let plain = State::plain("S0");
/// let accepting = State::accepting("S0", "zero");
///
/// assert_eq!(plain, accepting);
/// assert!(!plain.is_accepting());
/// assert_eq!(accepting.output(), Some("zero"));
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(untagged, deny_unknown_fields)]
pub enum State {
    /// A state that reports an output label when processing ends on it.
    Accepting { name: String, output: String },
    /// An ordinary state without output.
    Plain { name: String },
}

impl State {
    /// Create a plain (non-accepting) state.
    pub fn plain(name: impl Into<String>) -> Self {
        Self::Plain { name: name.into() }
    }

    /// Create an accepting state carrying an output label.
    pub fn accepting(name: impl Into<String>, output: impl Into<String>) -> Self {
        Self::Accepting {
            name: name.into(),
            output: output.into(),
        }
    }

    /// The state's name.
    pub fn name(&self) -> &str {
        match self {
            Self::Plain { name } | Self::Accepting { name, .. } => name,
        }
    }

    /// Canonical comparison key used by every set and table lookup.
    pub fn compare_key(&self) -> &str {
        self.name()
    }

    /// The output label, if this is an accepting state.
    pub fn output(&self) -> Option<&str> {
        match self {
            Self::Plain { .. } => None,
            Self::Accepting { output, .. } => Some(output),
        }
    }

    /// Whether this value is the accepting variant.
    pub fn is_accepting(&self) -> bool {
        matches!(self, Self::Accepting { .. })
    }

    /// Whether two same-named values disagree on variant or output label.
    pub(crate) fn conflicts_with(&self, other: &State) -> bool {
        self == other && self.output() != other.output()
    }
}

impl PartialEq for State {
    fn eq(&self, other: &Self) -> bool {
        self.compare_key() == other.compare_key()
    }
}

impl Eq for State {}

impl Hash for State {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.compare_key().hash(state);
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_returns_correct_value() {
        assert_eq!(State::plain("Idle").name(), "Idle");
        assert_eq!(State::accepting("Done", "ok").name(), "Done");
    }

    #[test]
    fn output_only_on_accepting_states() {
        assert_eq!(State::plain("Idle").output(), None);
        assert_eq!(State::accepting("Done", "ok").output(), Some("ok"));
    }

    #[test]
    fn equality_ignores_output_label() {
        assert_eq!(State::plain("S1"), State::accepting("S1", "1"));
        assert_eq!(State::accepting("S1", "1"), State::accepting("S1", "one"));
        assert_ne!(State::plain("S1"), State::plain("S2"));
    }

    #[test]
    fn conflicts_detects_same_name_different_payload() {
        let plain = State::plain("S1");
        let one = State::accepting("S1", "1");
        let other = State::accepting("S1", "uno");

        assert!(plain.conflicts_with(&one));
        assert!(one.conflicts_with(&other));
        assert!(!one.conflicts_with(&one.clone()));
        assert!(!plain.conflicts_with(&State::plain("S2")));
    }

    #[test]
    fn hash_follows_name() {
        use std::collections::HashSet;

        let mut set = HashSet::new();
        set.insert(State::plain("S0"));
        assert!(set.contains(&State::accepting("S0", "0")));
    }

    #[test]
    fn state_serializes_correctly() {
        let accepting = State::accepting("S0", "0");
        let json = serde_json::to_string(&accepting).unwrap();
        let back: State = serde_json::from_str(&json).unwrap();
        assert_eq!(back.output(), Some("0"));

        let plain: State = serde_json::from_str(r#"{"name":"Dead"}"#).unwrap();
        assert!(!plain.is_accepting());
        assert_eq!(plain.name(), "Dead");
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let misspelled = serde_json::from_str::<State>(r#"{"name":"S0","ouptut":"0"}"#);
        assert!(misspelled.is_err());
    }

    #[test]
    fn state_displays_name() {
        assert_eq!(State::accepting("S2", "2").to_string(), "S2");
    }
}
