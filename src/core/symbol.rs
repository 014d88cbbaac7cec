//! Input symbols.
//!
//! A symbol is an atomic element of the automaton's alphabet. Symbols are
//! plain values: two symbols are interchangeable iff their values are equal.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single element of an input alphabet.
///
/// # Example
///
/// ```rust
/// use dfa_engine::core::Symbol;
///
/// let a = Symbol::new("1");
/// let b = Symbol::from("1");
///
/// assert_eq!(a, b);
/// assert_eq!(a.value(), "1");
/// assert_eq!(a.compare_key(), "1");
/// ```
#[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Symbol(String);

impl Symbol {
    /// Create a symbol from any string-like value.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// The symbol's value.
    pub fn value(&self) -> &str {
        &self.0
    }

    /// Canonical comparison key. For symbols this is the value itself.
    pub fn compare_key(&self) -> &str {
        &self.0
    }

    /// Split an input string into one symbol per character.
    ///
    /// This is the usual way to feed a word such as `"1010"` to an automaton
    /// whose alphabet consists of single characters.
    ///
    /// # Example
    ///
    /// ```rust
    /// use dfa_engine::core::Symbol;
    ///
    /// let word = Symbol::sequence("110");
    /// assert_eq!(word, vec![Symbol::new("1"), Symbol::new("1"), Symbol::new("0")]);
    /// ```
    pub fn sequence(input: &str) -> Vec<Symbol> {
        input.chars().map(|c| Symbol(c.to_string())).collect()
    }
}

impl From<&str> for Symbol {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Symbol {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<char> for Symbol {
    fn from(value: char) -> Self {
        Self(value.to_string())
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symbols_compare_by_value() {
        assert_eq!(Symbol::new("a"), Symbol::from("a"));
        assert_eq!(Symbol::from('a'), Symbol::from(String::from("a")));
        assert_ne!(Symbol::new("a"), Symbol::new("b"));
    }

    #[test]
    fn compare_key_is_value() {
        let symbol = Symbol::new("xy");
        assert_eq!(symbol.compare_key(), symbol.value());
    }

    #[test]
    fn sequence_splits_per_character() {
        let word = Symbol::sequence("1010");
        let values: Vec<&str> = word.iter().map(Symbol::value).collect();
        assert_eq!(values, vec!["1", "0", "1", "0"]);
    }

    #[test]
    fn sequence_of_empty_input_is_empty() {
        assert!(Symbol::sequence("").is_empty());
    }

    #[test]
    fn symbol_serializes_as_plain_string() {
        let json = serde_json::to_string(&Symbol::new("0")).unwrap();
        assert_eq!(json, "\"0\"");

        let symbol: Symbol = serde_json::from_str(&json).unwrap();
        assert_eq!(symbol, Symbol::new("0"));
    }

    #[test]
    fn symbol_displays_its_value() {
        assert_eq!(Symbol::new("z").to_string(), "z");
    }
}
