//! The input alphabet.

use super::symbol::Symbol;

/// Ordered collection of unique symbols.
///
/// Insertion order carries no meaning but is preserved so enumeration is
/// deterministic. Lookups are linear; alphabets are small.
///
/// # Example
///
/// ```rust
/// use dfa_engine::core::{Symbol, SymbolSet};
///
/// let alphabet: SymbolSet = ["0", "1"].into_iter().map(Symbol::from).collect();
///
/// assert!(alphabet.contains(&Symbol::new("1")));
/// assert!(!alphabet.contains(&Symbol::new("2")));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SymbolSet {
    symbols: Vec<Symbol>,
}

impl SymbolSet {
    /// Create an empty alphabet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a symbol. Returns `false` if an equal symbol was already present.
    pub fn push(&mut self, symbol: Symbol) -> bool {
        if self.contains(&symbol) {
            return false;
        }
        self.symbols.push(symbol);
        true
    }

    /// Whether any member has the same comparison key as `symbol`.
    pub fn contains(&self, symbol: &Symbol) -> bool {
        self.symbols
            .iter()
            .any(|s| s.compare_key() == symbol.compare_key())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Symbol> {
        self.symbols.iter()
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

impl FromIterator<Symbol> for SymbolSet {
    fn from_iter<I: IntoIterator<Item = Symbol>>(iter: I) -> Self {
        let mut set = Self::new();
        for symbol in iter {
            set.push(symbol);
        }
        set
    }
}

impl<'a> IntoIterator for &'a SymbolSet {
    type Item = &'a Symbol;
    type IntoIter = std::slice::Iter<'a, Symbol>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
