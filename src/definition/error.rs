//! Definition loading errors.

use crate::core::AutomatonError;
use thiserror::Error;

/// Errors that can occur while loading an automaton definition.
#[derive(Debug, Error)]
pub enum DefinitionError {
    /// Reading the definition failed
    #[error("Failed to read definition: {0}")]
    Io(#[from] std::io::Error),

    /// The document is not valid definition JSON
    #[error("Failed to parse definition: {0}")]
    Parse(#[from] serde_json::Error),

    /// The definition describes an invalid automaton
    #[error("Invalid automaton definition: {0}")]
    Automaton(#[from] AutomatonError),
}
