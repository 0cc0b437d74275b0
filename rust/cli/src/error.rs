//! Error types for the CLI application.
//!
//! Rejected moves are not errors at this level: the play loop reports them
//! and re-prompts. `CliError` covers what ends a command.

use std::fmt;

use solitaire_engine::errors::MoveError;

use crate::config::ConfigError;

/// Custom error type for CLI operations.
///
/// This enum encompasses all error types that can occur during CLI execution,
/// allowing for proper error propagation using the `?` operator.
#[derive(Debug)]
pub enum CliError {
    /// I/O error (stdin reads, stdout/stderr writes, etc.)
    Io(std::io::Error),

    /// Configuration error
    Config(String),

    /// The engine was driven outside its contract (e.g. a Joker reached a
    /// colour check)
    Engine(String),

    /// A checked move was illegal (used by `check`)
    IllegalMove(MoveError),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Io(e) => write!(f, "I/O error: {}", e),
            CliError::Config(msg) => write!(f, "Configuration error: {}", msg),
            CliError::Engine(msg) => write!(f, "Engine error: {}", msg),
            CliError::IllegalMove(e) => write!(f, "Illegal move: {}", e),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Io(e) => Some(e),
            CliError::IllegalMove(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(error: std::io::Error) -> Self {
        CliError::Io(error)
    }
}

impl From<ConfigError> for CliError {
    fn from(error: ConfigError) -> Self {
        CliError::Config(error.to_string())
    }
}

impl From<MoveError> for CliError {
    fn from(error: MoveError) -> Self {
        if error.is_contract_violation() {
            CliError::Engine(error.to_string())
        } else {
            CliError::IllegalMove(error)
        }
    }
}
