//! Error type for CLI commands.

use botnaught_ai::DecisionError;
use botnaught_ai::config::ConfigError;
use botnaught_engine::errors::EngineError;
use std::fmt;

/// Everything a command can fail with; all of it maps to exit code 2.
#[derive(Debug)]
pub enum CliError {
    /// I/O error (reading input, writing output)
    Io(std::io::Error),

    /// Invalid user input or command-line arguments
    InvalidInput(String),

    Config(String),

    /// Rejected by the engine or the strategy
    Engine(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Io(e) => write!(f, "I/O error: {}", e),
            CliError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            CliError::Config(msg) => write!(f, "Configuration error: {}", msg),
            CliError::Engine(msg) => write!(f, "Engine error: {}", msg),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(error: std::io::Error) -> Self {
        CliError::Io(error)
    }
}

impl From<EngineError> for CliError {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::InvalidCard(_)
            | EngineError::InvalidCardCount(_)
            | EngineError::DuplicateCard(_) => CliError::InvalidInput(error.to_string()),
            EngineError::InvalidGameState(_) => CliError::Engine(error.to_string()),
        }
    }
}

impl From<DecisionError> for CliError {
    fn from(error: DecisionError) -> Self {
        match error {
            DecisionError::InvalidGameState(_) => CliError::Engine(error.to_string()),
            DecisionError::UnknownStrategy(_) | DecisionError::InvalidConfig(_) => {
                CliError::Config(error.to_string())
            }
        }
    }
}

impl From<ConfigError> for CliError {
    fn from(error: ConfigError) -> Self {
        CliError::Config(error.to_string())
    }
}
