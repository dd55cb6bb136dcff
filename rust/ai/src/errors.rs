use botnaught_engine::errors::EngineError;
use thiserror::Error;

/// Errors surfaced by the decision layer.
///
/// Malformed snapshots and evaluator failures both become
/// [`DecisionError::InvalidGameState`]; the engine never guesses an action
/// for input it cannot trust.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DecisionError {
    #[error("Invalid game state: {0}")]
    InvalidGameState(String),
    #[error("Unknown strategy: {0}")]
    UnknownStrategy(String),
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl From<EngineError> for DecisionError {
    fn from(err: EngineError) -> Self {
        match err {
            EngineError::InvalidGameState(message) => DecisionError::InvalidGameState(message),
            other => DecisionError::InvalidGameState(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn engine_errors_become_invalid_state() {
        let err: DecisionError = EngineError::InvalidCardCount(4).into();
        assert_eq!(
            err,
            DecisionError::InvalidGameState("Hand evaluation needs 5 to 7 cards, got 4".into())
        );

        let err: DecisionError = EngineError::InvalidGameState("no hero".into()).into();
        assert_eq!(err.to_string(), "Invalid game state: no hero");
    }
}
