use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("Invalid card: {0:?}")]
    InvalidCard(String),
    #[error("Hand evaluation needs 5 to 7 cards, got {0}")]
    InvalidCardCount(usize),
    #[error("Duplicate card: {0}")]
    DuplicateCard(String),
    #[error("Invalid game state: {0}")]
    InvalidGameState(String),
}
