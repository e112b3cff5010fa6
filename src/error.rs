//! Error types shared by the board model, the searches and the game session.

use thiserror::Error;

use crate::constants::NUM_COLUMNS;

/// Errors that can occur in the engine.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("Illegal move: column {column} is full")]
    IllegalMove { column: usize },

    #[error("Illegal move: column {column} is outside 0..{max}", max = NUM_COLUMNS)]
    ColumnOutOfRange { column: usize },

    #[error("No legal moves available")]
    NoLegalMove,

    #[error("Invalid difficulty {0}: expected 1 (easy), 2 (medium) or 3 (hard)")]
    InvalidDifficulty(u8),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("The game is already over")]
    GameOver,
}

/// Convenience Result type for engine operations.
pub type Result<T> = std::result::Result<T, EngineError>;
