//! Live game session and human input parsing.
//!
//! [`Game`] owns the one board that is mutated by confirmed moves. Searches
//! only ever receive copies of it.

use tracing::info;

use crate::board::{Board, Player, TerminalValue};
use crate::constants::NUM_COLUMNS;
use crate::error::{EngineError, Result};

/// A game in progress. Player1 always moves first.
#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    to_move: Player,
    outcome: TerminalValue,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            to_move: Player::Player1,
            outcome: TerminalValue::NotTerminal,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn to_move(&self) -> Player {
        self.to_move
    }

    pub fn outcome(&self) -> TerminalValue {
        self.outcome
    }

    pub fn is_over(&self) -> bool {
        self.outcome.is_terminal()
    }

    /// Play `column` for the side to move and hand the turn over.
    ///
    /// The board and turn are unchanged if the move is rejected.
    pub fn play(&mut self, column: usize) -> Result<TerminalValue> {
        if self.is_over() {
            return Err(EngineError::GameOver);
        }
        let row = self.board.play(column, self.to_move)?;
        info!(player = %self.to_move, column, row, "move played");

        self.outcome = self.board.terminal_value();
        self.to_move = self.to_move.opponent();
        Ok(self.outcome)
    }

    /// Start over with an empty board.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

/// Parse a 1-indexed column as typed by a person into a 0-indexed column.
///
/// Only the format and range are checked; whether the column is full is up
/// to the board.
pub fn parse_column(input: &str) -> Result<usize> {
    let trimmed = input.trim();
    let column: usize = trimmed
        .parse()
        .map_err(|_| EngineError::InvalidInput(format!("'{trimmed}' is not a column number")))?;
    if !(1..=NUM_COLUMNS).contains(&column) {
        return Err(EngineError::InvalidInput(format!(
            "column must be between 1 and {NUM_COLUMNS}"
        )));
    }
    Ok(column - 1)
}
