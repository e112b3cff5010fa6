//! Connect-Four board representation, move execution and terminal detection.
//!
//! The grid is stored column-major with row 0 at the bottom:
//!
//! ```text
//! row 5  . . . . . . .   <- top
//! row 0  . . . . . . .   <- bottom
//!        1 2 3 4 5 6 7
//! ```
//!
//! A `Board` is a small `Copy` value. Searches copy it for every branch and
//! never mutate a board they do not own.

use std::fmt;

use crate::constants::{COLUMN_HEIGHT, DIRECTIONS, FOUR, NUM_COLUMNS};
use crate::error::{EngineError, Result};

/// One of the two sides. The discriminant is the signed unit used to
/// alternate turns.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[repr(i8)]
pub enum Player {
    Player1 = 1,
    Player2 = -1,
}

impl Player {
    /// The other side.
    #[inline]
    pub fn opponent(self) -> Player {
        match self {
            Player::Player1 => Player::Player2,
            Player::Player2 => Player::Player1,
        }
    }

    /// +1 for Player1, -1 for Player2.
    #[inline]
    pub fn sign(self) -> i8 {
        self as i8
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::Player1 => write!(f, "Player1"),
            Player::Player2 => write!(f, "Player2"),
        }
    }
}

/// Outcome of a position, checked in declaration order.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TerminalValue {
    Player1Wins,
    Player2Wins,
    Draw,
    NotTerminal,
}

impl TerminalValue {
    pub fn is_terminal(self) -> bool {
        self != TerminalValue::NotTerminal
    }

    /// The winning side, if any.
    pub fn winner(self) -> Option<Player> {
        match self {
            TerminalValue::Player1Wins => Some(Player::Player1),
            TerminalValue::Player2Wins => Some(Player::Player2),
            _ => None,
        }
    }
}

/// A cell coordinate as (column, row).
pub type Cell = (usize, usize);

/// The game grid.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[Option<Player>; COLUMN_HEIGHT]; NUM_COLUMNS],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a board by playing `columns` in order, starting with Player1.
    pub fn from_moves(columns: &[usize]) -> Result<Self> {
        let mut board = Board::new();
        let mut player = Player::Player1;
        for &column in columns {
            board.play(column, player)?;
            player = player.opponent();
        }
        Ok(board)
    }

    /// Contents of a cell, `None` for empty or out of range.
    pub fn get(&self, column: usize, row: usize) -> Option<Player> {
        if column >= NUM_COLUMNS || row >= COLUMN_HEIGHT {
            return None;
        }
        self.cells[column][row]
    }

    /// Number of discs in a column.
    pub fn height(&self, column: usize) -> usize {
        self.cells[column].iter().take_while(|c| c.is_some()).count()
    }

    pub fn disc_count(&self) -> usize {
        self.cells.iter().flatten().filter(|c| c.is_some()).count()
    }

    /// True when every column is full.
    pub fn is_full(&self) -> bool {
        (0..NUM_COLUMNS).all(|column| self.is_column_full(column))
    }

    #[inline]
    fn is_column_full(&self, column: usize) -> bool {
        self.cells[column][COLUMN_HEIGHT - 1].is_some()
    }

    /// Columns where a disc may be dropped, in ascending order.
    pub fn valid_moves(&self) -> Vec<usize> {
        (0..NUM_COLUMNS)
            .filter(|&column| !self.is_column_full(column))
            .collect()
    }

    /// Like [`Board::valid_moves`], but empty once somebody has four in a row.
    pub fn playable_moves(&self) -> Vec<usize> {
        if self.four_in_a_row(Player::Player1) || self.four_in_a_row(Player::Player2) {
            return Vec::new();
        }
        self.valid_moves()
    }

    /// Drop a disc for `player` into `column`.
    ///
    /// Returns the row the disc landed in.
    ///
    /// # Errors
    /// - [`EngineError::ColumnOutOfRange`] if `column >= NUM_COLUMNS`
    /// - [`EngineError::IllegalMove`] if the column is full
    pub fn play(&mut self, column: usize, player: Player) -> Result<usize> {
        if column >= NUM_COLUMNS {
            return Err(EngineError::ColumnOutOfRange { column });
        }
        let row = self
            .cells[column]
            .iter()
            .position(|c| c.is_none())
            .ok_or(EngineError::IllegalMove { column })?;
        self.cells[column][row] = Some(player);
        Ok(row)
    }

    /// Check if `player` has four consecutive discs in any direction.
    pub fn four_in_a_row(&self, player: Player) -> bool {
        windows().any(|w| w.iter().all(|&(c, r)| self.cells[c][r] == Some(player)))
    }

    /// Classify the position. Player1 is checked before Player2, both before a draw.
    pub fn terminal_value(&self) -> TerminalValue {
        if self.four_in_a_row(Player::Player1) {
            TerminalValue::Player1Wins
        } else if self.four_in_a_row(Player::Player2) {
            TerminalValue::Player2Wins
        } else if self.is_full() {
            TerminalValue::Draw
        } else {
            TerminalValue::NotTerminal
        }
    }

    /// Game result for `player`: 1 for a win, 0 for a loss, 0.5 for a draw.
    ///
    /// Returns `None` while the game is still open.
    pub fn is_winner(&self, player: Player) -> Option<f64> {
        if self.four_in_a_row(player) {
            Some(1.0)
        } else if self.four_in_a_row(player.opponent()) {
            Some(0.0)
        } else if self.is_full() {
            Some(0.5)
        } else {
            None
        }
    }
}

/// Every line of `FOUR` cells on the board: rows, columns and both diagonals.
pub fn windows() -> impl Iterator<Item = [Cell; FOUR]> {
    DIRECTIONS.into_iter().flat_map(|(dc, dr)| {
        (0..NUM_COLUMNS).flat_map(move |c| {
            (0..COLUMN_HEIGHT).filter_map(move |r| {
                let last_c = c as isize + dc * (FOUR as isize - 1);
                let last_r = r as isize + dr * (FOUR as isize - 1);
                let in_bounds = (0..NUM_COLUMNS as isize).contains(&last_c)
                    && (0..COLUMN_HEIGHT as isize).contains(&last_r);
                in_bounds.then(|| {
                    std::array::from_fn::<Cell, FOUR, _>(|i| {
                        let i = i as isize;
                        ((c as isize + dc * i) as usize, (r as isize + dr * i) as usize)
                    })
                })
            })
        })
    })
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (0..COLUMN_HEIGHT).rev() {
            write!(f, "|")?;
            for column in 0..NUM_COLUMNS {
                let ch = match self.cells[column][row] {
                    Some(Player::Player1) => 'X',
                    Some(Player::Player2) => 'O',
                    None => ' ',
                };
                write!(f, "{ch}|")?;
            }
            writeln!(f)?;
        }
        for column in 1..=NUM_COLUMNS {
            write!(f, " {column}")?;
        }
        writeln!(f)
    }
}

// =============================================================================
// Core interface
// =============================================================================

/// Create an empty board.
pub fn new_board() -> Board {
    Board::new()
}

/// Return a copy of `board` with `player`'s disc dropped into `column`.
pub fn apply_move(board: &Board, column: usize, player: Player) -> Result<Board> {
    let mut next = *board;
    next.play(column, player)?;
    Ok(next)
}

/// Columns that are not full.
pub fn legal_moves(board: &Board) -> Vec<usize> {
    board.valid_moves()
}

pub fn terminal_value(board: &Board) -> TerminalValue {
    board.terminal_value()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A full board with no four in a row, 21 discs each.
    fn drawn_board() -> Board {
        let a = [1, 1, -1, -1, 1, 1];
        let b = [-1, -1, 1, 1, -1, -1];
        let c = [1, -1, 1, -1, 1, -1];
        let layout = [a, a, b, a, b, c, b];
        let mut board = Board::new();
        for (column, pattern) in layout.iter().enumerate() {
            for &sign in pattern {
                let player = if sign == 1 { Player::Player1 } else { Player::Player2 };
                board.play(column, player).unwrap();
            }
        }
        board
    }

    #[test]
    fn test_empty_board() {
        let board = Board::new();
        assert_eq!(board.disc_count(), 0);
        assert_eq!(board.valid_moves(), vec![0, 1, 2, 3, 4, 5, 6]);
        assert_eq!(board.terminal_value(), TerminalValue::NotTerminal);
        assert_eq!(board.is_winner(Player::Player1), None);
    }

    #[test]
    fn test_player_negation() {
        assert_eq!(Player::Player1.opponent(), Player::Player2);
        assert_eq!(Player::Player2.opponent(), Player::Player1);
        assert_eq!(Player::Player1.sign(), -Player::Player2.sign());
    }

    #[test]
    fn test_play_gravity() {
        let mut board = Board::new();
        assert_eq!(board.play(3, Player::Player1), Ok(0));
        assert_eq!(board.play(3, Player::Player2), Ok(1));
        assert_eq!(board.get(3, 0), Some(Player::Player1));
        assert_eq!(board.get(3, 1), Some(Player::Player2));
        assert_eq!(board.get(3, 2), None);
        assert_eq!(board.height(3), 2);
    }

    #[test]
    fn test_play_full_column() {
        let mut board = Board::new();
        for _ in 0..COLUMN_HEIGHT {
            board.play(0, Player::Player1).unwrap();
        }
        assert_eq!(
            board.play(0, Player::Player2),
            Err(EngineError::IllegalMove { column: 0 })
        );
        assert!(!board.valid_moves().contains(&0));
    }

    #[test]
    fn test_play_out_of_range() {
        let mut board = Board::new();
        assert_eq!(
            board.play(NUM_COLUMNS, Player::Player1),
            Err(EngineError::ColumnOutOfRange { column: NUM_COLUMNS })
        );
    }

    #[test]
    fn test_window_count() {
        // 24 horizontal, 21 vertical, 12 per diagonal direction
        assert_eq!(windows().count(), 69);
    }

    #[test]
    fn test_vertical_four() {
        let board = Board::from_moves(&[2, 3, 2, 3, 2, 3, 2]).unwrap();
        assert!(board.four_in_a_row(Player::Player1));
        assert!(!board.four_in_a_row(Player::Player2));
        assert_eq!(board.terminal_value(), TerminalValue::Player1Wins);
    }

    #[test]
    fn test_rising_diagonal_four() {
        let mut board = Board::new();
        for (column, fillers) in [(0, 0), (1, 1), (2, 2), (3, 3)] {
            for _ in 0..fillers {
                board.play(column, Player::Player1).unwrap();
            }
            board.play(column, Player::Player2).unwrap();
        }
        assert!(board.four_in_a_row(Player::Player2));
        assert_eq!(board.terminal_value(), TerminalValue::Player2Wins);
        assert_eq!(board.is_winner(Player::Player2), Some(1.0));
        assert_eq!(board.is_winner(Player::Player1), Some(0.0));
    }

    #[test]
    fn test_falling_diagonal_four() {
        let mut board = Board::new();
        for (column, fillers) in [(3, 3), (4, 2), (5, 1), (6, 0)] {
            for _ in 0..fillers {
                board.play(column, Player::Player2).unwrap();
            }
            board.play(column, Player::Player1).unwrap();
        }
        assert!(board.four_in_a_row(Player::Player1));
    }

    #[test]
    fn test_playable_moves_stop_at_win() {
        let board = Board::from_moves(&[0, 6, 1, 6, 2, 6, 3]).unwrap();
        assert!(!board.valid_moves().is_empty());
        assert!(board.playable_moves().is_empty());
    }

    #[test]
    fn test_drawn_board() {
        let board = drawn_board();
        assert!(board.is_full());
        assert!(!board.four_in_a_row(Player::Player1));
        assert!(!board.four_in_a_row(Player::Player2));
        assert_eq!(board.terminal_value(), TerminalValue::Draw);
        assert_eq!(board.is_winner(Player::Player1), Some(0.5));
        assert!(board.valid_moves().is_empty());
    }

    #[test]
    fn test_apply_move_leaves_original() {
        let board = new_board();
        let next = apply_move(&board, 4, Player::Player1).unwrap();
        assert_eq!(board.disc_count(), 0);
        assert_eq!(next.get(4, 0), Some(Player::Player1));
    }

    #[test]
    fn test_display() {
        let board = Board::from_moves(&[0, 6]).unwrap();
        let text = board.to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), COLUMN_HEIGHT + 1);
        assert_eq!(lines[COLUMN_HEIGHT - 1], "|X| | | | | |O|");
        assert_eq!(lines[COLUMN_HEIGHT], " 1 2 3 4 5 6 7");
    }
}
