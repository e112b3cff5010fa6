//! Depth-limited minimax search with alpha-beta pruning.
//!
//! Leaves are scored with [`crate::heuristic::score`] once the depth budget
//! runs out. Decided games score `±WIN_SCORE` regardless of how deep they
//! were found, so a quick win is not preferred over a slower forced one.
//!
//! Values are always from the point of view of the side that maximizes at
//! the root. Move order is shuffled on every call, which only changes which
//! of several equally valued moves is returned.

use fastrand::Rng;
use tracing::debug;

use crate::board::{Board, Player, TerminalValue};
use crate::constants::WIN_SCORE;
use crate::error::{EngineError, Result};
use crate::heuristic;

/// The chosen column and its minimax value.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SearchResult {
    pub column: usize,
    pub value: i64,
}

/// Search `depth` plies ahead and return the best column for `player`.
///
/// `player` is the side to move; `maximizing` says whether it is the side
/// the values are measured for. Callers normally pass
/// `(i64::MIN, i64::MAX, true)`. A depth of zero is treated as one ply so a
/// column is always produced.
///
/// # Errors
/// [`EngineError::NoLegalMove`] if the game on `board` is already decided.
pub fn minimax(
    board: &Board,
    depth: usize,
    alpha: i64,
    beta: i64,
    maximizing: bool,
    player: Player,
    rng: &mut Rng,
) -> Result<SearchResult> {
    if board.playable_moves().is_empty() {
        return Err(EngineError::NoLegalMove);
    }

    let depth = depth.max(1);
    let (column, value) = alphabeta(board, depth, alpha, beta, maximizing, player, rng)?;
    let column = column.ok_or(EngineError::NoLegalMove)?;

    debug!(%player, depth, column, value, "minimax search finished");
    Ok(SearchResult { column, value })
}

/// Convenience wrapper: full window, `player` maximizing.
pub fn best_move(
    board: &Board,
    depth: usize,
    player: Player,
    rng: &mut Rng,
) -> Result<SearchResult> {
    minimax(board, depth, i64::MIN, i64::MAX, true, player, rng)
}

/// Alpha-beta recursion. Returns no column at leaves.
fn alphabeta(
    board: &Board,
    depth: usize,
    mut alpha: i64,
    mut beta: i64,
    maximizing: bool,
    player: Player,
    rng: &mut Rng,
) -> Result<(Option<usize>, i64)> {
    let perspective = if maximizing { player } else { player.opponent() };

    if depth == 0 {
        return Ok((None, heuristic::score(board, perspective)));
    }
    match board.terminal_value() {
        TerminalValue::NotTerminal => {}
        TerminalValue::Draw => return Ok((None, 0)),
        decided => {
            let value = if decided.winner() == Some(perspective) {
                WIN_SCORE
            } else {
                -WIN_SCORE
            };
            return Ok((None, value));
        }
    }

    let mut moves = board.valid_moves();
    rng.shuffle(&mut moves);
    let mut column = moves[rng.usize(..moves.len())];

    if maximizing {
        let mut value = i64::MIN;
        for &mv in &moves {
            let mut child = *board;
            child.play(mv, player)?;
            let (_, score) =
                alphabeta(&child, depth - 1, alpha, beta, false, player.opponent(), rng)?;
            if score > value {
                value = score;
                column = mv;
            }
            alpha = alpha.max(value);
            if alpha >= beta {
                break;
            }
        }
        Ok((Some(column), value))
    } else {
        let mut value = i64::MAX;
        for &mv in &moves {
            let mut child = *board;
            child.play(mv, player)?;
            let (_, score) =
                alphabeta(&child, depth - 1, alpha, beta, true, player.opponent(), rng)?;
            if score < value {
                value = score;
                column = mv;
            }
            beta = beta.min(value);
            if alpha >= beta {
                break;
            }
        }
        Ok((Some(column), value))
    }
}
