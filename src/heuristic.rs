//! Static position evaluation for the depth cutoff of minimax search.
//!
//! The score is a plain sum of a centre-column bonus and a local score for
//! every 4-cell window on the board. It has no fixed range and is only
//! meaningful as an ordering between positions.

use crate::board::{Board, Cell, Player, windows};
use crate::constants::{
    CENTER_COLUMN, CENTER_WEIGHT, COLUMN_HEIGHT, THREE_WEIGHT, TWO_WEIGHT, WINDOW_LENGTH,
};

/// Evaluate `board` from the point of view of `player`.
pub fn score(board: &Board, player: Player) -> i64 {
    let center = (0..COLUMN_HEIGHT)
        .filter(|&row| board.get(CENTER_COLUMN, row) == Some(player))
        .count() as i64;

    center * CENTER_WEIGHT
        + windows()
            .map(|window| window_score(board, &window, player))
            .sum::<i64>()
}

/// Score a single window: threats of three and two, own minus opponent's.
fn window_score(board: &Board, window: &[Cell; WINDOW_LENGTH], player: Player) -> i64 {
    let mut own = 0;
    let mut theirs = 0;
    let mut empty = 0;
    for &(column, row) in window {
        match board.get(column, row) {
            Some(p) if p == player => own += 1,
            Some(_) => theirs += 1,
            None => empty += 1,
        }
    }

    let mut score = 0;
    match (own, empty) {
        (3, 1) => score += THREE_WEIGHT,
        (2, 2) => score += TWO_WEIGHT,
        _ => {}
    }
    match (theirs, empty) {
        (3, 1) => score -= THREE_WEIGHT,
        (2, 2) => score -= TWO_WEIGHT,
        _ => {}
    }
    score
}
