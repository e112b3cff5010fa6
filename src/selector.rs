//! Move selection: routes a request to minimax or MCTS.

use fastrand::Rng;
use tracing::info;

use crate::board::{Board, Player};
use crate::config::{Difficulty, EngineConfig, Opponent};
use crate::error::Result;
use crate::mcts::mcts;
use crate::minimax::best_move;

/// Picks AI moves with a fixed configuration and its own random source.
pub struct MoveSelector {
    config: EngineConfig,
    rng: Rng,
}

impl Default for MoveSelector {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

impl MoveSelector {
    /// Create a selector seeded from system entropy.
    pub fn new(config: EngineConfig) -> Self {
        Self {
            config,
            rng: Rng::new(),
        }
    }

    /// Create a selector with a reproducible random sequence.
    pub fn with_seed(config: EngineConfig, seed: u64) -> Self {
        Self {
            config,
            rng: Rng::with_seed(seed),
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Choose a column for `player` using the given opponent and difficulty.
    ///
    /// # Errors
    /// [`crate::error::EngineError::NoLegalMove`] if the game on `board` is already decided.
    pub fn select_move(
        &mut self,
        board: &Board,
        player: Player,
        opponent: Opponent,
        difficulty: Difficulty,
    ) -> Result<usize> {
        let column = match opponent {
            Opponent::Minimax => {
                let depth = self.config.depth_for(difficulty);
                best_move(board, depth, player, &mut self.rng)?.column
            }
            Opponent::MonteCarlo => {
                let iterations = self.config.iterations_for(difficulty);
                mcts(board, player, iterations, &mut self.rng)?
            }
        };
        info!(%player, %opponent, ?difficulty, column, "selected move");
        Ok(column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EngineError;

    fn quick_config() -> EngineConfig {
        EngineConfig {
            max_depth: 2,
            iterations: 200,
            ..Default::default()
        }
    }

    #[test]
    fn test_both_opponents_return_legal_moves() {
        let board = Board::from_moves(&[3, 3, 4]).unwrap();
        let mut selector = MoveSelector::with_seed(quick_config(), 42);
        for opponent in [Opponent::Minimax, Opponent::MonteCarlo] {
            for difficulty in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
                let column = selector
                    .select_move(&board, Player::Player2, opponent, difficulty)
                    .unwrap();
                assert!(board.valid_moves().contains(&column));
            }
        }
    }

    #[test]
    fn test_seeded_selectors_agree() {
        let board = Board::from_moves(&[3]).unwrap();
        let mut a = MoveSelector::with_seed(quick_config(), 7);
        let mut b = MoveSelector::with_seed(quick_config(), 7);
        for opponent in [Opponent::Minimax, Opponent::MonteCarlo] {
            assert_eq!(
                a.select_move(&board, Player::Player2, opponent, Difficulty::Medium),
                b.select_move(&board, Player::Player2, opponent, Difficulty::Medium)
            );
        }
    }

    #[test]
    fn test_decided_board_is_rejected() {
        let board = Board::from_moves(&[0, 6, 1, 6, 2, 6, 3]).unwrap();
        let mut selector = MoveSelector::with_seed(quick_config(), 1);
        for opponent in [Opponent::Minimax, Opponent::MonteCarlo] {
            assert_eq!(
                selector.select_move(&board, Player::Player2, opponent, Difficulty::Easy),
                Err(EngineError::NoLegalMove)
            );
        }
    }
}
