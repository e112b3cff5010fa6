//! Search configuration: opponent kinds, difficulty levels and budgets.
//!
//! The configuration is passed explicitly into the selector and never
//! stored on the board.

use std::fmt;

use clap::ValueEnum;

use crate::constants::{DEPTH_STEP, ITERATION_STEP, ITERMAX, MAX_DEPTH};
use crate::error::EngineError;

/// The available AI opponents.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Opponent {
    /// Depth-limited minimax with alpha-beta pruning
    Minimax,
    /// Monte Carlo Tree Search with random rollouts
    MonteCarlo,
}

impl fmt::Display for Opponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Opponent::Minimax => write!(f, "Minimax"),
            Opponent::MonteCarlo => write!(f, "Monte Carlo"),
        }
    }
}

/// AI strength. Each step away from `Medium` shifts the search budget.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Difficulty {
    Easy = 1,
    #[default]
    Medium = 2,
    Hard = 3,
}

impl TryFrom<u8> for Difficulty {
    type Error = EngineError;

    fn try_from(level: u8) -> Result<Self, Self::Error> {
        match level {
            1 => Ok(Difficulty::Easy),
            2 => Ok(Difficulty::Medium),
            3 => Ok(Difficulty::Hard),
            other => Err(EngineError::InvalidDifficulty(other)),
        }
    }
}

/// Base search budgets and how difficulty adjusts them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EngineConfig {
    /// Minimax depth (plies) at medium difficulty.
    pub max_depth: usize,

    /// MCTS iterations at medium difficulty.
    pub iterations: usize,

    /// Plies added at hard and removed at easy.
    pub depth_step: usize,

    /// Iterations added at hard and removed at easy.
    pub iteration_step: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_depth: MAX_DEPTH,
            iterations: ITERMAX,
            depth_step: DEPTH_STEP,
            iteration_step: ITERATION_STEP,
        }
    }
}

impl EngineConfig {
    /// Minimax depth for the given difficulty. Never below one ply.
    pub fn depth_for(&self, difficulty: Difficulty) -> usize {
        match difficulty {
            Difficulty::Easy => self.max_depth.saturating_sub(self.depth_step).max(1),
            Difficulty::Medium => self.max_depth,
            Difficulty::Hard => self.max_depth + self.depth_step,
        }
    }

    /// MCTS iterations for the given difficulty. Never below one iteration.
    pub fn iterations_for(&self, difficulty: Difficulty) -> usize {
        match difficulty {
            Difficulty::Easy => self.iterations.saturating_sub(self.iteration_step).max(1),
            Difficulty::Medium => self.iterations,
            Difficulty::Hard => self.iterations + self.iteration_step,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_difficulty_from_level() {
        assert_eq!(Difficulty::try_from(1), Ok(Difficulty::Easy));
        assert_eq!(Difficulty::try_from(2), Ok(Difficulty::Medium));
        assert_eq!(Difficulty::try_from(3), Ok(Difficulty::Hard));
        assert_eq!(Difficulty::try_from(4), Err(EngineError::InvalidDifficulty(4)));
        assert_eq!(Difficulty::try_from(0), Err(EngineError::InvalidDifficulty(0)));
    }

    #[test]
    fn test_default_budgets() {
        let config = EngineConfig::default();
        assert_eq!(config.depth_for(Difficulty::Easy), 4);
        assert_eq!(config.depth_for(Difficulty::Medium), 5);
        assert_eq!(config.depth_for(Difficulty::Hard), 6);
        assert_eq!(config.iterations_for(Difficulty::Easy), 1501);
        assert_eq!(config.iterations_for(Difficulty::Medium), 2501);
        assert_eq!(config.iterations_for(Difficulty::Hard), 3501);
    }

    #[test]
    fn test_small_budgets_stay_positive() {
        let config = EngineConfig {
            max_depth: 1,
            iterations: 10,
            ..Default::default()
        };
        assert_eq!(config.depth_for(Difficulty::Easy), 1);
        assert_eq!(config.iterations_for(Difficulty::Easy), 1);
    }
}
