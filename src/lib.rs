//! Connect4-Rust: a Connect-Four engine with two search algorithms.
//!
//! Given a position and a side to move, the engine picks a column using
//! either depth-limited minimax with alpha-beta pruning or Monte Carlo Tree
//! Search with UCB1 selection.
//!
//! ## Modules
//!
//! - [`constants`] - Board dimensions, search budgets and heuristic weights
//! - [`error`] - Engine error type
//! - [`board`] - Board model (moves, legality, win and draw detection)
//! - [`heuristic`] - Window-based static evaluation
//! - [`minimax`] - Alpha-beta search
//! - [`mcts`] - Monte Carlo Tree Search
//! - [`config`] - Opponents, difficulty levels and search budgets
//! - [`selector`] - Routes a move request to one of the searches
//! - [`game`] - Live game session and input parsing
//!
//! ## Example
//!
//! ```
//! use connect4_rust::board::{Player, apply_move, new_board};
//! use connect4_rust::config::{Difficulty, EngineConfig, Opponent};
//! use connect4_rust::selector::MoveSelector;
//!
//! let board = apply_move(&new_board(), 3, Player::Player1).unwrap();
//!
//! let config = EngineConfig { iterations: 200, ..Default::default() };
//! let mut selector = MoveSelector::with_seed(config, 42);
//! let column = selector
//!     .select_move(&board, Player::Player2, Opponent::MonteCarlo, Difficulty::Medium)
//!     .unwrap();
//! assert!(column < 7);
//! ```

pub mod board;
pub mod config;
pub mod constants;
pub mod error;
pub mod game;
pub mod heuristic;
pub mod mcts;
pub mod minimax;
pub mod selector;
