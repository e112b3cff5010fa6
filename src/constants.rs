//! Constants for board dimensions, search budgets, and evaluation weights.
//!
//! Everything here is a compile-time default. Search budgets can be
//! overridden at runtime through [`crate::config::EngineConfig`].

// =============================================================================
// Board Geometry
// =============================================================================

/// Number of columns on the board.
pub const NUM_COLUMNS: usize = 7;

/// Number of rows in each column.
pub const COLUMN_HEIGHT: usize = 6;

/// Total number of cells on the board.
pub const BOARD_CELLS: usize = NUM_COLUMNS * COLUMN_HEIGHT;

/// Discs in a line needed to win.
pub const FOUR: usize = 4;

/// Length of the windows scored by the heuristic evaluator.
pub const WINDOW_LENGTH: usize = FOUR;

/// Column holding the centre bonus.
pub const CENTER_COLUMN: usize = NUM_COLUMNS / 2;

/// Line directions as (column step, row step).
/// Order: horizontal, vertical, rising diagonal, falling diagonal
pub const DIRECTIONS: [(isize, isize); 4] = [(1, 0), (0, 1), (1, 1), (1, -1)];

// =============================================================================
// Minimax Parameters
// =============================================================================

/// Search depth (plies) at medium difficulty.
pub const MAX_DEPTH: usize = 5;

/// Depth change per difficulty step away from medium.
pub const DEPTH_STEP: usize = 1;

/// Magnitude of a decided game. Independent of the depth it was found at.
pub const WIN_SCORE: i64 = 999_999_999;

// =============================================================================
// MCTS Parameters
// =============================================================================

/// Simulations per move at medium difficulty.
pub const ITERMAX: usize = 2501;

/// Iteration change per difficulty step away from medium.
pub const ITERATION_STEP: usize = 1000;

/// Exploration constant inside the UCB1 square root.
pub const UCB_EXPLORATION: f64 = 2.0;

// =============================================================================
// Heuristic Weights
// =============================================================================

/// Bonus per own disc in the centre column.
pub const CENTER_WEIGHT: i64 = 3;

/// Window with three own discs and one empty cell.
pub const THREE_WEIGHT: i64 = 10;

/// Window with two own discs and two empty cells.
pub const TWO_WEIGHT: i64 = 4;

// =============================================================================
// Orchestration
// =============================================================================

/// Invalid entries tolerated before an interactive prompt gives up.
pub const MAX_INPUT_ATTEMPTS: usize = 5;
