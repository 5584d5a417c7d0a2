//! Engine module: 4x4 board, slide/merge ops, and the game state that ties
//! them to a score and an RNG. Public API stays small and ergonomic.
//!
//! - `Board` is the 4x4 grid with useful methods.
//! - Free functions mirror the methods when convenient (e.g., `shift`).
//! - `Transform` holds the geometry; `ops` holds the single merge rule.

pub mod game;
mod ops;
pub mod state;
pub mod transform;

pub use game::{Game, GameStatus, MoveOutcome};
pub use state::{Board, Direction, MAX_TILE, SIZE, Score, Tile, WINNING_TILE};
pub use transform::Transform;

pub use ops::{count_empty, get_highest_tile_val, is_game_over, shift, spawn_tile};
