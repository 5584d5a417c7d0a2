//! twenty48-engine: the 4x4 board engine behind the 2048 front end.
//!
//! This crate provides:
//! - A `Board` type with pure slide/merge and inspection methods (`shift`, `is_game_over`, ...)
//! - A `Game` that owns the board, the running score and an injected RNG
//! - The invertible `Transform`s that reduce every direction to one left compaction
//!
//! Quick start:
//! ```
//! use twenty48_engine::engine::{Direction, Game, GameStatus};
//! use rand::{SeedableRng, rngs::StdRng};
//!
//! // Deterministic game with a seeded RNG; two tiles are spawned up front.
//! let mut game = Game::new(StdRng::seed_from_u64(42));
//! assert_eq!(game.board().count_empty(), 14);
//!
//! let outcome = game.apply_move(Direction::Left);
//! assert_eq!(outcome.board, game.board());
//! assert_eq!(game.status(), GameStatus::InProgress);
//! ```
//!
//! Note: the RNG is the only source of non-determinism. Production wiring passes
//! an entropy-seeded generator; tests pass `StdRng::seed_from_u64`.
//!
pub mod engine;
pub mod error;

pub use error::EngineError;
