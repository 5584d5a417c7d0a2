use crate::engine::state::Tile;

/// Errors raised at the boundary of the engine. Moves and spawns themselves
/// are total and never fail.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("invalid direction {0:?}; expected one of up, down, left, right")]
    InvalidDirection(String),
    #[error("invalid tile value {value} at row {row}, column {col}")]
    InvalidTile { row: usize, col: usize, value: Tile },
}
