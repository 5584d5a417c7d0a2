//! Invertible geometric remappings of the board.
//!
//! A move in any direction is a left shift on a remapped board: the transform
//! is applied, rows are compacted towards index 0, and the exact inverse puts
//! the board back in its original orientation.

use super::state::{Board, Direction, SIZE};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transform {
    Identity,
    /// Reverse each row.
    ReverseRows,
    /// Swap rows and columns.
    Transpose,
    /// Transpose, then reverse each row.
    TransposeReverse,
}

impl Transform {
    /// The transform that makes `direction` point left.
    pub fn for_direction(direction: Direction) -> Self {
        match direction {
            Direction::Left => Transform::Identity,
            Direction::Right => Transform::ReverseRows,
            Direction::Up => Transform::Transpose,
            Direction::Down => Transform::TransposeReverse,
        }
    }

    pub fn apply(self, board: Board) -> Board {
        match self {
            Transform::Identity => board,
            Transform::ReverseRows => reverse_rows(board),
            Transform::Transpose => transpose(board),
            Transform::TransposeReverse => reverse_rows(transpose(board)),
        }
    }

    /// Undo `apply`: `t.invert(t.apply(b)) == b` for every board.
    pub fn invert(self, board: Board) -> Board {
        match self {
            Transform::Identity => board,
            Transform::ReverseRows => reverse_rows(board),
            Transform::Transpose => transpose(board),
            Transform::TransposeReverse => transpose(reverse_rows(board)),
        }
    }
}

pub(crate) fn transpose(board: Board) -> Board {
    let mut out = [[0; SIZE]; SIZE];
    for (r, row) in board.0.iter().enumerate() {
        for (c, &v) in row.iter().enumerate() {
            out[c][r] = v;
        }
    }
    Board(out)
}

pub(crate) fn reverse_rows(board: Board) -> Board {
    let mut rows = board.0;
    for row in rows.iter_mut() {
        row.reverse();
    }
    Board(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Board {
        Board::from_rows([
            [2, 4, 8, 16],
            [32, 64, 128, 256],
            [512, 1024, 2048, 4096],
            [0, 2, 0, 4],
        ])
        .unwrap()
    }

    #[test]
    fn it_round_trips_every_direction() {
        let b = sample();
        for d in Direction::ALL {
            let t = Transform::for_direction(d);
            assert_eq!(t.invert(t.apply(b)), b, "{d}");
            assert_eq!(t.apply(t.invert(b)), b, "{d}");
        }
    }

    #[test]
    fn it_transposes() {
        let t = transpose(sample());
        assert_eq!(t.rows()[0], [2, 32, 512, 0]);
        assert_eq!(t.rows()[3], [16, 256, 4096, 4]);
        assert_eq!(transpose(t), sample());
    }

    #[test]
    fn it_points_each_direction_left() {
        let b = sample();
        // Down: the bottom cell of column 0 leads the first transformed row.
        let down = Transform::TransposeReverse.apply(b);
        assert_eq!(down.rows()[0], [0, 512, 32, 2]);
        // Right: the last column leads each row.
        let right = Transform::ReverseRows.apply(b);
        assert_eq!(right.rows()[1], [256, 128, 64, 32]);
    }
}
