use rand::Rng;
use std::fmt;
use std::str::FromStr;

use super::ops;
use crate::error::EngineError;

/// Side length of the board.
pub const SIZE: usize = 4;

/// Tile value the player is aiming for.
pub const WINNING_TILE: Tile = 2048;

/// A cell value: 0 for empty, otherwise a power of two >= 2.
pub type Tile = u32;
pub type Score = u64;

/// Largest value a cell can hold. Two tiles of this value never merge, since
/// their sum does not fit in a `Tile`.
pub const MAX_TILE: Tile = 1 << (Tile::BITS - 1);

/// A direction to move/merge tiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = EngineError;

    /// Parse a direction name, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "up" => Ok(Direction::Up),
            "down" => Ok(Direction::Down),
            "left" => Ok(Direction::Left),
            "right" => Ok(Direction::Right),
            _ => Err(EngineError::InvalidDirection(s.to_string())),
        }
    }
}

/// Numeric codes follow `Direction::ALL`: 0=Up, 1=Down, 2=Left, 3=Right.
impl TryFrom<u8> for Direction {
    type Error = EngineError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Direction::ALL
            .get(code as usize)
            .copied()
            .ok_or_else(|| EngineError::InvalidDirection(code.to_string()))
    }
}

/// The 4x4 grid, stored row-major as actual tile values.
///
/// Every constructor upholds the tile invariant (0 or a power of two >= 2),
/// so methods can treat the contents as well-formed.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board(pub(crate) [[Tile; SIZE]; SIZE]);

impl Board {
    /// A constant empty board (all zeros).
    pub const EMPTY: Board = Board([[0; SIZE]; SIZE]);

    /// Build a board from explicit rows, rejecting values that are neither
    /// 0 nor a power of two >= 2. Every such value is at most `MAX_TILE`.
    ///
    /// ```
    /// use twenty48_engine::engine::Board;
    /// let b = Board::from_rows([[2, 2, 0, 0], [0; 4], [0; 4], [0; 4]]).unwrap();
    /// assert_eq!(b.count_empty(), 14);
    /// assert!(Board::from_rows([[3, 0, 0, 0], [0; 4], [0; 4], [0; 4]]).is_err());
    /// ```
    pub fn from_rows(rows: [[Tile; SIZE]; SIZE]) -> Result<Self, EngineError> {
        for (row, line) in rows.iter().enumerate() {
            for (col, &value) in line.iter().enumerate() {
                if value != 0 && (value < 2 || !value.is_power_of_two()) {
                    return Err(EngineError::InvalidTile { row, col, value });
                }
            }
        }
        Ok(Board(rows))
    }

    /// Borrow the rows of the grid.
    #[inline]
    pub fn rows(&self) -> &[[Tile; SIZE]; SIZE] {
        &self.0
    }

    /// Value at (`row`, `col`). Panics when either index is out of range.
    #[inline]
    pub fn get(self, row: usize, col: usize) -> Tile {
        self.0[row][col]
    }

    /// Return the board resulting from sliding/merging tiles in `dir`, together
    /// with the points those merges earn. No random insert.
    ///
    /// ```
    /// use twenty48_engine::engine::{Board, Direction};
    /// let b = Board::from_rows([[2, 2, 2, 2], [0; 4], [0; 4], [0; 4]]).unwrap();
    /// let (after, gained) = b.shift(Direction::Left);
    /// assert_eq!(after.rows()[0], [4, 4, 0, 0]);
    /// assert_eq!(gained, 8);
    /// ```
    #[inline]
    pub fn shift(self, dir: Direction) -> (Self, Score) {
        ops::shift(self, dir)
    }

    /// Insert a 2 (75%) or 4 (25%) tile into a uniformly random empty cell,
    /// using the provided RNG. A full board is returned unchanged.
    ///
    /// Deterministic example using a seeded RNG:
    /// ```
    /// use twenty48_engine::engine::Board;
    /// use rand::{SeedableRng, rngs::StdRng};
    /// let mut rng = StdRng::seed_from_u64(123);
    /// let b = Board::EMPTY.with_random_tile(&mut rng).with_random_tile(&mut rng);
    /// assert_eq!(b.count_empty(), 14);
    /// ```
    #[inline]
    pub fn with_random_tile<R: Rng + ?Sized>(self, rng: &mut R) -> Self {
        ops::spawn_tile(self, rng)
    }

    /// True when no cell is empty and no two 4-adjacent cells are equal.
    ///
    /// ```
    /// use twenty48_engine::engine::Board;
    /// // An empty board still has room, so the game is not over.
    /// assert!(!Board::EMPTY.is_game_over());
    /// ```
    #[inline]
    pub fn is_game_over(self) -> bool {
        ops::is_game_over(self)
    }

    /// True once a tile of at least `WINNING_TILE` is on the board.
    #[inline]
    pub fn is_won(self) -> bool {
        self.highest_tile() >= WINNING_TILE
    }

    /// Return the highest tile value (e.g., 2048) present on the board.
    #[inline]
    pub fn highest_tile(self) -> Tile {
        ops::get_highest_tile_val(self)
    }

    /// Count the number of empty cells on the board.
    #[inline]
    pub fn count_empty(self) -> usize {
        ops::count_empty(self)
    }

    /// Get the value at a flat index. Index runs 0..16 row-major.
    /// Panics when `idx` is out of range.
    #[inline]
    pub fn tile_value(self, idx: usize) -> Tile {
        self.0[idx / SIZE][idx % SIZE]
    }

    /// Iterate over tile values in row-major order.
    #[inline]
    pub fn tiles(self) -> TilesIter {
        TilesIter {
            board: self,
            idx: 0,
        }
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board({:?})", self.0)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        for (i, row) in self.0.iter().enumerate() {
            if i > 0 {
                writeln!(f, "{}", "-".repeat(31))?;
            }
            let cells: Vec<String> = row.iter().map(ops::format_val).collect();
            writeln!(f, "{}", cells.join("|"))?;
        }
        Ok(())
    }
}

/// Iterator over board tile values in row-major order.
pub struct TilesIter {
    board: Board,
    idx: usize,
}

impl Iterator for TilesIter {
    type Item = Tile;
    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.idx >= SIZE * SIZE {
            return None;
        }
        let v = self.board.tile_value(self.idx);
        self.idx += 1;
        Some(v)
    }
}

impl IntoIterator for Board {
    type Item = Tile;
    type IntoIter = TilesIter;
    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.tiles()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_parses_directions() {
        assert_eq!("left".parse::<Direction>(), Ok(Direction::Left));
        assert_eq!(" Up ".parse::<Direction>(), Ok(Direction::Up));
        assert_eq!("DOWN".parse::<Direction>(), Ok(Direction::Down));
        assert_eq!(
            "diagonal".parse::<Direction>(),
            Err(EngineError::InvalidDirection("diagonal".to_string()))
        );
    }

    #[test]
    fn it_converts_direction_codes() {
        assert_eq!(Direction::try_from(0u8), Ok(Direction::Up));
        assert_eq!(Direction::try_from(3u8), Ok(Direction::Right));
        assert!(matches!(
            Direction::try_from(4u8),
            Err(EngineError::InvalidDirection(_))
        ));
        for d in Direction::ALL {
            assert_eq!(d.to_string().parse::<Direction>(), Ok(d));
        }
    }

    #[test]
    fn it_rejects_malformed_tiles() {
        let err = Board::from_rows([[0; 4], [0, 0, 6, 0], [0; 4], [0; 4]]).unwrap_err();
        assert_eq!(
            err,
            EngineError::InvalidTile {
                row: 1,
                col: 2,
                value: 6
            }
        );
        assert!(Board::from_rows([[1, 0, 0, 0], [0; 4], [0; 4], [0; 4]]).is_err());
        assert!(Board::from_rows([[131072, 2, 4, 0], [0; 4], [0; 4], [0; 4]]).is_ok());
    }

    #[test]
    fn it_keeps_top_tiles_unmerged() {
        let b = Board::from_rows([[MAX_TILE, MAX_TILE, 0, 0], [0; 4], [0; 4], [0; 4]]).unwrap();
        assert_eq!(b.highest_tile(), 1 << 31);
        for d in Direction::ALL {
            let (after, gained) = b.shift(d);
            assert_eq!(gained, 0, "{d}");
            assert_eq!(after.tiles().filter(|&t| t == MAX_TILE).count(), 2, "{d}");
            assert!(after.tiles().all(|t| t == 0 || t == MAX_TILE), "{d}");
        }
    }

    #[test]
    #[should_panic]
    fn it_panics_past_the_last_index() {
        Board::EMPTY.tile_value(SIZE * SIZE);
    }

    #[test]
    fn it_indexes_row_major() {
        let b = Board::from_rows([
            [2, 4, 8, 16],
            [32, 64, 128, 256],
            [512, 1024, 2048, 4096],
            [0, 0, 0, 8192],
        ])
        .unwrap();
        assert_eq!(b.tile_value(3), 16);
        assert_eq!(b.tile_value(10), 2048);
        assert_eq!(b.get(3, 3), 8192);
        assert_eq!(b.tiles().count(), 16);
        assert_eq!(b.into_iter().filter(|&t| t == 0).count(), 3);
        assert!(b.is_won());
        assert!(!Board::EMPTY.is_won());
    }

    #[test]
    fn it_displays_grid() {
        let b = Board::from_rows([[2, 0, 0, 2048], [0; 4], [0; 4], [0; 4]]).unwrap();
        let text = b.to_string();
        let lines: Vec<&str> = text.lines().collect();
        // leading blank line, 4 rows, 3 separators
        assert_eq!(lines.len(), 8);
        assert_eq!(lines[1], "   2   |       |       | 2048  ");
    }
}
