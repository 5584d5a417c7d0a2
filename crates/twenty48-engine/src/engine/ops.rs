use rand::Rng;

use super::state::{Board, Direction, MAX_TILE, SIZE, Score, Tile};
use super::transform::Transform;

/// Slide/merge tiles in the given direction, returning the new board and the
/// points earned by its merges. No randomness.
///
/// Every direction is reduced to a left shift: the board is remapped so the
/// requested direction points left, each row is compacted, and the remap is
/// undone.
pub fn shift(board: Board, direction: Direction) -> (Board, Score) {
    let transform = Transform::for_direction(direction);
    let mut rows = transform.apply(board).0;
    let mut score = 0;
    for row in rows.iter_mut() {
        let (shifted, gained) = shift_line_left(*row);
        *row = shifted;
        score += gained;
    }
    (transform.invert(Board(rows)), score)
}

/// Compact a single row towards index 0 and merge equal neighbours once.
///
/// Merges resolve left to right and every source tile is consumed at most
/// once, so `[2, 2, 2, 2]` becomes `[4, 4, 0, 0]` and never `[8, 0, 0, 0]`.
pub(crate) fn shift_line_left(line: [Tile; SIZE]) -> ([Tile; SIZE], Score) {
    let tiles = compact(line);
    let mut out = [0; SIZE];
    let mut score = 0;
    let mut src = 0;
    let mut dst = 0;
    while src < tiles.len() {
        if src + 1 < tiles.len() && can_merge(tiles[src], tiles[src + 1]) {
            let merged = tiles[src] * 2;
            out[dst] = merged;
            score += Score::from(merged);
            src += 2;
        } else {
            out[dst] = tiles[src];
            src += 1;
        }
        dst += 1;
    }
    (out, score)
}

/// Equal tiles merge unless the doubled value would overflow a `Tile`.
fn can_merge(a: Tile, b: Tile) -> bool {
    a == b && a < MAX_TILE
}

fn compact(line: [Tile; SIZE]) -> Vec<Tile> {
    line.into_iter().filter(|&t| t != 0).collect()
}

/// True if the board is full and no two horizontally or vertically adjacent
/// cells hold the same value.
pub fn is_game_over(board: Board) -> bool {
    count_empty(board) == 0 && !has_mergeable_pair(board)
}

fn has_mergeable_pair(board: Board) -> bool {
    let rows = board.0;
    (0..SIZE).any(|r| {
        (0..SIZE).any(|c| {
            let v = rows[r][c];
            (r + 1 < SIZE && can_merge(rows[r + 1][c], v))
                || (c + 1 < SIZE && can_merge(rows[r][c + 1], v))
        })
    })
}

/// Count the number of zero tiles.
pub fn count_empty(board: Board) -> usize {
    board.tiles().filter(|&t| t == 0).count()
}

/// Coordinates of every empty cell, row-major.
pub(crate) fn empty_cells(board: Board) -> Vec<(usize, usize)> {
    (0..SIZE)
        .flat_map(|r| (0..SIZE).map(move |c| (r, c)))
        .filter(|&(r, c)| board.0[r][c] == 0)
        .collect()
}

/// Place a random tile into a uniformly chosen empty cell. Returns the board
/// unchanged when there is no empty cell.
pub fn spawn_tile<R: Rng + ?Sized>(board: Board, rng: &mut R) -> Board {
    let empty = empty_cells(board);
    if empty.is_empty() {
        return board;
    }
    let (row, col) = empty[rng.gen_range(0..empty.len())];
    let mut rows = board.0;
    rows[row][col] = generate_random_tile(rng);
    Board(rows)
}

/// 2 with probability 3/4, 4 with probability 1/4.
pub(crate) fn generate_random_tile<R: Rng + ?Sized>(rng: &mut R) -> Tile {
    if rng.gen_range(0..4) < 3 { 2 } else { 4 }
}

pub fn get_highest_tile_val(board: Board) -> Tile {
    board.tiles().max().unwrap_or(0)
}

/// One 7-wide cell of the text grid; blank for an empty cell.
pub(crate) fn format_val(val: &Tile) -> String {
    match val {
        0 => " ".repeat(7),
        x => format!("{x:^7}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn board(rows: [[Tile; SIZE]; SIZE]) -> Board {
        Board::from_rows(rows).unwrap()
    }

    #[test]
    fn it_shift_line_left() {
        assert_eq!(shift_line_left([0, 0, 0, 0]), ([0, 0, 0, 0], 0));
        assert_eq!(shift_line_left([2, 4, 2, 4]), ([2, 4, 2, 4], 0));
        assert_eq!(shift_line_left([2, 2, 4, 4]), ([4, 8, 0, 0], 12));
        assert_eq!(shift_line_left([2, 0, 0, 2]), ([4, 0, 0, 0], 4));
        assert_eq!(shift_line_left([0, 0, 0, 2]), ([2, 0, 0, 0], 0));
        assert_eq!(shift_line_left([4, 0, 4, 8]), ([8, 8, 0, 0], 8));
    }

    #[test]
    fn it_merges_in_a_single_pass() {
        assert_eq!(shift_line_left([2, 2, 2, 2]), ([4, 4, 0, 0], 8));
        assert_eq!(shift_line_left([2, 2, 2, 0]), ([4, 2, 0, 0], 4));
        assert_eq!(shift_line_left([4, 2, 2, 0]), ([4, 4, 0, 0], 4));
        assert_eq!(shift_line_left([8, 4, 4, 0]), ([8, 8, 0, 0], 8));
    }

    #[test]
    fn it_stops_merging_at_the_top_tile() {
        let half = MAX_TILE / 2;
        assert_eq!(
            shift_line_left([half, half, MAX_TILE, MAX_TILE]),
            ([MAX_TILE, MAX_TILE, MAX_TILE, 0], Score::from(MAX_TILE))
        );
        assert_eq!(
            shift_line_left([MAX_TILE, 0, MAX_TILE, 0]),
            ([MAX_TILE, MAX_TILE, 0, 0], 0)
        );
        // full, and the only equal pair is already at the top
        let game = board([[MAX_TILE, MAX_TILE, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 4, 2]]);
        assert!(is_game_over(game));
    }

    #[test]
    fn it_formats_cells() {
        assert_eq!(format_val(&0), "       ");
        assert_eq!(format_val(&2), "   2   ");
        assert_eq!(format_val(&128), "  128  ");
        assert_eq!(format_val(&MAX_TILE), "2147483648");
    }

    #[test]
    fn test_shift_left() {
        let game = board([[2, 4, 8, 16], [2, 8, 8, 4], [4, 0, 0, 4], [2, 0, 0, 4]]);
        let (game, score) = shift(game, Direction::Left);
        assert_eq!(
            game,
            board([[2, 4, 8, 16], [2, 16, 4, 0], [8, 0, 0, 0], [2, 4, 0, 0]])
        );
        assert_eq!(score, 24);
    }

    #[test]
    fn test_shift_right() {
        let game = board([[2, 4, 8, 16], [2, 8, 8, 4], [4, 0, 0, 4], [2, 0, 0, 4]]);
        let (game, score) = shift(game, Direction::Right);
        assert_eq!(
            game,
            board([[2, 4, 8, 16], [0, 2, 16, 4], [0, 0, 0, 8], [0, 0, 2, 4]])
        );
        assert_eq!(score, 24);
        // merges resolve from the destination edge
        let (after, _) = shift(board([[0, 2, 2, 2], [0; 4], [0; 4], [0; 4]]), Direction::Right);
        assert_eq!(after.rows()[0], [0, 0, 2, 4]);
    }

    #[test]
    fn test_shift_up() {
        let game = board([[2, 2, 4, 2], [4, 8, 0, 0], [8, 8, 0, 0], [16, 4, 4, 4]]);
        let (game, score) = shift(game, Direction::Up);
        assert_eq!(
            game,
            board([[2, 2, 8, 2], [4, 16, 0, 4], [8, 4, 0, 0], [16, 0, 0, 0]])
        );
        assert_eq!(score, 24);
    }

    #[test]
    fn test_shift_down() {
        let game = board([[2, 2, 4, 2], [4, 8, 0, 0], [8, 8, 0, 0], [16, 4, 4, 4]]);
        let (game, score) = shift(game, Direction::Down);
        assert_eq!(
            game,
            board([[2, 0, 0, 0], [4, 2, 0, 0], [8, 16, 0, 2], [16, 4, 8, 4]])
        );
        assert_eq!(score, 24);
    }

    #[test]
    fn it_detects_game_over_on_checkerboard() {
        let game = board([[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 4, 2]]);
        assert!(is_game_over(game));
        for d in Direction::ALL {
            assert_eq!(shift(game, d), (game, 0));
        }
    }

    #[test]
    fn it_is_not_over_with_an_adjacent_pair() {
        // full, but one vertical pair of 8s
        let game = board([[2, 4, 2, 4], [4, 8, 4, 2], [2, 8, 2, 4], [4, 2, 4, 2]]);
        assert_eq!(count_empty(game), 0);
        assert!(!is_game_over(game));
        // full, one horizontal pair in the last row
        let game = board([[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 16, 16]]);
        assert!(!is_game_over(game));
        // a single hole keeps the game alive
        let game = board([[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 0, 4], [4, 2, 4, 2]]);
        assert!(!is_game_over(game));
    }

    #[test]
    fn it_count_empty() {
        let game = board([[2, 2, 2, 2], [0; 4], [2, 2, 2, 2], [0; 4]]);
        assert_eq!(count_empty(game), 8);
        assert_eq!(count_empty(Board::EMPTY), 16);
        let holes = board([[0, 2, 2, 2], [2; 4], [2; 4], [2, 2, 2, 0]]);
        assert_eq!(empty_cells(holes), vec![(0, 0), (3, 3)]);
    }

    #[test]
    fn it_spawns_only_into_empty_cells() {
        let mut rng = StdRng::seed_from_u64(7);
        let full = board([[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 4, 2]]);
        assert_eq!(spawn_tile(full, &mut rng), full);

        let one_hole = board([[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 0, 4], [4, 2, 4, 2]]);
        let filled = spawn_tile(one_hole, &mut rng);
        assert_eq!(count_empty(filled), 0);
        assert!(matches!(filled.get(2, 2), 2 | 4));

        let mut game = Board::EMPTY;
        for _ in 0..16 {
            game = spawn_tile(game, &mut rng);
        }
        assert_eq!(count_empty(game), 0);
    }

    #[test]
    fn it_get_highest_tile_val() {
        assert_eq!(get_highest_tile_val(Board::EMPTY), 0);
        let game = board([[2, 0, 0, 0], [0, 1024, 0, 0], [0; 4], [0, 0, 0, 64]]);
        assert_eq!(get_highest_tile_val(game), 1024);
    }
}
