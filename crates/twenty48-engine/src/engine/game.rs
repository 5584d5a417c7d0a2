use log::debug;
use rand::Rng;

use super::state::{Board, Direction, Score};

/// Derived from the board on demand; never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Over,
}

/// What the front end needs after every move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOutcome {
    pub board: Board,
    pub score: Score,
    /// True iff any cell differs from the pre-move board.
    pub changed: bool,
    pub game_over: bool,
}

/// A single game: the board, its running score, and the RNG that drives
/// tile spawns.
///
/// All mutation goes through `&mut self`, so a move (shift, score, spawn and
/// termination check) is applied as one unit.
#[derive(Debug, Clone)]
pub struct Game<R> {
    board: Board,
    score: Score,
    rng: R,
}

impl<R: Rng> Game<R> {
    /// Start a game: empty board, zero score, two spawned tiles.
    ///
    /// ```
    /// use twenty48_engine::engine::Game;
    /// use rand::{SeedableRng, rngs::StdRng};
    /// let game = Game::new(StdRng::seed_from_u64(1));
    /// assert_eq!(game.board().count_empty(), 14);
    /// assert_eq!(game.score(), 0);
    /// ```
    pub fn new(rng: R) -> Self {
        let mut game = Game {
            board: Board::EMPTY,
            score: 0,
            rng,
        };
        game.initialize();
        game
    }

    /// Resume from an existing board with a zero score. Nothing is spawned.
    pub fn with_board(board: Board, rng: R) -> Self {
        Game {
            board,
            score: 0,
            rng,
        }
    }

    /// Clear the board and score, then spawn the two opening tiles.
    pub fn initialize(&mut self) -> (Board, Score) {
        self.board = Board::EMPTY;
        self.score = 0;
        self.spawn_tile();
        self.spawn_tile();
        (self.board, self.score)
    }

    /// Place one random tile. A no-op on a full board.
    pub fn spawn_tile(&mut self) {
        self.board = self.board.with_random_tile(&mut self.rng);
    }

    /// Slide in `direction`; when the board changes, add the merge points and
    /// spawn a tile. Once the game is over this returns `changed == false`
    /// and leaves everything untouched.
    ///
    /// ```
    /// use twenty48_engine::engine::{Board, Direction, Game};
    /// use rand::{SeedableRng, rngs::StdRng};
    /// let board = Board::from_rows([[2, 2, 0, 0], [0; 4], [0; 4], [0; 4]]).unwrap();
    /// let mut game = Game::with_board(board, StdRng::seed_from_u64(9));
    /// let outcome = game.apply_move(Direction::Left);
    /// assert!(outcome.changed);
    /// assert_eq!(outcome.score, 4);
    /// assert_eq!(outcome.board.get(0, 0), 4);
    /// ```
    pub fn apply_move(&mut self, direction: Direction) -> MoveOutcome {
        if self.status() == GameStatus::Over {
            return self.outcome(false, true);
        }
        let (shifted, gained) = self.board.shift(direction);
        let changed = shifted != self.board;
        if changed {
            self.board = shifted;
            self.score += gained;
            self.spawn_tile();
        }
        let game_over = self.board.is_game_over();
        debug!(
            "move {direction}: changed={changed} gained={gained} score={} over={game_over}",
            self.score
        );
        self.outcome(changed, game_over)
    }

    fn outcome(&self, changed: bool, game_over: bool) -> MoveOutcome {
        MoveOutcome {
            board: self.board,
            score: self.score,
            changed,
            game_over,
        }
    }
}

impl<R> Game<R> {
    pub fn board(&self) -> Board {
        self.board
    }

    pub fn score(&self) -> Score {
        self.score
    }

    pub fn status(&self) -> GameStatus {
        if self.board.is_game_over() {
            GameStatus::Over
        } else {
            GameStatus::InProgress
        }
    }

    pub fn is_over(&self) -> bool {
        self.status() == GameStatus::Over
    }
}
