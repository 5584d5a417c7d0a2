use std::io::Write;

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use log::info;
use rand::Rng;
use twenty48_engine::engine::{Board, Game, Score, WINNING_TILE};

use crate::input::{Intent, KeyMap};
use crate::render::{self, Frame};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Owns the game and the key map; one key press is one synchronous step.
pub struct App<R> {
    game: Game<R>,
    keys: KeyMap,
    hint: String,
}

impl<R: Rng> App<R> {
    pub fn new(game: Game<R>, keys: KeyMap) -> Self {
        let hint = keys.hint();
        Self { game, keys, hint }
    }

    pub fn board(&self) -> Board {
        self.game.board()
    }

    pub fn score(&self) -> Score {
        self.game.score()
    }

    /// Apply one key press. After game over, moves are no longer accepted and
    /// the next press exits.
    pub fn handle_key(&mut self, key: KeyEvent) -> Flow {
        if self.game.is_over() {
            return if key.kind == KeyEventKind::Release {
                Flow::Continue
            } else {
                Flow::Exit
            };
        }
        match self.keys.intent(key) {
            Some(Intent::Quit) => {
                info!("quit with score {}", self.game.score());
                Flow::Exit
            }
            Some(Intent::Move(direction)) => {
                let outcome = self.game.apply_move(direction);
                if outcome.game_over {
                    info!(
                        "game over: final score {}, highest tile {}",
                        outcome.score,
                        outcome.board.highest_tile()
                    );
                }
                Flow::Continue
            }
            None => Flow::Continue,
        }
    }

    pub fn status(&self) -> Option<String> {
        if self.game.is_over() {
            Some(format!(
                "Game Over! Final Score: {}. Press any key to exit.",
                self.game.score()
            ))
        } else if self.game.board().is_won() {
            Some(format!("Reached {WINNING_TILE}! Keep going."))
        } else {
            None
        }
    }

    pub fn draw<W: Write>(&self, out: &mut W) -> Result<()> {
        let status = self.status();
        let frame = Frame {
            score: self.game.score(),
            status: status.as_deref(),
            hint: &self.hint,
        };
        render::draw(out, self.game.board(), &frame).context("failed to draw board")
    }

    /// Blocking event loop: read a key, apply it, redraw.
    pub fn run<W: Write>(&mut self, out: &mut W) -> Result<()> {
        self.draw(out)?;
        loop {
            match event::read().context("failed to read terminal event")? {
                Event::Key(key) => {
                    if self.handle_key(key) == Flow::Exit {
                        return Ok(());
                    }
                    self.draw(out)?;
                }
                Event::Resize(..) => self.draw(out)?,
                _ => {}
            }
        }
    }
}
