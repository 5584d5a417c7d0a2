//! Draws the score, the 4x4 grid and a status line with queued crossterm
//! commands, flushed once per frame.

use std::io::{self, Write};

use crossterm::{
    cursor::MoveTo,
    queue,
    style::{Attribute, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor},
    terminal::{Clear, ClearType},
};
use twenty48_engine::engine::{Board, SIZE, Score, Tile};

use crate::palette;

const CELL_W: u16 = 8;
const CELL_H: u16 = 3;
const GAP: u16 = 1;
const ORIGIN_X: u16 = 2;
const ORIGIN_Y: u16 = 2;

/// Everything a frame shows besides the board itself.
pub struct Frame<'a> {
    pub score: Score,
    pub status: Option<&'a str>,
    pub hint: &'a str,
}

pub fn draw<W: Write>(out: &mut W, board: Board, frame: &Frame<'_>) -> io::Result<()> {
    let grid = SIZE as u16;
    let width = grid * (CELL_W + GAP) + GAP;
    let height = grid * (CELL_H + GAP) + GAP;

    queue!(
        out,
        ResetColor,
        Clear(ClearType::All),
        MoveTo(ORIGIN_X, 0),
        SetAttribute(Attribute::Bold),
        Print(format!("Score: {}", frame.score)),
        SetAttribute(Attribute::Reset),
    )?;

    queue!(out, SetBackgroundColor(palette::BOARD))?;
    for dy in 0..height {
        queue!(
            out,
            MoveTo(ORIGIN_X, ORIGIN_Y + dy),
            Print(" ".repeat(width as usize))
        )?;
    }
    for (r, row) in board.rows().iter().enumerate() {
        for (c, &value) in row.iter().enumerate() {
            draw_tile(out, r as u16, c as u16, value)?;
        }
    }
    queue!(out, ResetColor)?;

    let below = ORIGIN_Y + height + 1;
    if let Some(status) = frame.status {
        queue!(
            out,
            MoveTo(ORIGIN_X, below),
            SetAttribute(Attribute::Bold),
            Print(status),
            SetAttribute(Attribute::Reset),
        )?;
    }
    queue!(out, MoveTo(ORIGIN_X, below + 1), Print(frame.hint))?;
    out.flush()
}

fn draw_tile<W: Write>(out: &mut W, row: u16, col: u16, value: Tile) -> io::Result<()> {
    let x = ORIGIN_X + GAP + col * (CELL_W + GAP);
    let y = ORIGIN_Y + GAP + row * (CELL_H + GAP);
    let label = palette::label(value);
    queue!(
        out,
        SetBackgroundColor(palette::background(value)),
        SetForegroundColor(palette::foreground(value)),
        SetAttribute(Attribute::Bold),
    )?;
    for dy in 0..CELL_H {
        let text = if dy == CELL_H / 2 {
            format!("{:^width$}", label, width = CELL_W as usize)
        } else {
            " ".repeat(CELL_W as usize)
        };
        queue!(out, MoveTo(x, y + dy), Print(text))?;
    }
    queue!(out, SetAttribute(Attribute::Reset))
}
