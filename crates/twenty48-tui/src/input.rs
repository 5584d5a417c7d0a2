//! Maps terminal key events to engine intents. Unmapped keys map to nothing,
//! so no invalid `Direction` is ever built from raw input.

use std::collections::HashMap;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use twenty48_engine::engine::Direction;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Move(Direction),
    Quit,
}

/// Arrow keys plus configurable single-character bindings.
#[derive(Debug, Clone, Default)]
pub struct KeyMap {
    bindings: HashMap<char, Direction>,
}

impl KeyMap {
    pub fn new(bindings: impl IntoIterator<Item = (char, Direction)>) -> Self {
        Self {
            bindings: bindings
                .into_iter()
                .map(|(c, d)| (c.to_ascii_lowercase(), d))
                .collect(),
        }
    }

    pub fn intent(&self, key: KeyEvent) -> Option<Intent> {
        // Terminals with release reporting would otherwise move twice.
        if key.kind == KeyEventKind::Release {
            return None;
        }
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return matches!(key.code, KeyCode::Char('c')).then_some(Intent::Quit);
        }
        match key.code {
            KeyCode::Left => Some(Intent::Move(Direction::Left)),
            KeyCode::Right => Some(Intent::Move(Direction::Right)),
            KeyCode::Up => Some(Intent::Move(Direction::Up)),
            KeyCode::Down => Some(Intent::Move(Direction::Down)),
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => Some(Intent::Quit),
            KeyCode::Char(c) => self
                .bindings
                .get(&c.to_ascii_lowercase())
                .copied()
                .map(Intent::Move),
            _ => None,
        }
    }

    /// Short help text listing the bound characters per direction.
    pub fn hint(&self) -> String {
        let mut parts = vec!["arrows".to_string()];
        for d in [Direction::Left, Direction::Down, Direction::Up, Direction::Right] {
            let mut keys: Vec<char> = self
                .bindings
                .iter()
                .filter(|(_, bound)| **bound == d)
                .map(|(c, _)| *c)
                .collect();
            if keys.is_empty() {
                continue;
            }
            keys.sort_unstable();
            let keys: String = keys.into_iter().collect();
            parts.push(format!("{keys}={d}"));
        }
        format!("{} move, q quits", parts.join(" "))
    }
}
