//! Input event handling

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::Duration;

/// Application input events
#[derive(Debug, Clone)]
pub enum AppEvent {
    Key(KeyEvent),
    Tick,
    Resize(u16, u16),
}

/// Event handler for terminal input
pub struct EventHandler {
    tick_rate: Duration,
}

impl EventHandler {
    pub fn new(tick_rate: Duration) -> Self {
        Self { tick_rate }
    }

    /// Poll for the next event
    pub fn next(&self) -> Option<AppEvent> {
        if event::poll(self.tick_rate).ok()? {
            match event::read().ok()? {
                Event::Key(key) if key.kind != KeyEventKind::Release => Some(AppEvent::Key(key)),
                Event::Resize(w, h) => Some(AppEvent::Resize(w, h)),
                _ => None,
            }
        } else {
            Some(AppEvent::Tick)
        }
    }
}

/// Line-editing operation carried by a key press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditKey {
    Insert(char),
    Backspace,
    Delete,
    Left,
    Right,
    Home,
    End,
}

/// Map a key to a line-editing operation, if it is one
pub fn edit_key(event: &KeyEvent) -> Option<EditKey> {
    if event.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) {
        return None;
    }

    match event.code {
        KeyCode::Char(c) => Some(EditKey::Insert(c)),
        KeyCode::Backspace => Some(EditKey::Backspace),
        KeyCode::Delete => Some(EditKey::Delete),
        KeyCode::Left => Some(EditKey::Left),
        KeyCode::Right => Some(EditKey::Right),
        KeyCode::Home => Some(EditKey::Home),
        KeyCode::End => Some(EditKey::End),
        _ => None,
    }
}

/// Check if this is a quit key combination
pub fn is_quit(event: &KeyEvent) -> bool {
    matches!(
        (event.code, event.modifiers),
        (KeyCode::Char('q'), KeyModifiers::NONE)
            | (KeyCode::Char('c'), KeyModifiers::CONTROL)
    )
}

/// Row movement within the visible page (returns delta)
pub fn navigation_delta(event: &KeyEvent) -> Option<i32> {
    match (event.code, event.modifiers) {
        (KeyCode::Up, KeyModifiers::NONE) => Some(-1),
        (KeyCode::Down, KeyModifiers::NONE) => Some(1),
        (KeyCode::Home, KeyModifiers::NONE) => Some(i32::MIN),
        (KeyCode::End, KeyModifiers::NONE) => Some(i32::MAX),

        (KeyCode::Char('k'), KeyModifiers::NONE) => Some(-1),
        (KeyCode::Char('j'), KeyModifiers::NONE) => Some(1),
        (KeyCode::Char('g'), KeyModifiers::NONE) => Some(i32::MIN),
        (KeyCode::Char('G'), KeyModifiers::SHIFT) => Some(i32::MAX),

        _ => None,
    }
}

/// Apply a navigation delta to a row index over `len` rows
pub fn step_index(current: usize, delta: i32, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    match delta {
        i32::MIN => 0,
        i32::MAX => len - 1,
        d => (current as i64 + d as i64).clamp(0, len as i64 - 1) as usize,
    }
}

/// Check for tab navigation (returns delta)
pub fn tab_delta(event: &KeyEvent) -> Option<i32> {
    match (event.code, event.modifiers) {
        (KeyCode::Tab, KeyModifiers::NONE) => Some(1),
        (KeyCode::BackTab, _) => Some(-1),
        _ => None,
    }
}

/// Check for tab number keys (`1` selects the first of `count` tabs)
pub fn tab_number(event: &KeyEvent, count: usize) -> Option<usize> {
    match event.code {
        KeyCode::Char(c) => c
            .to_digit(10)
            .map(|d| d as usize)
            .filter(|d| (1..=count).contains(d))
            .map(|d| d - 1),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn tab_numbers_are_bounded() {
        assert_eq!(tab_number(&key(KeyCode::Char('1')), 5), Some(0));
        assert_eq!(tab_number(&key(KeyCode::Char('5')), 5), Some(4));
        assert_eq!(tab_number(&key(KeyCode::Char('6')), 5), None);
        assert_eq!(tab_number(&key(KeyCode::Char('0')), 5), None);
    }

    #[test]
    fn step_index_clamps() {
        assert_eq!(step_index(0, -1, 10), 0);
        assert_eq!(step_index(8, 5, 10), 9);
        assert_eq!(step_index(4, i32::MAX, 10), 9);
        assert_eq!(step_index(4, i32::MIN, 10), 0);
        assert_eq!(step_index(3, 1, 0), 0);
    }

    #[test]
    fn control_chords_are_not_text() {
        let ctrl_r = KeyEvent::new(KeyCode::Char('r'), KeyModifiers::CONTROL);
        assert_eq!(edit_key(&ctrl_r), None);
        assert_eq!(edit_key(&key(KeyCode::Char('中'))), Some(EditKey::Insert('中')));
    }
}
