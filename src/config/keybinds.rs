//! Keyboard shortcut definitions

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Keyboard shortcuts of the log tables
#[derive(Debug, Clone)]
pub struct KeyBindings {
    // Global
    pub quit: KeyBind,
    pub help: KeyBind,
    pub refresh: KeyBind,

    // Paging
    pub next_page: KeyBind,
    pub prev_page: KeyBind,
    pub cycle_page_size: KeyBind,

    // Filtering
    pub search: KeyBind,
    pub filter_form: KeyBind,
    pub reset_filter: KeyBind,
    pub save_preset: KeyBind,
    pub presets: KeyBind,

    // Rows
    pub details: KeyBind,
    pub select_row: KeyBind,
    pub favorite: KeyBind,
    pub delete: KeyBind,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            quit: KeyBind::new(KeyCode::Char('q'), KeyModifiers::NONE),
            help: KeyBind::new(KeyCode::Char('?'), KeyModifiers::NONE),
            refresh: KeyBind::new(KeyCode::F(5), KeyModifiers::NONE),

            next_page: KeyBind::new(KeyCode::Char(']'), KeyModifiers::NONE),
            prev_page: KeyBind::new(KeyCode::Char('['), KeyModifiers::NONE),
            cycle_page_size: KeyBind::new(KeyCode::Char('z'), KeyModifiers::NONE),

            search: KeyBind::new(KeyCode::Char('/'), KeyModifiers::NONE),
            filter_form: KeyBind::new(KeyCode::Char('f'), KeyModifiers::NONE),
            reset_filter: KeyBind::new(KeyCode::Char('r'), KeyModifiers::NONE),
            save_preset: KeyBind::new(KeyCode::Char('s'), KeyModifiers::NONE),
            presets: KeyBind::new(KeyCode::Char('p'), KeyModifiers::NONE),

            details: KeyBind::new(KeyCode::Enter, KeyModifiers::NONE),
            select_row: KeyBind::new(KeyCode::Char(' '), KeyModifiers::NONE),
            favorite: KeyBind::new(KeyCode::Char('*'), KeyModifiers::NONE),
            delete: KeyBind::new(KeyCode::Delete, KeyModifiers::NONE),
        }
    }
}

/// A single key binding
#[derive(Debug, Clone)]
pub struct KeyBind {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyBind {
    pub fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    pub fn matches(&self, code: KeyCode, modifiers: KeyModifiers) -> bool {
        self.code == code && self.modifiers == modifiers
    }

    /// Match a key event. Shift is ignored for printable characters since
    /// terminals report it inconsistently for symbols like `*` and `?`.
    pub fn is(&self, key: &KeyEvent) -> bool {
        match key.code {
            KeyCode::Char(_) => {
                self.code == key.code && key.modifiers.difference(KeyModifiers::SHIFT) == self.modifiers
            }
            _ => self.matches(key.code, key.modifiers),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shifted_symbols_still_match() {
        let keys = KeyBindings::default();
        let star = KeyEvent::new(KeyCode::Char('*'), KeyModifiers::SHIFT);
        assert!(keys.favorite.is(&star));

        let ctrl_f = KeyEvent::new(KeyCode::Char('f'), KeyModifiers::CONTROL);
        assert!(!keys.filter_form.is(&ctrl_f));
    }
}
