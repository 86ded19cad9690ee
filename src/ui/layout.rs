//! Screen layout management

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Standard application layout areas
pub struct AppLayout {
    pub tabs: Rect,
    pub content: Rect,
    pub status: Rect,
}

impl AppLayout {
    /// Create layout from terminal area
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Tabs
                Constraint::Min(10),   // Content
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        Self {
            tabs: chunks[0],
            content: chunks[1],
            status: chunks[2],
        }
    }
}

/// Log table with an optional search bar above and a pager line below
pub struct ListLayout {
    pub search: Rect,
    pub criteria: Rect,
    pub table: Rect,
    pub footer: Rect,
}

impl ListLayout {
    pub fn new(area: Rect, show_search: bool) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(if show_search { 3 } else { 0 }), // Search bar
                Constraint::Length(1),                                // Active criteria
                Constraint::Min(5),                                   // Table
                Constraint::Length(1),                                // Pager
            ])
            .split(area);

        Self {
            search: chunks[0],
            criteria: chunks[1],
            table: chunks[2],
            footer: chunks[3],
        }
    }
}

/// Dialog/popup centered layout
pub struct DialogLayout {
    pub dialog: Rect,
}

impl DialogLayout {
    /// Create centered dialog with fixed dimensions
    pub fn centered(area: Rect, width: u16, height: u16) -> Self {
        let x = area.x + (area.width.saturating_sub(width)) / 2;
        let y = area.y + (area.height.saturating_sub(height)) / 2;

        Self {
            dialog: Rect::new(x, y, width.min(area.width), height.min(area.height)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_dialog_fits_small_screens() {
        let area = Rect::new(0, 0, 40, 10);
        let dialog = DialogLayout::centered(area, 60, 20).dialog;
        assert_eq!(dialog, Rect::new(0, 0, 40, 10));
    }

    #[test]
    fn hidden_search_bar_takes_no_rows() {
        let layout = ListLayout::new(Rect::new(0, 0, 80, 24), false);
        assert_eq!(layout.search.height, 0);
        assert_eq!(layout.footer.y, 23);
        assert_eq!(layout.table.height, 22);
    }
}
