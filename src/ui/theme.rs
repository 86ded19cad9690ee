//! Color theme definitions

use ratatui::style::{Color, Modifier, Style};

use crate::models::ThreatLevel;

/// Application color theme
#[derive(Debug, Clone)]
pub struct Theme {
    // Base colors
    pub bg: Color,
    pub fg: Color,
    pub fg_dim: Color,
    pub fg_bright: Color,

    // Accent colors
    pub accent: Color,

    // Status colors
    pub success: Color,
    pub warning: Color,
    pub error: Color,

    // Threat levels
    pub threat_high: Color,
    pub threat_medium: Color,
    pub threat_low: Color,

    // UI elements
    pub border: Color,
    pub border_focused: Color,
    pub selection: Color,
    pub marked: Color,
    pub favorite: Color,

    // Tab colors
    pub tab_active: Color,
    pub tab_inactive: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            bg: Color::Reset,
            fg: Color::White,
            fg_dim: Color::DarkGray,
            fg_bright: Color::White,

            accent: Color::Cyan,

            success: Color::Green,
            warning: Color::Yellow,
            error: Color::Red,

            threat_high: Color::Red,
            threat_medium: Color::Yellow,
            threat_low: Color::Green,

            border: Color::DarkGray,
            border_focused: Color::Cyan,
            selection: Color::Blue,
            marked: Color::Magenta,
            favorite: Color::Yellow,

            tab_active: Color::Cyan,
            tab_inactive: Color::DarkGray,
        }
    }
}

impl Theme {
    /// Dark theme variant
    pub fn dark() -> Self {
        Self::default()
    }

    /// Light theme variant
    pub fn light() -> Self {
        Self {
            bg: Color::White,
            fg: Color::Black,
            fg_dim: Color::DarkGray,
            fg_bright: Color::Black,
            accent: Color::Blue,
            success: Color::Green,
            warning: Color::Rgb(176, 120, 0),
            error: Color::Red,
            threat_high: Color::Red,
            threat_medium: Color::Rgb(176, 120, 0),
            threat_low: Color::Green,
            border: Color::Gray,
            border_focused: Color::Blue,
            selection: Color::LightBlue,
            marked: Color::Magenta,
            favorite: Color::Rgb(176, 120, 0),
            tab_active: Color::Blue,
            tab_inactive: Color::Gray,
        }
    }

    /// Theme by settings name; unknown names fall back to dark
    pub fn from_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "light" => Self::light(),
            "dark" => Self::dark(),
            other => {
                tracing::warn!(theme = other, "Unknown theme, using dark");
                Self::dark()
            }
        }
    }

    // Style helpers
    pub fn normal(&self) -> Style {
        Style::default().fg(self.fg).bg(self.bg)
    }

    pub fn dim(&self) -> Style {
        Style::default().fg(self.fg_dim)
    }

    pub fn accent(&self) -> Style {
        Style::default().fg(self.accent)
    }

    pub fn success(&self) -> Style {
        Style::default().fg(self.success)
    }

    pub fn warning(&self) -> Style {
        Style::default().fg(self.warning)
    }

    pub fn error(&self) -> Style {
        Style::default().fg(self.error)
    }

    pub fn selected(&self) -> Style {
        Style::default().bg(self.selection).fg(self.fg_bright)
    }

    /// Rows marked with the multi-select key
    pub fn marked(&self) -> Style {
        Style::default().fg(self.marked).add_modifier(Modifier::BOLD)
    }

    pub fn favorite(&self) -> Style {
        Style::default().fg(self.favorite)
    }

    pub fn border(&self) -> Style {
        Style::default().fg(self.border)
    }

    pub fn border_focused(&self) -> Style {
        Style::default().fg(self.border_focused)
    }

    pub fn header(&self) -> Style {
        self.accent().add_modifier(Modifier::BOLD)
    }

    pub fn tab_active(&self) -> Style {
        Style::default().fg(self.tab_active).add_modifier(Modifier::BOLD)
    }

    pub fn tab_inactive(&self) -> Style {
        Style::default().fg(self.tab_inactive)
    }

    pub fn threat_style(&self, level: ThreatLevel) -> Style {
        match level {
            ThreatLevel::High => Style::default().fg(self.threat_high).add_modifier(Modifier::BOLD),
            ThreatLevel::Medium => Style::default().fg(self.threat_medium),
            ThreatLevel::Low => Style::default().fg(self.threat_low),
        }
    }

    /// Style for the disposition column: blocked, alerted, passed
    pub fn action_style(&self, action: &str) -> Style {
        match action {
            "阻断" => Style::default().fg(self.success),
            "告警" => Style::default().fg(self.warning),
            "放行" => Style::default().fg(self.error),
            _ => self.normal(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_names_resolve() {
        assert_eq!(Theme::from_name("LIGHT").bg, Color::White);
        assert_eq!(Theme::from_name("neon").bg, Color::Reset);
    }
}
