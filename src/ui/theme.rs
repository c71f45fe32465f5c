//! Color theme and styling definitions using ratatui colors
//!
//! Themes are plain structs of ratatui colors and styles; no abstraction
//! layer beyond what the renderer needs.

use ratatui::style::{Color, Style};

/// Color theme for terminal UI elements
#[derive(Debug, Clone)]
pub struct ColorTheme {
    /// Idle directional button
    pub button: Style,

    /// Button for the direction currently being driven
    pub button_active: Style,

    /// Center cell showing the resolved command
    pub command_readout: Style,

    /// Status line background
    pub status_bg: Color,

    /// Status line text
    pub status_fg: Color,

    /// Help line at the bottom
    pub help_text: Color,

    /// Error/warning text
    pub error_text: Color,
}

impl Default for ColorTheme {
    fn default() -> Self {
        Self {
            button: Style::default().fg(Color::Gray),
            button_active: Style::default().fg(Color::Black).bg(Color::Green),
            command_readout: Style::default().fg(Color::Yellow),
            status_bg: Color::Blue,
            status_fg: Color::White,
            help_text: Color::DarkGray,
            error_text: Color::Red,
        }
    }
}

impl ColorTheme {
    /// Create a monochrome theme for terminals without color support
    pub fn monochrome() -> Self {
        Self {
            button: Style::default().fg(Color::White),
            button_active: Style::default().fg(Color::Black).bg(Color::White),
            command_readout: Style::default().fg(Color::White),
            status_bg: Color::Black,
            status_fg: Color::White,
            help_text: Color::White,
            error_text: Color::White,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_theme() {
        let theme = ColorTheme::default();
        assert_eq!(theme.status_fg, Color::White);
        assert_eq!(theme.status_bg, Color::Blue);
        assert_eq!(theme.button_active.bg, Some(Color::Green));
    }

    #[test]
    fn test_monochrome_theme() {
        let theme = ColorTheme::monochrome();
        assert_eq!(theme.status_bg, Color::Black);
        assert_eq!(theme.button_active.fg, Some(Color::Black));
        assert_eq!(theme.button_active.bg, Some(Color::White));
    }
}
