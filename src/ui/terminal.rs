//! Terminal UI implementation using ratatui
//!
//! Draws the directional pad, the link status line, and the help line. Also
//! owns terminal mode setup: raw mode, alternate screen, mouse capture, and
//! the keyboard enhancement flags that make key-release events observable.

use crate::bridge::Command;
use crate::error::Result;
use crate::ui::state::{pad_button_rects, pad_readout_rect};
use crate::ui::{ColorTheme, UIRenderer, ViewState};
use ratatui::crossterm::{
    event::{
        DisableMouseCapture, EnableMouseCapture, KeyboardEnhancementFlags,
        PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Alignment, Rect},
    style::Style,
    widgets::{Block, Borders, Paragraph},
    Frame, Terminal,
};
use std::io::{self, Stdout};

type CrosstermTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Terminal UI with ratatui backend.
pub struct TerminalUI {
    terminal: Option<CrosstermTerminal>,
    theme: ColorTheme,
}

impl TerminalUI {
    pub fn new() -> Result<Self> {
        Ok(Self {
            terminal: None,
            theme: ColorTheme::default(),
        })
    }

    /// Create terminal UI with custom theme
    pub fn with_theme(theme: ColorTheme) -> Result<Self> {
        Ok(Self {
            terminal: None,
            theme,
        })
    }

    fn button_label(cmd: Command) -> &'static str {
        match cmd {
            Command::Forward => "forward",
            Command::Backward => "backward",
            Command::TurnLeft => "turn left",
            Command::TurnRight => "turn right",
            Command::Stop => "stop",
        }
    }

    fn render_status(frame: &mut Frame, area: Rect, view_state: &ViewState, theme: &ColorTheme) {
        let (status_text, status_style) = match &view_state.last_error {
            Some(error) => (
                format!(
                    " rovctl | {} | link: {} | {} ",
                    view_state.endpoint,
                    view_state.link_state.label(),
                    error
                ),
                Style::default().bg(theme.status_bg).fg(theme.error_text),
            ),
            None => (
                format!(
                    " rovctl | {} | link: {} | last sent: {} ",
                    view_state.endpoint,
                    view_state.link_state.label(),
                    view_state
                        .last_sent
                        .map(Command::as_str)
                        .unwrap_or("-")
                ),
                Style::default().bg(theme.status_bg).fg(theme.status_fg),
            ),
        };
        frame.render_widget(Paragraph::new(status_text).style(status_style), area);
    }

    fn render_pad(frame: &mut Frame, area: Rect, view_state: &ViewState, theme: &ColorTheme) {
        for (cmd, rect) in pad_button_rects(area) {
            if rect.bottom() > area.bottom() || rect.right() > area.right() {
                // Terminal too small for the full pad; skip clipped buttons.
                continue;
            }

            let held = view_state.active_command == cmd || view_state.pressed_button == Some(cmd);
            let style = if held {
                theme.button_active
            } else {
                theme.button
            };

            let button = Paragraph::new(Self::button_label(cmd))
                .alignment(Alignment::Center)
                .style(style)
                .block(Block::default().borders(Borders::ALL));
            frame.render_widget(button, rect);
        }

        let readout = pad_readout_rect(area);
        if readout.bottom() <= area.bottom() && readout.right() <= area.right() {
            let readout_widget = Paragraph::new(view_state.active_command.as_str())
                .alignment(Alignment::Center)
                .style(theme.command_readout)
                .block(Block::default().borders(Borders::NONE));
            let centered = Rect {
                y: readout.y + readout.height / 2,
                height: 1,
                ..readout
            };
            frame.render_widget(readout_widget, centered);
        }
    }

    fn render_help(frame: &mut Frame, area: Rect, theme: &ColorTheme) {
        let help = Paragraph::new(" arrows: drive | mouse: hold pad buttons | q / Esc / Ctrl-C: quit ")
            .style(Style::default().fg(theme.help_text));
        frame.render_widget(help, area);
    }
}

impl UIRenderer for TerminalUI {
    fn render(&mut self, view_state: &ViewState) -> Result<()> {
        if let Some(ref mut terminal) = self.terminal {
            let theme = &self.theme;

            terminal.draw(move |frame| {
                let size = frame.size();
                if size.height < 3 {
                    return;
                }

                let status_area = Rect { height: 1, ..size };
                let help_area = Rect {
                    y: size.height - 1,
                    height: 1,
                    ..size
                };
                let pad = Rect {
                    y: 1,
                    height: size.height - 2,
                    ..size
                };

                Self::render_status(frame, status_area, view_state, theme);
                Self::render_pad(frame, pad, view_state, theme);
                Self::render_help(frame, help_area, theme);
            })?;
        }
        Ok(())
    }

    fn initialize(&mut self) -> Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        // REPORT_EVENT_TYPES is what turns key releases and auto-repeat into
        // distinct events; without it keyup never arrives and held keys look
        // like repeated presses.
        execute!(
            stdout,
            EnterAlternateScreen,
            EnableMouseCapture,
            PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::REPORT_EVENT_TYPES)
        )?;

        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        self.terminal = Some(terminal);

        Ok(())
    }

    fn cleanup(&mut self) -> Result<()> {
        if self.terminal.is_some() {
            execute!(
                io::stdout(),
                PopKeyboardEnhancementFlags,
                LeaveAlternateScreen,
                DisableMouseCapture
            )?;
            disable_raw_mode()?;
            self.terminal = None;
        }
        Ok(())
    }

    fn get_terminal_size(&self) -> Result<(u16, u16)> {
        let (cols, rows) = ratatui::crossterm::terminal::size()?;
        Ok((cols, rows))
    }
}

impl Drop for TerminalUI {
    fn drop(&mut self) {
        let _ = self.cleanup();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::style::Color;

    #[test]
    fn test_terminal_ui_creation() {
        let ui = TerminalUI::new();
        assert!(ui.is_ok());
        let ui = ui.unwrap();
        assert!(ui.terminal.is_none());

        let ui_with_theme = TerminalUI::with_theme(ColorTheme::monochrome());
        assert!(ui_with_theme.is_ok());
    }

    #[test]
    fn test_theme_integration() {
        let ui = TerminalUI::new().unwrap();
        assert_eq!(ui.theme.status_fg, Color::White);
        assert_eq!(ui.theme.status_bg, Color::Blue);

        let ui_mono = TerminalUI::with_theme(ColorTheme::monochrome()).unwrap();
        assert_eq!(ui_mono.theme.status_bg, Color::Black);
    }

    #[test]
    fn button_labels_match_commands() {
        assert_eq!(TerminalUI::button_label(Command::Forward), "forward");
        assert_eq!(TerminalUI::button_label(Command::TurnLeft), "turn left");
        assert_eq!(TerminalUI::button_label(Command::Stop), "stop");
    }
}
