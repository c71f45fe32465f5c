//! View state and pad geometry.
//!
//! `ViewState` is the single source of truth the renderer draws from; the app
//! loop owns and mutates it. Pad geometry lives here as pure functions so the
//! renderer and the mouse hit-testing in the app loop always agree on where
//! the buttons are.

use crate::bridge::Command;
use crate::link::{Endpoint, LinkEvent, LinkState};
use ratatui::layout::Rect;

/// Width of one directional button in terminal cells.
pub const BUTTON_WIDTH: u16 = 13;
/// Height of one directional button in terminal cells.
pub const BUTTON_HEIGHT: u16 = 3;

/// Everything the renderer needs to draw a frame.
#[derive(Debug, Clone)]
pub struct ViewState {
    /// Endpoint URL shown in the status line.
    pub endpoint: String,
    /// Connection lifecycle as last reported by the link worker.
    pub link_state: LinkState,
    /// Command implied by the current input state; drives button highlights.
    pub active_command: Command,
    /// Last command handed to the link worker, if any.
    pub last_sent: Option<Command>,
    /// On-screen button currently held with the mouse.
    pub pressed_button: Option<Command>,
    /// Most recent link error, shown in the status line.
    pub last_error: Option<String>,
    pub terminal_width: u16,
    pub terminal_height: u16,
}

impl ViewState {
    pub fn new(endpoint: &Endpoint, width: u16, height: u16) -> Self {
        Self {
            endpoint: endpoint.url(),
            link_state: LinkState::Connecting,
            active_command: Command::Stop,
            last_sent: None,
            pressed_button: None,
            last_error: None,
            terminal_width: width,
            terminal_height: height,
        }
    }

    /// Fold a link worker observation into the displayed state.
    pub fn apply_link_event(&mut self, event: &LinkEvent) {
        self.link_state = self.link_state.apply(event);
        if let LinkEvent::Error(message) = event {
            self.last_error = Some(message.clone());
        }
    }

    /// Record a command handed to the link worker.
    pub fn record_sent(&mut self, command: Command) {
        self.active_command = command;
        self.last_sent = Some(command);
    }

    /// Returns true when the size actually changed.
    pub fn update_terminal_size(&mut self, width: u16, height: u16) -> bool {
        if self.terminal_width == width && self.terminal_height == height {
            return false;
        }
        self.terminal_width = width;
        self.terminal_height = height;
        true
    }

    /// Area the pad occupies: everything between the status line (top) and
    /// the help line (bottom).
    pub fn pad_area(&self) -> Rect {
        pad_area(self.terminal_width, self.terminal_height)
    }

    /// Which button, if any, sits under a terminal cell.
    pub fn hit_test(&self, column: u16, row: u16) -> Option<Command> {
        hit_test(self.pad_area(), column, row)
    }
}

/// Pad area for a given terminal size: one status row above, one help row below.
pub fn pad_area(width: u16, height: u16) -> Rect {
    Rect {
        x: 0,
        y: 1,
        width,
        height: height.saturating_sub(2),
    }
}

/// Button rectangles in a cross layout, centered inside `area`.
///
/// Cells of a 3x3 grid: forward on top, turn buttons on the middle flanks,
/// backward on the bottom. The center cell is the command readout and is not
/// a button.
pub fn pad_button_rects(area: Rect) -> [(Command, Rect); 4] {
    let pad_width = BUTTON_WIDTH * 3;
    let pad_height = BUTTON_HEIGHT * 3;
    let left = area.x + area.width.saturating_sub(pad_width) / 2;
    let top = area.y + area.height.saturating_sub(pad_height) / 2;

    let cell = |col: u16, row: u16| Rect {
        x: left + col * BUTTON_WIDTH,
        y: top + row * BUTTON_HEIGHT,
        width: BUTTON_WIDTH,
        height: BUTTON_HEIGHT,
    };

    [
        (Command::Forward, cell(1, 0)),
        (Command::TurnLeft, cell(0, 1)),
        (Command::TurnRight, cell(2, 1)),
        (Command::Backward, cell(1, 2)),
    ]
}

/// Center cell of the pad grid (the command readout).
pub fn pad_readout_rect(area: Rect) -> Rect {
    let pad_width = BUTTON_WIDTH * 3;
    let pad_height = BUTTON_HEIGHT * 3;
    let left = area.x + area.width.saturating_sub(pad_width) / 2;
    let top = area.y + area.height.saturating_sub(pad_height) / 2;
    Rect {
        x: left + BUTTON_WIDTH,
        y: top + BUTTON_HEIGHT,
        width: BUTTON_WIDTH,
        height: BUTTON_HEIGHT,
    }
}

/// Map a terminal cell to the button under it, if any.
pub fn hit_test(area: Rect, column: u16, row: u16) -> Option<Command> {
    pad_button_rects(area)
        .into_iter()
        .find(|(_, rect)| {
            column >= rect.x
                && column < rect.x + rect.width
                && row >= rect.y
                && row < rect.y + rect.height
        })
        .map(|(cmd, _)| cmd)
}
