//! Terminal input collection.
//!
//! Translates crossterm events into the primitive actions the app loop
//! consumes. Deliberately thin: no coalescing and no debouncing, because
//! every input transition must produce its own immediate command. The only
//! suppression in the whole pipeline is the auto-repeat flag, which is
//! carried through here untouched and handled by the bridge.

use crate::error::Result;
use ratatui::crossterm::event::{
    self, Event, KeyCode, KeyEventKind, KeyModifiers, MouseButton, MouseEventKind,
};
use std::time::Duration;

/// Poll timeout used when the caller does not provide one.
const DEFAULT_POLL_TIMEOUT_MS: u64 = 50;

/// Primitive input actions emitted by the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    /// A key went down. `repeat` is true for OS auto-repeat presses.
    KeyDown { key: KeyCode, repeat: bool },
    /// A key was released. Requires the kitty keyboard protocol; terminals
    /// without it simply never produce releases.
    KeyUp { key: KeyCode },
    /// Left mouse button pressed at a terminal cell.
    PointerDown { column: u16, row: u16 },
    /// Left mouse button released (anywhere).
    PointerUp,
    /// Terminal was resized.
    Resize { width: u16, height: u16 },
    /// User asked to exit (q, Esc, or Ctrl-C).
    Quit,
}

/// Service responsible for producing `InputAction`s from terminal events.
#[derive(Debug, Default)]
pub struct InputService;

impl InputService {
    pub fn new() -> Self {
        Self
    }

    /// Retrieve the next input action, blocking up to `timeout`.
    pub fn poll_action(&mut self, timeout: Option<Duration>) -> Result<Option<InputAction>> {
        let poll_timeout = timeout.unwrap_or(Duration::from_millis(DEFAULT_POLL_TIMEOUT_MS));

        if !event::poll(poll_timeout)? {
            return Ok(None);
        }

        let raw = event::read()?;
        Ok(self.process_event(raw))
    }

    /// Translate a single terminal event (also used directly by unit tests).
    pub fn process_event(&mut self, raw: Event) -> Option<InputAction> {
        match raw {
            Event::Key(key_event) => {
                let quit = matches!(key_event.code, KeyCode::Char('q') | KeyCode::Esc)
                    || (key_event.code == KeyCode::Char('c')
                        && key_event.modifiers.contains(KeyModifiers::CONTROL));
                if quit && key_event.kind == KeyEventKind::Press {
                    return Some(InputAction::Quit);
                }

                match key_event.kind {
                    KeyEventKind::Press => Some(InputAction::KeyDown {
                        key: key_event.code,
                        repeat: false,
                    }),
                    KeyEventKind::Repeat => Some(InputAction::KeyDown {
                        key: key_event.code,
                        repeat: true,
                    }),
                    KeyEventKind::Release => Some(InputAction::KeyUp {
                        key: key_event.code,
                    }),
                }
            }
            Event::Mouse(mouse_event) => match mouse_event.kind {
                MouseEventKind::Down(MouseButton::Left) => Some(InputAction::PointerDown {
                    column: mouse_event.column,
                    row: mouse_event.row,
                }),
                MouseEventKind::Up(MouseButton::Left) => Some(InputAction::PointerUp),
                _ => None,
            },
            Event::Resize(width, height) => Some(InputAction::Resize { width, height }),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::crossterm::event::{KeyEvent, KeyEventState, MouseEvent};

    fn key(code: KeyCode, kind: KeyEventKind) -> Event {
        Event::Key(KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind,
            state: KeyEventState::NONE,
        })
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    #[test]
    fn key_press_repeat_and_release_are_distinguished() {
        let mut service = InputService::new();

        assert_eq!(
            service.process_event(key(KeyCode::Up, KeyEventKind::Press)),
            Some(InputAction::KeyDown {
                key: KeyCode::Up,
                repeat: false,
            })
        );
        assert_eq!(
            service.process_event(key(KeyCode::Up, KeyEventKind::Repeat)),
            Some(InputAction::KeyDown {
                key: KeyCode::Up,
                repeat: true,
            })
        );
        assert_eq!(
            service.process_event(key(KeyCode::Up, KeyEventKind::Release)),
            Some(InputAction::KeyUp { key: KeyCode::Up })
        );
    }

    #[test]
    fn quit_keys_emit_quit_on_press_only() {
        let mut service = InputService::new();

        assert_eq!(
            service.process_event(key(KeyCode::Char('q'), KeyEventKind::Press)),
            Some(InputAction::Quit)
        );
        assert_eq!(
            service.process_event(key(KeyCode::Esc, KeyEventKind::Press)),
            Some(InputAction::Quit)
        );

        let ctrl_c = Event::Key(KeyEvent {
            code: KeyCode::Char('c'),
            modifiers: KeyModifiers::CONTROL,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        });
        assert_eq!(service.process_event(ctrl_c), Some(InputAction::Quit));

        // A release of a quit key is just a key-up, never a second quit.
        assert_eq!(
            service.process_event(key(KeyCode::Char('q'), KeyEventKind::Release)),
            Some(InputAction::KeyUp {
                key: KeyCode::Char('q'),
            })
        );
    }

    #[test]
    fn left_mouse_button_maps_to_pointer_actions() {
        let mut service = InputService::new();

        assert_eq!(
            service.process_event(mouse(MouseEventKind::Down(MouseButton::Left), 12, 5)),
            Some(InputAction::PointerDown { column: 12, row: 5 })
        );
        assert_eq!(
            service.process_event(mouse(MouseEventKind::Up(MouseButton::Left), 40, 20)),
            Some(InputAction::PointerUp)
        );
    }

    #[test]
    fn other_mouse_activity_is_ignored() {
        let mut service = InputService::new();

        assert_eq!(
            service.process_event(mouse(MouseEventKind::Down(MouseButton::Right), 0, 0)),
            None
        );
        assert_eq!(
            service.process_event(mouse(MouseEventKind::Moved, 3, 3)),
            None
        );
        assert_eq!(
            service.process_event(mouse(MouseEventKind::ScrollDown, 3, 3)),
            None
        );
    }

    #[test]
    fn resize_passes_through() {
        let mut service = InputService::new();
        assert_eq!(
            service.process_event(Event::Resize(80, 24)),
            Some(InputAction::Resize {
                width: 80,
                height: 24,
            })
        );
    }
}
