//! The input-to-command bridge.
//!
//! Pure state machine that consumes input events one at a time, maintains
//! the two directional flag tables, and resolves each state change into
//! exactly one outgoing command. All side effects (transmission, logging,
//! rendering) live with the callers; this module is fully deterministic
//! and unit-testable.

use crate::bridge::command::{command_for_key, Command, PRIORITY};
use ratatui::crossterm::event::KeyCode;

/// One boolean per directional command.
///
/// Two independent instances track keyboard-held keys and on-screen
/// button presses; the bridge resolves over the OR of both.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeldFlags([bool; PRIORITY.len()]);

impl HeldFlags {
    pub fn get(&self, cmd: Command) -> bool {
        cmd.flag_index().map(|idx| self.0[idx]).unwrap_or(false)
    }

    pub fn set(&mut self, cmd: Command, held: bool) {
        if let Some(idx) = cmd.flag_index() {
            self.0[idx] = held;
        }
    }

    pub fn clear(&mut self) {
        self.0 = [false; PRIORITY.len()];
    }

    pub fn any(&self) -> bool {
        self.0.iter().any(|&flag| flag)
    }
}

/// Resolves keyboard and button state into motion commands.
///
/// Each handler returns the single command to transmit for that event, or
/// `None` when the event does not change logical input state (auto-repeat,
/// unmapped key). The caller forwards returned commands to the link; whether
/// the link is open is not the bridge's concern.
#[derive(Debug, Default)]
pub struct Bridge {
    active_keys: HeldFlags,
    button_state: HeldFlags,
}

impl Bridge {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle a key press. Auto-repeat presses are ignored via the event's
    /// repeat flag rather than by comparing against stored state, matching
    /// the protocol's repeat-suppression contract.
    pub fn on_key_down(&mut self, key: KeyCode, repeat: bool) -> Option<Command> {
        if repeat {
            return None;
        }
        let cmd = command_for_key(key)?;
        self.active_keys.set(cmd, true);
        Some(self.resolve())
    }

    /// Handle a key release. Unmapped keys are silently ignored.
    pub fn on_key_up(&mut self, key: KeyCode) -> Option<Command> {
        let cmd = command_for_key(key)?;
        self.active_keys.set(cmd, false);
        Some(self.resolve())
    }

    /// Handle an on-screen button press. Callers guarantee `cmd` is one of
    /// the four directional commands.
    pub fn on_button_press(&mut self, cmd: Command) -> Option<Command> {
        self.button_state.set(cmd, true);
        Some(self.resolve())
    }

    /// Handle an on-screen button release. Only one button can be physically
    /// held at a time in the pad, so a release clears all four flags; keyboard
    /// flags may still drive a command afterwards.
    pub fn on_button_release(&mut self) -> Option<Command> {
        self.button_state.clear();
        Some(self.resolve())
    }

    /// The command currently implied by the combined input state. Used by the
    /// UI to highlight the active direction.
    pub fn current_command(&self) -> Command {
        self.resolve()
    }

    /// True when any directional flag is held in either table.
    pub fn any_input_held(&self) -> bool {
        self.active_keys.any() || self.button_state.any()
    }

    fn resolve(&self) -> Command {
        PRIORITY
            .into_iter()
            .find(|&cmd| self.active_keys.get(cmd) || self.button_state.get(cmd))
            .unwrap_or(Command::Stop)
    }
}
