//! Motion commands and the static key-to-command table.
//!
//! The wire protocol is five literal text frames; anything else would be
//! ignored or rejected by the receiver, so the command set is a closed enum
//! rather than free-form strings.

use ratatui::crossterm::event::KeyCode;
use std::fmt;

/// A motion directive understood by the remote controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    Forward,
    Backward,
    TurnLeft,
    TurnRight,
    Stop,
}

/// The four directional commands in resolution priority order.
///
/// When several inputs are held simultaneously the first command in this
/// array whose flag is set wins; `Stop` is the fallback when none are set.
pub const PRIORITY: [Command; 4] = [
    Command::Forward,
    Command::Backward,
    Command::TurnLeft,
    Command::TurnRight,
];

impl Command {
    /// Wire encoding sent as a text frame. These strings are the protocol;
    /// the receiver matches them verbatim.
    pub fn as_str(self) -> &'static str {
        match self {
            Command::Forward => "forward",
            Command::Backward => "backward",
            Command::TurnLeft => "turnLeft",
            Command::TurnRight => "turnRight",
            Command::Stop => "stop",
        }
    }

    /// Index into the directional flag tables. `Stop` has no flag.
    pub(crate) fn flag_index(self) -> Option<usize> {
        PRIORITY.iter().position(|&cmd| cmd == self)
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Static mapping from the four arrow keys to directional commands.
const KEY_MAP: [(KeyCode, Command); 4] = [
    (KeyCode::Up, Command::Forward),
    (KeyCode::Down, Command::Backward),
    (KeyCode::Left, Command::TurnLeft),
    (KeyCode::Right, Command::TurnRight),
];

/// Look up the directional command bound to a key, if any.
pub fn command_for_key(key: KeyCode) -> Option<Command> {
    KEY_MAP
        .iter()
        .find(|(code, _)| *code == key)
        .map(|&(_, cmd)| cmd)
}
