//! Input-to-command bridge.
//!
//! The core of rovctl: a fixed five-command vocabulary, a static key map,
//! and the state machine that turns input transitions into exactly one
//! outgoing command each.

pub mod command;
pub mod state;

// Public re-exports for convenience. Modules outside this crate should prefer
// importing from `crate::bridge` rather than reaching into submodules.
pub use command::{command_for_key, Command, PRIORITY};
pub use state::{Bridge, HeldFlags};
