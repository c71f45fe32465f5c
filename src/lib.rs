//! # rovctl - Terminal Rover Teleoperation Pad
//!
//! A terminal remote-control pad that translates keyboard and on-screen button
//! input into short text commands sent over a WebSocket connection to a rover
//! or vehicle controller.
//!
//! ## Behavior
//!
//! - **Five commands**: `forward`, `backward`, `turnLeft`, `turnRight`, `stop`,
//!   sent as plain text frames
//! - **Deterministic priority**: simultaneous inputs always resolve to the
//!   highest-priority direction; releasing everything sends `stop`
//! - **Two input tables**: keyboard-held keys and mouse-held pad buttons are
//!   tracked independently and combined at resolution time
//! - **No resilience layer**: one connection per session, no reconnection;
//!   sends against a dead link are silent no-ops
//!
//! ## Architecture
//!
//! The library is organized into focused modules:
//!
//! - [`error`] - Centralized error types and handling
//! - [`bridge`] - The input-to-command state machine and command vocabulary
//! - [`link`] - The WebSocket worker owning the outbound connection
//! - [`input`] - Terminal event collection
//! - [`ui`] - ratatui button pad and status rendering
//! - [`app`] - Application core and component coordination

// Core modules
pub mod bridge;
pub mod error;

// Subsystems
pub mod input;
pub mod link;
pub mod ui;

// Core components
pub mod app;

// Re-export commonly used types for convenience
pub use error::{Result, RovctlError};

// Public API surface for external usage
pub use app::Application;
pub use bridge::{Bridge, Command};
pub use link::{Endpoint, DEFAULT_PORT};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
