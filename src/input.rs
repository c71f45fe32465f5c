//! Input subsystem: crossterm event polling and translation into the
//! primitive actions the app loop consumes.

pub mod service;

pub use service::{InputAction, InputService};
