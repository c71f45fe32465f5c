//! Terminal UI module with ratatui
//!
//! Draws a directional button pad with a status line, and exposes the pad
//! geometry used for mouse hit-testing. Follows a trait-based architecture so
//! the app loop can be tested against a mock surface.

pub mod renderer;
pub mod state;
pub mod terminal;
pub mod theme;

// Re-export public API
pub use renderer::UIRenderer;
pub use state::{pad_area, pad_button_rects, ViewState, BUTTON_HEIGHT, BUTTON_WIDTH};
pub use terminal::TerminalUI;
pub use theme::ColorTheme;

#[cfg(test)]
pub use renderer::tests::MockUIRenderer;
