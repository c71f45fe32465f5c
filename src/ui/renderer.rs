//! UI renderer trait.
//!
//! The app loop talks to the terminal through this seam so tests can swap in
//! a mock surface and drive the loop without a real terminal.

use crate::error::Result;
use crate::ui::ViewState;

/// Core trait for UI rendering.
///
/// Input collection lives on its own thread in the app loop; the renderer
/// only draws and manages terminal modes.
pub trait UIRenderer {
    /// Render the current view state to the terminal.
    fn render(&mut self, view_state: &ViewState) -> Result<()>;

    /// Set up raw mode, the alternate screen, mouse capture, and keyboard
    /// enhancement flags.
    fn initialize(&mut self) -> Result<()>;

    /// Restore the terminal state.
    fn cleanup(&mut self) -> Result<()>;

    /// Get current terminal dimensions as (width, height).
    fn get_terminal_size(&self) -> Result<(u16, u16)>;
}

#[cfg(test)]
pub mod tests {
    use super::*;

    /// Mock UI renderer for testing the app loop without a terminal.
    #[derive(Debug, Default)]
    pub struct MockUIRenderer {
        pub render_count: usize,
        pub terminal_size: (u16, u16),
        pub is_initialized: bool,
    }

    impl MockUIRenderer {
        pub fn new() -> Self {
            Self {
                render_count: 0,
                terminal_size: (80, 24),
                is_initialized: false,
            }
        }
    }

    impl UIRenderer for MockUIRenderer {
        fn render(&mut self, _view_state: &ViewState) -> Result<()> {
            self.render_count += 1;
            Ok(())
        }

        fn initialize(&mut self) -> Result<()> {
            self.is_initialized = true;
            Ok(())
        }

        fn cleanup(&mut self) -> Result<()> {
            self.is_initialized = false;
            Ok(())
        }

        fn get_terminal_size(&self) -> Result<(u16, u16)> {
            Ok(self.terminal_size)
        }
    }

    #[test]
    fn mock_renderer_counts_renders() {
        use crate::link::{Endpoint, DEFAULT_PORT};

        let mut mock = MockUIRenderer::new();
        mock.initialize().unwrap();
        assert!(mock.is_initialized);

        let state = ViewState::new(&Endpoint::new("localhost", DEFAULT_PORT), 80, 24);
        mock.render(&state).unwrap();
        mock.render(&state).unwrap();
        assert_eq!(mock.render_count, 2);

        mock.cleanup().unwrap();
        assert!(!mock.is_initialized);
    }
}
