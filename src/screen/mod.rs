//! Screens that can be pushed onto the navigation stack.

mod text;

pub use text::TextScreen;

use crossterm::event::KeyEvent;
use ratatui::Frame;
use ratatui::layout::Rect;

/// Something that can be shown as the current screen.
///
/// Destinations of navigation rows implement this. The renderer never looks
/// inside a screen; it only draws it while it is on top of the stack.
pub trait Screen {
    /// Draws the screen into `area`.
    fn render(&mut self, frame: &mut Frame, area: Rect);

    /// Handles a key the navigation layer did not consume.
    ///
    /// Returns `true` if the key was used.
    fn handle_key(&mut self, _key: KeyEvent) -> bool {
        false
    }
}
