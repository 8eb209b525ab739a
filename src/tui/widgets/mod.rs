//! Widgets composing the preferences screen.

mod header;
mod help;
mod preferences;
mod quit_confirm;

pub use header::render_header;
pub use help::render_help;
pub use preferences::PreferencesList;
pub use quit_confirm::render_quit_confirm;

use ratatui::layout::Rect;

/// Centers a popup of the requested size inside `area`, shrinking it to fit.
pub(crate) fn centered_popup(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width, height)
}
