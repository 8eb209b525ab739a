//! Main rendering logic for TUI.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};

use crate::model::Section;
use crate::view::PreferencesListView;

use super::assets::AssetCatalog;
use super::state::{AppState, PopupState};
use super::widgets::{PreferencesList, render_header, render_help, render_quit_confirm};

/// Main render function.
pub fn render(
    frame: &mut Frame,
    sections: &[Section],
    catalog: &AssetCatalog,
    state: &mut AppState,
) {
    let area = frame.area();

    let chunks = Layout::vertical([
        Constraint::Length(1), // Header
        Constraint::Min(1),    // Visible screen
    ])
    .split(area);

    render_header(frame, chunks[0], state);

    // Top of the navigation stack, or the preferences list at the root
    match state.nav.top_mut() {
        Some(entry) => entry.screen.render(frame, chunks[1]),
        None => {
            let view = PreferencesListView::build(sections);
            frame.render_stateful_widget(
                PreferencesList::new(&view, catalog),
                chunks[1],
                &mut state.selection,
            );
        }
    }

    // Popups are rendered last to overlay everything
    match state.popup {
        PopupState::Help { ref mut scroll } => render_help(frame, area, scroll),
        PopupState::QuitConfirm => render_quit_confirm(frame, area),
        PopupState::None => {}
    }
}
