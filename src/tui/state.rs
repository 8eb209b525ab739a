//! Application state management.

use ratatui::widgets::ListState;

use super::nav::NavStack;
use super::navigable::NavigableList;

/// Active popup state. Only one popup can be open at a time.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PopupState {
    /// No popup is open.
    #[default]
    None,
    /// Key binding help with scroll offset.
    Help { scroll: usize },
    /// Quit confirmation dialog.
    QuitConfirm,
}

impl PopupState {
    /// Returns true if any popup is open.
    pub fn is_open(&self) -> bool {
        !matches!(self, Self::None)
    }
}

/// Selection and scroll offset of the preferences list.
#[derive(Debug, Default)]
pub struct ListSelection {
    /// Selected row, counted over rows only (headers are skipped).
    pub selected: usize,
    /// Ratatui list state; keeps the scroll offset between frames.
    pub list: ListState,
}

impl ListSelection {
    /// Clamps the selection to `row_count` rows and returns it.
    ///
    /// Returns `None` when there is nothing to select.
    pub fn resolve(&mut self, row_count: usize) -> Option<usize> {
        if row_count == 0 {
            self.selected = 0;
            return None;
        }
        self.selected = self.selected.min(row_count - 1);
        Some(self.selected)
    }
}

impl NavigableList for ListSelection {
    fn selected(&self) -> usize {
        self.selected
    }

    fn selected_mut(&mut self) -> &mut usize {
        &mut self.selected
    }
}

/// Main application state.
#[derive(Debug)]
pub struct AppState {
    /// Title of the root preferences screen.
    pub title: String,
    /// Selection in the preferences list.
    pub selection: ListSelection,
    /// Screens pushed above the preferences list.
    pub nav: NavStack,
    /// Open popup, if any.
    pub popup: PopupState,
}

impl AppState {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            selection: ListSelection::default(),
            nav: NavStack::new(),
            popup: PopupState::None,
        }
    }

    /// Breadcrumb from the root screen to the visible one.
    pub fn breadcrumb(&self) -> Vec<&str> {
        std::iter::once(self.title.as_str())
            .chain(self.nav.titles())
            .collect()
    }
}
