//! Navigation stack of pushed screens.

use std::fmt;

use crate::screen::Screen;

/// Screen pushed by activating a navigation row.
pub struct NavEntry {
    pub title: String,
    pub screen: Box<dyn Screen>,
}

impl NavEntry {
    pub fn new(title: impl Into<String>, screen: Box<dyn Screen>) -> Self {
        Self {
            title: title.into(),
            screen,
        }
    }
}

impl fmt::Debug for NavEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NavEntry")
            .field("title", &self.title)
            .finish_non_exhaustive()
    }
}

/// LIFO stack of screens shown above the preferences list.
///
/// The preferences list is the implicit root: an empty stack means the list
/// itself is visible.
#[derive(Debug, Default)]
pub struct NavStack {
    entries: Vec<NavEntry>,
}

impl NavStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pushes a screen, making it the visible one.
    pub fn push(&mut self, entry: NavEntry) {
        self.entries.push(entry);
    }

    /// Removes the visible screen. Returns `None` when already at the root.
    pub fn pop(&mut self) -> Option<NavEntry> {
        self.entries.pop()
    }

    pub fn top(&self) -> Option<&NavEntry> {
        self.entries.last()
    }

    pub fn top_mut(&mut self) -> Option<&mut NavEntry> {
        self.entries.last_mut()
    }

    pub fn depth(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Titles from the bottom of the stack to the top.
    pub fn titles(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.title.as_str())
    }
}
