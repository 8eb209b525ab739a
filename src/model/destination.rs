//! Type-erased sub-view attached to a navigation row.

use std::fmt;
use std::rc::Rc;

use crate::screen::{Screen, TextScreen};

/// Lazily built screen shown when a navigation row is activated.
///
/// Rows pointing at unrelated screen types live in one list, so the concrete
/// type is erased behind a factory. The screen is only constructed when the
/// row is activated, and a fresh instance is built on every activation.
#[derive(Clone)]
pub struct Destination {
    build: Rc<dyn Fn() -> Box<dyn Screen>>,
}

impl Destination {
    /// Wraps a closure producing the destination screen.
    pub fn new<S, F>(build: F) -> Self
    where
        S: Screen + 'static,
        F: Fn() -> S + 'static,
    {
        Self {
            build: Rc::new(move || Box::new(build()) as Box<dyn Screen>),
        }
    }

    /// Destination showing a static text page.
    pub fn text(title: impl Into<String>, body: impl Into<String>) -> Self {
        let title = title.into();
        let body = body.into();
        Self::new(move || TextScreen::new(title.clone(), body.clone()))
    }

    /// Builds a new instance of the destination screen.
    pub fn build(&self) -> Box<dyn Screen> {
        (self.build)()
    }
}

impl fmt::Debug for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Destination(..)")
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use ratatui::Frame;
    use ratatui::layout::Rect;

    use super::*;

    struct Blank;

    impl Screen for Blank {
        fn render(&mut self, _frame: &mut Frame, _area: Rect) {}
    }

    #[test]
    fn screen_is_built_only_on_demand() {
        let built = Rc::new(Cell::new(0));
        let counter = built.clone();
        let destination = Destination::new(move || {
            counter.set(counter.get() + 1);
            Blank
        });
        assert_eq!(built.get(), 0);

        let _ = destination.build();
        let _ = destination.clone().build();
        assert_eq!(built.get(), 2);
    }
}
