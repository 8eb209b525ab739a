//! External-open of social-media links.

use std::cell::RefCell;
use std::io;
use std::rc::Rc;

use tracing::info;
use url::Url;

/// Hands a URL to something outside the application.
pub trait UrlOpener {
    fn open(&self, url: &Url) -> io::Result<()>;
}

/// Opens URLs with the system default handler (usually the browser).
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemOpener;

impl UrlOpener for SystemOpener {
    fn open(&self, url: &Url) -> io::Result<()> {
        open::that_detached(url.as_str())
    }
}

/// Records requested URLs instead of opening them.
///
/// Clones share the same record.
#[derive(Debug, Clone, Default)]
pub struct RecordingOpener {
    opened: Rc<RefCell<Vec<Url>>>,
}

impl RecordingOpener {
    pub fn new() -> Self {
        Self::default()
    }

    /// URLs requested so far, oldest first.
    pub fn opened(&self) -> Vec<Url> {
        self.opened.borrow().clone()
    }
}

impl UrlOpener for RecordingOpener {
    fn open(&self, url: &Url) -> io::Result<()> {
        info!("Would open {}", url);
        self.opened.borrow_mut().push(url.clone());
        Ok(())
    }
}
