//! Terminal User Interface for preferences screens.
//!
//! Renders a list of [`Section`](crate::model::Section)s as a grouped,
//! navigable list. Navigation rows push their destination onto a
//! [`NavStack`]; social-media rows hand their URL to a [`UrlOpener`].

mod app;
pub mod assets;
mod event;
mod input;
pub mod nav;
mod navigable;
pub mod opener;
mod render;
pub mod state;
pub(crate) mod style;
mod widgets;

pub use app::{App, DEFAULT_TITLE};
pub use assets::AssetCatalog;
pub use nav::{NavEntry, NavStack};
pub use opener::{RecordingOpener, SystemOpener, UrlOpener};
pub use state::{AppState, PopupState};
pub use widgets::PreferencesList;
