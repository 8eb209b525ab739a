//! Main TUI application.

use std::io;
use std::time::Duration;

use crossterm::event::KeyEvent;
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::{Backend, CrosstermBackend};
use tracing::{debug, error, info};

use crate::model::{RowKind, Section};
use crate::view::PreferencesListView;

use super::assets::AssetCatalog;
use super::event::{Event, EventHandler};
use super::input::{KeyAction, handle_key};
use super::nav::NavEntry;
use super::opener::{SystemOpener, UrlOpener};
use super::render::render;
use super::state::AppState;

/// Default title of the root screen.
pub const DEFAULT_TITLE: &str = "Preferences";

/// Preferences screen application.
///
/// Owns the sections for its lifetime and never mutates them.
pub struct App {
    sections: Vec<Section>,
    catalog: AssetCatalog,
    opener: Box<dyn UrlOpener>,
    state: AppState,
    should_quit: bool,
}

impl App {
    /// Creates an app showing `sections` with the bundled asset catalog and
    /// the system URL opener.
    pub fn new(sections: Vec<Section>) -> Self {
        Self {
            sections,
            catalog: AssetCatalog::bundled(),
            opener: Box::new(SystemOpener),
            state: AppState::new(DEFAULT_TITLE),
            should_quit: false,
        }
    }

    /// Sets the title of the root screen.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.state.title = title.into();
        self
    }

    pub fn with_catalog(mut self, catalog: AssetCatalog) -> Self {
        self.catalog = catalog;
        self
    }

    pub fn with_opener(mut self, opener: impl UrlOpener + 'static) -> Self {
        self.opener = Box::new(opener);
        self
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Runs the TUI application on the current terminal.
    pub fn run(mut self, tick_rate: Duration) -> io::Result<()> {
        // Setup terminal
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        info!(
            "Showing '{}' with {} sections",
            self.state.title,
            self.sections.len()
        );
        let result = self.event_loop(&mut terminal, tick_rate);

        // Restore terminal even if the loop failed
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        info!("Exiting");
        result
    }

    fn event_loop<B: Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
        tick_rate: Duration,
    ) -> io::Result<()> {
        let events = EventHandler::new(tick_rate);

        loop {
            self.draw(terminal)?;

            match events.next() {
                Ok(Event::Key(key)) => self.handle_key(key),
                Ok(Event::Tick) | Ok(Event::Resize) => {}
                Err(_) => self.should_quit = true,
            }

            if self.should_quit {
                return Ok(());
            }
        }
    }

    /// Draws one frame on any ratatui backend.
    pub fn draw<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        terminal.draw(|frame| render(frame, &self.sections, &self.catalog, &mut self.state))?;
        Ok(())
    }

    /// Applies one key press.
    pub fn handle_key(&mut self, key: KeyEvent) {
        match handle_key(&mut self.state, key) {
            KeyAction::Quit => self.should_quit = true,
            KeyAction::Activate => self.activate(),
            KeyAction::None => {}
        }
    }

    /// Activates the selected row of the preferences list.
    ///
    /// Navigation rows push their destination; social-media rows open their
    /// URL externally and leave the navigation stack alone.
    pub fn activate(&mut self) {
        let view = PreferencesListView::build(&self.sections);
        let Some(row) = self
            .state
            .selection
            .resolve(view.row_count())
            .and_then(|index| view.row(index))
        else {
            return;
        };

        match row.kind() {
            RowKind::Navigation(nav) => {
                let screen = nav.destination().build();
                self.state.nav.push(NavEntry::new(nav.title(), screen));
                debug!("Pushed '{}' (depth {})", nav.title(), self.state.nav.depth());
            }
            RowKind::SocialMedia(social) => {
                debug!("Opening {} for row '{}'", social.url(), social.title());
                if let Err(e) = self.opener.open(social.url()) {
                    error!("Failed to open {}: {}", social.url(), e);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyModifiers};
    use ratatui::Frame;
    use ratatui::backend::TestBackend;
    use ratatui::layout::Rect;
    use url::Url;

    use super::*;
    use crate::model::{Destination, Row};
    use crate::screen::Screen;
    use crate::tui::opener::RecordingOpener;

    struct AppearanceScreen;

    impl Screen for AppearanceScreen {
        fn render(&mut self, frame: &mut Frame, area: Rect) {
            frame.render_widget(ratatui::widgets::Paragraph::new("APPEARANCE SCREEN"), area);
        }
    }

    struct FailingOpener;

    impl UrlOpener for FailingOpener {
        fn open(&self, _url: &Url) -> io::Result<()> {
            Err(io::Error::other("no handler"))
        }
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn screen_lines(app: &mut App) -> Vec<String> {
        let mut terminal = Terminal::new(TestBackend::new(60, 10)).unwrap();
        app.draw(&mut terminal).unwrap();
        let buffer = terminal.backend().buffer();
        buffer
            .content
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|c| c.symbol()).collect::<String>())
            .collect()
    }

    fn example() -> (App, RecordingOpener) {
        let sections = vec![
            Section::new(
                "General",
                vec![Row::navigation(
                    "Appearance",
                    Destination::new(|| AppearanceScreen),
                )],
            ),
            Section::new(
                "About",
                vec![
                    Row::social_media("twitter-icon", "Follow us", "https://example.com/handle")
                        .unwrap(),
                ],
            ),
        ];
        let opener = RecordingOpener::new();
        let app = App::new(sections).with_opener(opener.clone());
        (app, opener)
    }

    #[test]
    fn renders_sections_in_order_under_header() {
        let (mut app, _) = example();
        let lines = screen_lines(&mut app);
        assert!(lines[0].starts_with(" Preferences"));
        assert_eq!(lines[1].trim_end(), "General");
        assert!(lines[2].contains("Appearance"));
        assert_eq!(lines[4].trim_end(), "About");
        assert!(lines[5].contains("Follow us"));
    }

    #[test]
    fn activating_navigation_row_shows_destination() {
        let (mut app, opener) = example();
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.state().nav.depth(), 1);
        assert_eq!(app.state().breadcrumb(), vec!["Preferences", "Appearance"]);
        assert!(opener.opened().is_empty());

        let lines = screen_lines(&mut app);
        assert!(lines[0].contains("Preferences › Appearance"));
        assert!(lines[1].starts_with("APPEARANCE SCREEN"));
        assert!(!lines.iter().any(|l| l.contains("Follow us")));

        press(&mut app, KeyCode::Esc);
        assert!(app.state().nav.is_empty());
        let lines = screen_lines(&mut app);
        assert_eq!(lines[1].trim_end(), "General");
    }

    #[test]
    fn activating_social_row_opens_url_without_navigation() {
        let (mut app, opener) = example();
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Enter);

        assert_eq!(
            opener.opened().iter().map(|u| u.as_str()).collect::<Vec<_>>(),
            vec!["https://example.com/handle"]
        );
        assert!(app.state().nav.is_empty());
    }

    #[test]
    fn failed_open_is_ignored() {
        let (app, _) = example();
        let mut app = app.with_opener(FailingOpener);
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Enter);

        assert!(!app.should_quit());
        assert!(app.state().nav.is_empty());
        assert!(!app.state().popup.is_open());
        let lines = screen_lines(&mut app);
        assert!(lines[5].contains("Follow us"));
    }

    #[test]
    fn selection_past_end_activates_last_row() {
        let (mut app, opener) = example();
        press(&mut app, KeyCode::End);
        press(&mut app, KeyCode::Enter);
        assert_eq!(opener.opened().len(), 1);
        assert!(app.state().nav.is_empty());
    }

    #[test]
    fn zero_sections_render_empty_and_ignore_activation() {
        let opener = RecordingOpener::new();
        let mut app = App::new(Vec::new()).with_opener(opener.clone());
        let lines = screen_lines(&mut app);
        assert!(lines[1..].iter().all(|l| l.trim().is_empty()));

        press(&mut app, KeyCode::Enter);
        assert!(app.state().nav.is_empty());
        assert!(opener.opened().is_empty());
    }

    #[test]
    fn quit_after_confirmation() {
        let (mut app, _) = example();
        press(&mut app, KeyCode::Char('q'));
        assert!(!app.should_quit());
        let lines = screen_lines(&mut app);
        assert!(lines.iter().any(|l| l.contains("Are you sure you want to quit?")));

        press(&mut app, KeyCode::Enter);
        assert!(app.should_quit());
    }

    #[test]
    fn custom_title_is_root_of_breadcrumb() {
        let (app, _) = example();
        let mut app = app.with_title("Settings");
        let lines = screen_lines(&mut app);
        assert!(lines[0].starts_with(" Settings"));
    }
}
