//! prefscreen - interactive preferences screen for the terminal.
//!
//! Usage:
//!   prefscreen                    # built-in demo screen
//!   prefscreen layout.json        # screen described by a layout file
//!   prefscreen --print layout.json
//!   prefscreen --dry-run          # log link rows instead of opening a browser

use std::fs::OpenOptions;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::Duration;

use clap::{ArgAction, Parser};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph};
use tracing::Level;
use tracing_subscriber::EnvFilter;

use prefscreen::layout::LayoutFile;
use prefscreen::model::{Destination, ModelError, Row, Section};
use prefscreen::screen::Screen;
use prefscreen::tui::{App, AssetCatalog, DEFAULT_TITLE, RecordingOpener};
use prefscreen::view::PreferencesListView;

/// Interactive preferences screen.
#[derive(Parser)]
#[command(name = "prefscreen", about = "Preferences screen viewer", version)]
struct Args {
    /// JSON layout file. The built-in demo screen is shown when omitted.
    #[arg(value_name = "LAYOUT")]
    layout: Option<PathBuf>,

    /// Redraw interval in milliseconds.
    #[arg(long, value_name = "MS", default_value_t = 250)]
    tick_rate: u64,

    /// Print the screen as an outline and exit.
    #[arg(long)]
    print: bool,

    /// Log link rows instead of opening them in the browser.
    #[arg(long)]
    dry_run: bool,

    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Only log errors.
    #[arg(short, long)]
    quiet: bool,

    /// Write logs to this file. Logs are discarded otherwise, the terminal
    /// belongs to the UI.
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

fn main() {
    let args = Args::parse();

    if let Some(ref path) = args.log_file
        && let Err(e) = init_logging(path, args.verbose, args.quiet)
    {
        eprintln!("Error opening log file '{}': {}", path.display(), e);
        std::process::exit(1);
    }

    let (title, sections, catalog) = match args.layout {
        Some(ref path) => match LayoutFile::load(path).and_then(LayoutFile::into_layout) {
            Ok(layout) => (layout.title, layout.sections, layout.catalog),
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        },
        None => match demo_sections() {
            Ok(sections) => (DEFAULT_TITLE.to_string(), sections, AssetCatalog::bundled()),
            Err(e) => {
                eprintln!("Error building demo screen: {}", e);
                std::process::exit(1);
            }
        },
    };

    if args.print {
        println!("{}", title);
        println!();
        print!("{}", PreferencesListView::build(&sections).outline());
        return;
    }

    let mut app = App::new(sections).with_title(title).with_catalog(catalog);
    if args.dry_run {
        app = app.with_opener(RecordingOpener::new());
    }

    if let Err(e) = app.run(Duration::from_millis(args.tick_rate)) {
        eprintln!("Error running TUI: {}", e);
        std::process::exit(1);
    }
}

/// Initializes the tracing subscriber writing to `path`.
/// Default level is INFO. Use -v for DEBUG, -vv for TRACE, -q for errors only.
fn init_logging(path: &Path, verbose: u8, quiet: bool) -> io::Result<()> {
    let level = if quiet {
        Level::ERROR
    } else {
        match verbose {
            0 => Level::INFO,
            1 => Level::DEBUG,
            _ => Level::TRACE,
        }
    };

    let mut filter = EnvFilter::from_default_env();
    if let Ok(directive) = format!("prefscreen={}", level).parse() {
        filter = filter.add_directive(directive);
    }

    let file = OpenOptions::new().create(true).append(true).open(path)?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();
    Ok(())
}

/// Demo screen shown when no layout file is given.
fn demo_sections() -> Result<Vec<Section>, ModelError> {
    Ok(vec![
        Section::new(
            "General",
            vec![
                Row::navigation(
                    "Appearance",
                    Destination::text(
                        "Appearance",
                        "Theme: follows the terminal palette\nIcons: two-cell glyphs",
                    ),
                ),
                Row::navigation(
                    "Notifications",
                    Destination::text("Notifications", "No notification channels configured."),
                ),
            ],
        ),
        Section::new(
            "Community",
            vec![
                Row::social_media("github", "Source code", "https://github.com")?,
                Row::social_media("mastodon", "Follow on Mastodon", "https://joinmastodon.org")?,
                Row::social_media("youtube", "Video tutorials", "https://www.youtube.com")?,
            ],
        ),
        Section::new(
            "About",
            vec![Row::navigation("Version", Destination::new(AboutScreen::new))],
        ),
    ])
}

/// Version page, with a toggle between short and long form.
struct AboutScreen {
    verbose: bool,
}

impl AboutScreen {
    fn new() -> Self {
        Self { verbose: false }
    }
}

impl Screen for AboutScreen {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let mut lines = vec![Line::from(format!(
            "{} {}",
            env!("CARGO_PKG_NAME"),
            env!("CARGO_PKG_VERSION")
        ))];
        if self.verbose {
            lines.push(Line::from(""));
            lines.push(Line::from(env!("CARGO_PKG_DESCRIPTION")));
        } else {
            lines.push(Line::from("Press v for details"));
        }
        let block = Block::default().title(" Version ").borders(Borders::ALL);
        frame.render_widget(Paragraph::new(lines).block(block), area);
    }

    fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.code == KeyCode::Char('v') {
            self.verbose = !self.verbose;
            return true;
        }
        false
    }
}
