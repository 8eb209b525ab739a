//! Color scheme and styles.

use ratatui::style::{Color, Modifier, Style};

/// Color palette.
pub struct Theme;

impl Theme {
    // Background colors
    pub const BG: Color = Color::Reset;
    pub const HEADER_BG: Color = Color::Blue;
    pub const SELECTED_BG: Color = Color::DarkGray;

    // Foreground colors
    pub const FG: Color = Color::White;
    pub const FG_DIM: Color = Color::DarkGray;
    pub const HEADER_FG: Color = Color::White;

    // List colors
    pub const SECTION_FG: Color = Color::Cyan;
    pub const ICON_FG: Color = Color::Magenta;
    pub const LINK_FG: Color = Color::Blue;

    // Popups
    pub const BORDER: Color = Color::Cyan;
    pub const KEY: Color = Color::Yellow;
}

/// Pre-defined styles.
pub struct Styles;

impl Styles {
    /// Default text style.
    pub fn default() -> Style {
        Style::default().fg(Theme::FG).bg(Theme::BG)
    }

    /// Header bar style.
    pub fn header() -> Style {
        Style::default()
            .fg(Theme::HEADER_FG)
            .bg(Theme::HEADER_BG)
            .add_modifier(Modifier::BOLD)
    }

    /// Selected row style.
    pub fn selected() -> Style {
        Style::default()
            .bg(Theme::SELECTED_BG)
            .add_modifier(Modifier::BOLD)
    }

    /// Section title above a group of rows.
    pub fn section_header() -> Style {
        Style::default()
            .fg(Theme::SECTION_FG)
            .add_modifier(Modifier::BOLD)
    }

    /// Social-media icon glyph.
    pub fn icon() -> Style {
        Style::default()
            .fg(Theme::ICON_FG)
            .add_modifier(Modifier::BOLD)
    }

    /// Trailing marker of an external link row.
    pub fn link_marker() -> Style {
        Style::default().fg(Theme::LINK_FG)
    }

    /// Dimmed text style.
    pub fn dim() -> Style {
        Style::default().fg(Theme::FG_DIM)
    }

    /// Popup and page border.
    pub fn border() -> Style {
        Style::default().fg(Theme::BORDER)
    }

    /// Key names in help and hint lines.
    pub fn help_key() -> Style {
        Style::default().fg(Theme::KEY)
    }
}
