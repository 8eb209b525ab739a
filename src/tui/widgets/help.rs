//! Help popup listing key bindings.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

use crate::tui::style::Styles;

use super::centered_popup;

/// Key bindings shown in the help popup, grouped by heading.
const BINDINGS: &[(&str, &[(&str, &str)])] = &[
    (
        "List",
        &[
            ("↑ k / ↓ j", "move selection"),
            ("PgUp / PgDn", "move by a page"),
            ("Home / End", "first / last row"),
            ("Enter → l Space", "open selected row"),
        ],
    ),
    (
        "Pages",
        &[
            ("Esc ← h Bksp", "go back"),
            ("↑ k / ↓ j", "scroll page"),
        ],
    ),
    (
        "General",
        &[
            ("?", "toggle this help"),
            ("q", "quit (asks first)"),
            ("Ctrl-C", "quit immediately"),
        ],
    ),
];

/// Renders the help popup centered on screen with scroll support.
pub fn render_help(frame: &mut Frame, area: Rect, scroll: &mut usize) {
    // 60% width, 80% height, clamped
    let popup_area = centered_popup(
        area,
        (area.width * 60 / 100).clamp(40, 70),
        (area.height * 80 / 100).clamp(10, 24),
    );

    frame.render_widget(Clear, popup_area);

    let paragraph = Paragraph::new(help_lines())
        .wrap(Wrap { trim: false })
        .style(Styles::default());

    let block = Block::default()
        .title(" Keys ")
        .borders(Borders::ALL)
        .border_style(Styles::border());
    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    let chunks = Layout::vertical([
        Constraint::Min(1),    // Content
        Constraint::Length(1), // Footer
    ])
    .split(inner);

    // Clamp scroll to the wrapped height
    let visible_height = chunks[0].height as usize;
    let max_scroll = paragraph
        .line_count(chunks[0].width)
        .saturating_sub(visible_height);
    if *scroll > max_scroll {
        *scroll = max_scroll;
    }

    frame.render_widget(paragraph.scroll((*scroll as u16, 0)), chunks[0]);

    let scroll_info = if max_scroll > 0 {
        format!(" [{}/{}]", *scroll + 1, max_scroll + 1)
    } else {
        String::new()
    };
    let footer = Paragraph::new(Line::from(vec![
        Span::styled("Press ", Styles::dim()),
        Span::styled("?", Styles::help_key()),
        Span::styled(" or ", Styles::dim()),
        Span::styled("Esc", Styles::help_key()),
        Span::styled(" to close", Styles::dim()),
        Span::styled(scroll_info, Styles::dim()),
    ]));
    frame.render_widget(footer, chunks[1]);
}

fn help_lines() -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for (i, (heading, bindings)) in BINDINGS.iter().enumerate() {
        if i > 0 {
            lines.push(Line::from(""));
        }
        lines.push(Line::from(Span::styled(*heading, Styles::section_header())));
        for (keys, action) in *bindings {
            lines.push(Line::from(vec![
                Span::styled(format!("  {:<16}", keys), Styles::help_key()),
                Span::raw(*action),
            ]));
        }
    }
    lines
}
