//! Header bar showing the navigation breadcrumb and key hints.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::state::AppState;
use crate::tui::style::Styles;

const SEPARATOR: &str = " › ";

/// Renders the header bar.
pub fn render_header(frame: &mut Frame, area: Rect, state: &AppState) {
    let hints = hint_spans(state);
    let hints_width: u16 = hints.iter().map(|s| s.width() as u16).sum();

    let chunks = Layout::horizontal([
        Constraint::Min(10),             // Breadcrumb
        Constraint::Length(hints_width), // Key hints
    ])
    .split(area);

    let crumbs = state.breadcrumb().join(SEPARATOR);
    let breadcrumb = Paragraph::new(format!(" {}", crumbs)).style(Styles::header());
    frame.render_widget(breadcrumb, chunks[0]);

    let hints = Paragraph::new(Line::from(hints)).style(Styles::header());
    frame.render_widget(hints, chunks[1]);
}

fn hint_spans(state: &AppState) -> Vec<Span<'static>> {
    let mut spans = Vec::new();
    if !state.nav.is_empty() {
        spans.push(Span::raw("Esc"));
        spans.push(Span::raw(":back "));
    }
    spans.push(Span::raw("?"));
    spans.push(Span::raw(":help "));
    spans.push(Span::raw("q"));
    spans.push(Span::raw(":quit "));
    spans
}
