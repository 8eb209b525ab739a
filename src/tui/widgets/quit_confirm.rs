//! Quit confirmation popup widget.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::tui::style::Styles;

use super::centered_popup;

/// Renders a centered quit confirmation popup.
pub fn render_quit_confirm(frame: &mut Frame, area: Rect) {
    // 50% width, fixed height, clamped.
    let popup_area = centered_popup(
        area,
        (area.width * 50 / 100).clamp(36, 60),
        area.height.clamp(6, 8),
    );

    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .title(" Exit ")
        .borders(Borders::ALL)
        .border_style(Styles::border());
    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    let content = vec![
        Line::from("Are you sure you want to quit?"),
        Line::from(""),
        Line::from(vec![
            Span::styled("Enter", Styles::help_key()),
            Span::styled(" or ", Styles::dim()),
            Span::styled("q", Styles::help_key()),
            Span::styled(" → quit", Styles::dim()),
        ]),
        Line::from(vec![
            Span::styled("Esc", Styles::help_key()),
            Span::styled(" or ", Styles::dim()),
            Span::styled("n", Styles::help_key()),
            Span::styled(" → cancel", Styles::dim()),
        ]),
    ];

    let paragraph = Paragraph::new(content)
        .alignment(Alignment::Center)
        .style(Styles::default());
    frame.render_widget(paragraph, inner);
}
