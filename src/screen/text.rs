//! Scrollable static text page.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crate::tui::style::Styles;

use super::Screen;

/// Plain text page with a titled border.
#[derive(Debug, Clone)]
pub struct TextScreen {
    title: String,
    lines: Vec<String>,
    scroll: usize,
}

impl TextScreen {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        let body = body.into();
        Self {
            title: title.into(),
            lines: body.lines().map(str::to_string).collect(),
            scroll: 0,
        }
    }

    pub fn scroll(&self) -> usize {
        self.scroll
    }
}

impl Screen for TextScreen {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .title(format!(" {} ", self.title))
            .borders(Borders::ALL)
            .border_style(Styles::border());
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let content: Vec<Line> = self.lines.iter().map(|l| Line::from(l.as_str())).collect();
        let paragraph = Paragraph::new(content)
            .wrap(Wrap { trim: false })
            .style(Styles::default());

        // Clamp scroll to the wrapped height
        let visible_height = inner.height as usize;
        let max_scroll = paragraph.line_count(inner.width).saturating_sub(visible_height);
        if self.scroll > max_scroll {
            self.scroll = max_scroll;
        }

        let paragraph = paragraph.scroll((self.scroll as u16, 0));
        frame.render_widget(paragraph, inner);
    }

    fn handle_key(&mut self, key: KeyEvent) -> bool {
        // Increments are clamped during render
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.scroll = self.scroll.saturating_sub(1),
            KeyCode::Down | KeyCode::Char('j') => self.scroll = self.scroll.saturating_add(1),
            KeyCode::PageUp => self.scroll = self.scroll.saturating_sub(10),
            KeyCode::PageDown => self.scroll = self.scroll.saturating_add(10),
            KeyCode::Home => self.scroll = 0,
            _ => return false,
        }
        true
    }
}
