//! Grouped list of preference rows.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{List, ListItem, StatefulWidget};

use crate::model::{Row, RowKind};
use crate::tui::assets::{AssetCatalog, ICON_WIDTH};
use crate::tui::state::ListSelection;
use crate::tui::style::Styles;
use crate::view::{ListLine, PreferencesListView};

/// Indent of rows under their section header.
const ROW_INDENT: &str = "  ";
/// Trailing marker of navigation rows.
const CHEVRON: &str = "›";
/// Trailing marker of external link rows.
const EXTERNAL: &str = "↗";

/// Renders a [`PreferencesListView`] with the selected row highlighted.
///
/// Headers and spacers are never selected; the selection in
/// [`ListSelection`] counts rows only and is clamped on every render.
pub struct PreferencesList<'v, 'a> {
    view: &'v PreferencesListView<'a>,
    catalog: &'v AssetCatalog,
}

impl<'v, 'a> PreferencesList<'v, 'a> {
    pub fn new(view: &'v PreferencesListView<'a>, catalog: &'v AssetCatalog) -> Self {
        Self { view, catalog }
    }

    fn line(&self, line: &ListLine<'a>, width: usize) -> Line<'a> {
        match *line {
            ListLine::Header { section } => {
                Line::from(Span::styled(section.title(), Styles::section_header()))
            }
            ListLine::Row { row } => self.row_line(row, width),
            ListLine::Spacer => Line::default(),
        }
    }

    fn row_line(&self, row: &'a Row, width: usize) -> Line<'a> {
        match row.kind() {
            RowKind::Navigation(nav) => with_marker(
                vec![Span::raw(ROW_INDENT), Span::raw(nav.title())],
                Span::styled(CHEVRON, Styles::dim()),
                width,
            ),
            RowKind::SocialMedia(social) => {
                let glyph = Span::styled(
                    self.catalog.resolve(social.image()).to_string(),
                    Styles::icon(),
                );
                let pad = ICON_WIDTH.saturating_sub(glyph.width());
                with_marker(
                    vec![
                        Span::raw(ROW_INDENT),
                        Span::raw(" "),
                        glyph,
                        Span::raw(" ".repeat(pad + 1)),
                        Span::raw(social.title()),
                    ],
                    Span::styled(EXTERNAL, Styles::link_marker()),
                    width,
                )
            }
        }
    }
}

/// Appends `marker` right-aligned, one cell from the right edge.
fn with_marker<'a>(mut spans: Vec<Span<'a>>, marker: Span<'a>, width: usize) -> Line<'a> {
    let used: usize = spans.iter().map(Span::width).sum();
    let gap = width.saturating_sub(used + marker.width() + 1).max(1);
    spans.push(Span::raw(" ".repeat(gap)));
    spans.push(marker);
    Line::from(spans)
}

impl StatefulWidget for PreferencesList<'_, '_> {
    type State = ListSelection;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let width = area.width as usize;
        let items: Vec<ListItem> = self
            .view
            .lines()
            .iter()
            .map(|line| ListItem::new(self.line(line, width)))
            .collect();

        let selected_line = state
            .resolve(self.view.row_count())
            .and_then(|index| self.view.line_of_row(index));
        state.list.select(selected_line);

        // Keep the header in view when the first row of a section is selected
        if let Some(line) = selected_line
            && line > 0
            && matches!(self.view.lines()[line - 1], ListLine::Header { .. })
        {
            let offset = state.list.offset_mut();
            *offset = (*offset).min(line - 1);
        }

        let list = List::new(items)
            .style(Styles::default())
            .highlight_style(Styles::selected());
        StatefulWidget::render(list, area, buf, &mut state.list);
    }
}
