//! UI-agnostic view model of a preferences list.
//!
//! [`PreferencesListView`] flattens the sections into display lines. The TUI
//! maps each line to a ratatui list item; `--print` maps them to plain text.

use crate::model::{Row, RowKind, Section};

/// One display line of the preferences list.
#[derive(Debug, Clone, Copy)]
pub enum ListLine<'a> {
    /// Section header showing the section title.
    Header { section: &'a Section },
    /// Selectable row.
    Row { row: &'a Row },
    /// Blank line separating two sections.
    Spacer,
}

/// Flattened, order-preserving view of a list of sections.
#[derive(Debug, Clone, Default)]
pub struct PreferencesListView<'a> {
    lines: Vec<ListLine<'a>>,
    /// Line position of each selectable row, by row index.
    row_lines: Vec<usize>,
}

impl<'a> PreferencesListView<'a> {
    /// Builds the view. Sections and rows keep their input order; nothing is
    /// sorted, filtered or deduplicated.
    pub fn build(sections: &'a [Section]) -> Self {
        let mut lines = Vec::new();
        let mut row_lines = Vec::new();

        for (i, section) in sections.iter().enumerate() {
            if i > 0 {
                lines.push(ListLine::Spacer);
            }
            lines.push(ListLine::Header { section });
            for row in section.rows() {
                row_lines.push(lines.len());
                lines.push(ListLine::Row { row });
            }
        }

        Self { lines, row_lines }
    }

    pub fn lines(&self) -> &[ListLine<'a>] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Number of selectable rows.
    pub fn row_count(&self) -> usize {
        self.row_lines.len()
    }

    /// Row with the given selectable index.
    pub fn row(&self, index: usize) -> Option<&'a Row> {
        let line = *self.row_lines.get(index)?;
        match self.lines[line] {
            ListLine::Row { row } => Some(row),
            _ => None,
        }
    }

    /// Line position of the row with the given selectable index.
    pub fn line_of_row(&self, index: usize) -> Option<usize> {
        self.row_lines.get(index).copied()
    }

    /// Section titles, in display order.
    pub fn headers(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.lines.iter().filter_map(|line| match line {
            ListLine::Header { section } => Some(section.title()),
            _ => None,
        })
    }

    /// Plain-text outline: headers flush left, rows indented with a marker
    /// for their kind (`>` navigation, `@` external link).
    pub fn outline(&self) -> String {
        let mut out = String::new();
        for line in &self.lines {
            match line {
                ListLine::Header { section } => {
                    out.push_str(section.title());
                }
                ListLine::Row { row } => match row.kind() {
                    RowKind::Navigation(nav) => {
                        out.push_str("  > ");
                        out.push_str(nav.title());
                    }
                    RowKind::SocialMedia(social) => {
                        out.push_str(&format!(
                            "  @ {} [{}] <{}>",
                            social.title(),
                            social.image(),
                            social.url()
                        ));
                    }
                },
                ListLine::Spacer => {}
            }
            out.push('\n');
        }
        out
    }
}
