//! Section model.

use super::{Row, SectionId};

/// Titled group of rows, rendered as one block under a header.
#[derive(Debug, Clone)]
pub struct Section {
    id: SectionId,
    title: String,
    rows: Vec<Row>,
}

impl Section {
    /// Creates a section. An empty title renders as a blank header and an
    /// empty row list renders as a header with nothing under it.
    pub fn new(title: impl Into<String>, rows: Vec<Row>) -> Self {
        Self {
            id: SectionId::generate(),
            title: title.into(),
            rows,
        }
    }

    pub fn id(&self) -> SectionId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
