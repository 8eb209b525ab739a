//! Layout file errors.

use std::path::PathBuf;

use crate::model::ModelError;

/// Error loading a layout file.
#[derive(Debug)]
pub enum LayoutError {
    /// The file could not be read.
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    /// The document is not a valid layout.
    Parse {
        path: Option<PathBuf>,
        source: serde_json::Error,
    },
    /// A row could not be built (indices are zero-based).
    InvalidRow {
        section: usize,
        row: usize,
        source: ModelError,
    },
}

impl std::fmt::Display for LayoutError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LayoutError::Io { path, source } => {
                write!(f, "Failed to read '{}': {}", path.display(), source)
            }
            LayoutError::Parse {
                path: Some(path),
                source,
            } => write!(f, "Failed to parse '{}': {}", path.display(), source),
            LayoutError::Parse { path: None, source } => {
                write!(f, "Failed to parse layout: {}", source)
            }
            LayoutError::InvalidRow {
                section,
                row,
                source,
            } => write!(f, "Invalid row (section {}, row {}): {}", section, row, source),
        }
    }
}

impl std::error::Error for LayoutError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LayoutError::Io { source, .. } => Some(source),
            LayoutError::Parse { source, .. } => Some(source),
            LayoutError::InvalidRow { source, .. } => Some(source),
        }
    }
}
