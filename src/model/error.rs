//! Errors raised while building models.

/// Error building a preferences model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    /// Destination text of a social-media row is not a valid absolute URL.
    InvalidUrl {
        input: String,
        source: url::ParseError,
    },
}

impl std::fmt::Display for ModelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ModelError::InvalidUrl { input, source } => {
                write!(f, "Invalid URL '{}': {}", input, source)
            }
        }
    }
}

impl std::error::Error for ModelError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ModelError::InvalidUrl { source, .. } => Some(source),
        }
    }
}
