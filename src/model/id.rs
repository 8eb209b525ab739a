//! Opaque identities for sections and rows.

use std::fmt;

use uuid::Uuid;

/// Identity of a [`Section`](super::Section), minted once at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SectionId(Uuid);

/// Identity of a [`Row`](super::Row), minted once at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RowId(Uuid);

impl SectionId {
    pub(crate) fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl RowId {
    pub(crate) fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for RowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
