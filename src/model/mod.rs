//! Value objects describing a preferences screen.
//!
//! - [`Section`]: a titled group of rows rendered as one list block
//! - [`Row`]: one interactive entry, see [`RowKind`]
//! - [`Destination`]: lazily built sub-view attached to a navigation row
//!
//! ```text
//! Section { id, title }
//!   └── Row[] { id }
//!         ├── Navigation  { title, destination }  -> push onto nav stack
//!         └── SocialMedia { image, title, url }   -> open externally
//! ```
//!
//! Models are built once by the caller and only borrowed by the renderer.

mod destination;
mod error;
mod id;
mod row;
mod section;

pub use destination::Destination;
pub use error::ModelError;
pub use id::{RowId, SectionId};
pub use row::{NavigationRow, Row, RowKind, SocialMediaRow};
pub use section::Section;
