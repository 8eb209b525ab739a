//! JSON layout files describing a preferences screen.
//!
//! ```json
//! {
//!   "title": "Settings",
//!   "assets": { "forgejo": "FJ" },
//!   "sections": [
//!     { "title": "General", "rows": [
//!       { "type": "navigation", "title": "Appearance",
//!         "page": { "body": "Theme: system" } },
//!       { "type": "social_media", "image": "github", "title": "Star us",
//!         "url": "https://github.com/example" }
//!     ] }
//!   ]
//! }
//! ```
//!
//! Navigation rows get a [`TextScreen`](crate::screen::TextScreen) page as
//! destination. Every field except row `type` and the social-media fields
//! has a default.

mod error;

pub use error::LayoutError;

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use serde::Deserialize;
use tracing::debug;

use crate::model::{Destination, Row, Section};
use crate::tui::{AssetCatalog, DEFAULT_TITLE};

/// Top-level layout document.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LayoutFile {
    /// Title of the root screen.
    #[serde(default)]
    pub title: Option<String>,
    /// Extra or overriding glyphs for the asset catalog.
    #[serde(default)]
    pub assets: BTreeMap<String, String>,
    #[serde(default)]
    pub sections: Vec<SectionSpec>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SectionSpec {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub rows: Vec<RowSpec>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RowSpec {
    Navigation {
        title: String,
        #[serde(default)]
        page: PageSpec,
    },
    SocialMedia {
        image: String,
        title: String,
        url: String,
    },
}

/// Text page pushed by a navigation row.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PageSpec {
    /// Page title; defaults to the row title.
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub body: String,
}

/// Models built from a layout file, ready for [`App`](crate::tui::App).
#[derive(Debug, Clone)]
pub struct LoadedLayout {
    pub title: String,
    pub sections: Vec<Section>,
    pub catalog: AssetCatalog,
}

impl FromStr for LayoutFile {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        serde_json::from_str(s).map_err(|source| LayoutError::Parse { path: None, source })
    }
}

impl LayoutFile {
    /// Reads and parses a layout file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LayoutError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| LayoutError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let file = serde_json::from_str(&text).map_err(|source| LayoutError::Parse {
            path: Some(path.to_path_buf()),
            source,
        })?;
        debug!("Loaded layout from {}", path.display());
        Ok(file)
    }

    /// Builds the models. Fails on the first row with a malformed URL.
    pub fn into_layout(self) -> Result<LoadedLayout, LayoutError> {
        let mut catalog = AssetCatalog::bundled();
        catalog.extend(self.assets);

        let sections = self
            .sections
            .into_iter()
            .enumerate()
            .map(|(section_idx, spec)| -> Result<Section, LayoutError> {
                let rows = spec
                    .rows
                    .into_iter()
                    .enumerate()
                    .map(|(row_idx, row)| {
                        build_row(row).map_err(|source| LayoutError::InvalidRow {
                            section: section_idx,
                            row: row_idx,
                            source,
                        })
                    })
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(Section::new(spec.title, rows))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(LoadedLayout {
            title: self.title.unwrap_or_else(|| DEFAULT_TITLE.to_string()),
            sections,
            catalog,
        })
    }
}

fn build_row(spec: RowSpec) -> Result<Row, crate::model::ModelError> {
    match spec {
        RowSpec::Navigation { title, page } => {
            let page_title = page.title.unwrap_or_else(|| title.clone());
            Ok(Row::navigation(title, Destination::text(page_title, page.body)))
        }
        RowSpec::SocialMedia { image, title, url } => Row::social_media(image, title, &url),
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::model::RowKind;

    const EXAMPLE: &str = r#"{
        "title": "Settings",
        "assets": { "forgejo": "FJ" },
        "sections": [
            { "title": "General", "rows": [
                { "type": "navigation", "title": "Appearance",
                  "page": { "body": "Theme: system\nFont: mono" } }
            ] },
            { "title": "About", "rows": [
                { "type": "social_media", "image": "forgejo", "title": "Code",
                  "url": "https://codeberg.org/example" },
                { "type": "social_media", "image": "twitter", "title": "Follow us",
                  "url": "https://example.com/handle" }
            ] },
            { "title": "Empty" }
        ]
    }"#;

    #[test]
    fn parses_example_layout() {
        let layout = EXAMPLE.parse::<LayoutFile>().unwrap().into_layout().unwrap();
        assert_eq!(layout.title, "Settings");
        assert_eq!(layout.catalog.resolve("forgejo"), "FJ");
        assert_eq!(layout.catalog.resolve("github"), "GH");

        let titles: Vec<&str> = layout.sections.iter().map(Section::title).collect();
        assert_eq!(titles, vec!["General", "About", "Empty"]);
        assert!(layout.sections[2].is_empty());

        let rows: Vec<&str> = layout.sections[1].rows().iter().map(Row::title).collect();
        assert_eq!(rows, vec!["Code", "Follow us"]);
        let RowKind::SocialMedia(social) = layout.sections[1].rows()[1].kind() else {
            panic!("expected social media row");
        };
        assert_eq!(social.url().as_str(), "https://example.com/handle");
    }

    #[test]
    fn defaults_apply() {
        let layout = "{}".parse::<LayoutFile>().unwrap().into_layout().unwrap();
        assert_eq!(layout.title, DEFAULT_TITLE);
        assert!(layout.sections.is_empty());
    }

    #[test]
    fn invalid_url_reports_position() {
        let text = r#"{ "sections": [
            { "title": "A", "rows": [] },
            { "title": "B", "rows": [
                { "type": "navigation", "title": "ok" },
                { "type": "social_media", "image": "x", "title": "bad", "url": "nope" }
            ] }
        ] }"#;
        let err = text.parse::<LayoutFile>().unwrap().into_layout().unwrap_err();
        match &err {
            LayoutError::InvalidRow { section, row, .. } => {
                assert_eq!((*section, *row), (1, 1));
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!(err.to_string().contains("section 1, row 1"));
    }

    #[test]
    fn unknown_row_type_is_parse_error() {
        let text = r#"{ "sections": [ { "rows": [ { "type": "toggle", "title": "x" } ] } ] }"#;
        let err = text.parse::<LayoutFile>().unwrap_err();
        assert!(matches!(err, LayoutError::Parse { path: None, .. }));
    }

    #[test]
    fn load_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(EXAMPLE.as_bytes()).unwrap();

        let layout = LayoutFile::load(file.path()).unwrap().into_layout().unwrap();
        assert_eq!(layout.sections.len(), 3);
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.json");
        let err = LayoutFile::load(&path).unwrap_err();
        assert!(matches!(err, LayoutError::Io { .. }));
        assert!(err.to_string().contains("missing.json"));
    }
}
