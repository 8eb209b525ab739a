//! Asset catalog resolving image identifiers to terminal glyphs.

use std::collections::HashMap;

use ratatui::text::Span;
use tracing::debug;

/// Glyph drawn when an image identifier is not in the catalog.
pub const PLACEHOLDER_GLYPH: &str = "□";

/// Width of the icon column, in cells.
pub const ICON_WIDTH: usize = 2;

/// Glyphs bundled with the crate, keyed by image identifier.
const BUNDLED: &[(&str, &str)] = &[
    ("github", "GH"),
    ("gitlab", "GL"),
    ("twitter", "X"),
    ("x", "X"),
    ("mastodon", "Md"),
    ("bluesky", "Bs"),
    ("youtube", "YT"),
    ("linkedin", "in"),
    ("instagram", "IG"),
    ("discord", "DC"),
    ("reddit", "Rd"),
    ("website", "WW"),
    ("email", "@"),
    ("rss", "RS"),
];

/// Maps image identifiers to glyphs at most [`ICON_WIDTH`] cells wide.
#[derive(Debug, Clone, Default)]
pub struct AssetCatalog {
    glyphs: HashMap<String, String>,
}

impl AssetCatalog {
    /// Empty catalog; every lookup resolves to the placeholder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalog with the bundled glyphs.
    pub fn bundled() -> Self {
        let mut catalog = Self::new();
        for (name, glyph) in BUNDLED {
            catalog.insert(*name, *glyph);
        }
        catalog
    }

    /// Adds or replaces a glyph. Glyphs wider than [`ICON_WIDTH`] are cut.
    pub fn insert(&mut self, name: impl Into<String>, glyph: impl Into<String>) {
        let name = name.into();
        let glyph = glyph.into();
        let fitted = fit_icon_column(&glyph);
        if fitted.len() < glyph.len() {
            debug!("Glyph '{}' for '{}' cut to '{}'", glyph, name, fitted);
        }
        self.glyphs.insert(name, fitted);
    }

    /// Glyph for `name`, if known. Falls back to a lowercase lookup.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.glyphs
            .get(name)
            .or_else(|| self.glyphs.get(&name.to_lowercase()))
            .map(String::as_str)
    }

    /// Glyph for `name`, or [`PLACEHOLDER_GLYPH`] if unknown.
    pub fn resolve(&self, name: &str) -> &str {
        self.get(name).unwrap_or(PLACEHOLDER_GLYPH)
    }

    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }
}

/// Longest prefix of `glyph` that fits in [`ICON_WIDTH`] cells.
fn fit_icon_column(glyph: &str) -> String {
    let mut used = 0;
    let mut buf = [0u8; 4];
    glyph
        .chars()
        .take_while(|c| {
            used += Span::raw(&*c.encode_utf8(&mut buf)).width();
            used <= ICON_WIDTH
        })
        .collect()
}

impl<K: Into<String>, V: Into<String>> Extend<(K, V)> for AssetCatalog {
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (name, glyph) in iter {
            self.insert(name, glyph);
        }
    }
}
