//! Row models: navigation rows and social-media link rows.

use url::Url;

use super::{Destination, ModelError, RowId};

/// One entry of a section.
#[derive(Debug, Clone)]
pub struct Row {
    id: RowId,
    kind: RowKind,
}

/// What a row does when activated.
#[derive(Debug, Clone)]
pub enum RowKind {
    /// Pushes a sub-view onto the navigation stack.
    Navigation(NavigationRow),
    /// Opens a URL in the system handler.
    SocialMedia(SocialMediaRow),
}

/// Row that navigates to a sub-view.
#[derive(Debug, Clone)]
pub struct NavigationRow {
    title: String,
    destination: Destination,
}

/// Row linking to an external page, shown with an icon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SocialMediaRow {
    image: String,
    title: String,
    url: Url,
}

impl Row {
    /// Creates a row of the given kind with a fresh identity.
    pub fn new(kind: RowKind) -> Self {
        Self {
            id: RowId::generate(),
            kind,
        }
    }

    /// Navigation row showing `title` and pushing `destination` when activated.
    pub fn navigation(title: impl Into<String>, destination: Destination) -> Self {
        Self::new(RowKind::Navigation(NavigationRow::new(title, destination)))
    }

    /// Social-media row; fails if `url` does not parse as an absolute URL.
    pub fn social_media(
        image: impl Into<String>,
        title: impl Into<String>,
        url: &str,
    ) -> Result<Self, ModelError> {
        let url = Url::parse(url).map_err(|source| ModelError::InvalidUrl {
            input: url.to_string(),
            source,
        })?;
        Ok(Self::new(RowKind::SocialMedia(SocialMediaRow::new(
            image, title, url,
        ))))
    }

    pub fn id(&self) -> RowId {
        self.id
    }

    pub fn kind(&self) -> &RowKind {
        &self.kind
    }

    /// Title shown in the list, whatever the kind.
    pub fn title(&self) -> &str {
        match &self.kind {
            RowKind::Navigation(nav) => nav.title(),
            RowKind::SocialMedia(social) => social.title(),
        }
    }
}

impl From<NavigationRow> for Row {
    fn from(row: NavigationRow) -> Self {
        Row::new(RowKind::Navigation(row))
    }
}

impl From<SocialMediaRow> for Row {
    fn from(row: SocialMediaRow) -> Self {
        Row::new(RowKind::SocialMedia(row))
    }
}

impl NavigationRow {
    pub fn new(title: impl Into<String>, destination: Destination) -> Self {
        Self {
            title: title.into(),
            destination,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn destination(&self) -> &Destination {
        &self.destination
    }
}

impl SocialMediaRow {
    pub fn new(image: impl Into<String>, title: impl Into<String>, url: Url) -> Self {
        Self {
            image: image.into(),
            title: title.into(),
            url,
        }
    }

    /// Image identifier, resolved against the asset catalog at render time.
    pub fn image(&self) -> &str {
        &self.image
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn url(&self) -> &Url {
        &self.url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn social_media_row_parses_url() {
        let row = Row::social_media("twitter", "Follow us", "https://example.com/handle")
            .expect("valid url");
        let RowKind::SocialMedia(social) = row.kind() else {
            panic!("expected social media row");
        };
        assert_eq!(social.image(), "twitter");
        assert_eq!(social.title(), "Follow us");
        assert_eq!(social.url().as_str(), "https://example.com/handle");
    }

    #[test]
    fn social_media_row_rejects_malformed_url() {
        let err = Row::social_media("twitter", "Follow us", "not a url").unwrap_err();
        match &err {
            ModelError::InvalidUrl { input, source } => {
                assert_eq!(input, "not a url");
                assert_eq!(*source, url::ParseError::RelativeUrlWithoutBase);
            }
        }
        assert!(err.to_string().contains("not a url"));
    }

    #[test]
    fn social_media_row_rejects_empty_url() {
        assert!(Row::social_media("github", "Code", "").is_err());
    }

    #[test]
    fn navigation_row_keeps_title() {
        let row = Row::navigation("Appearance", Destination::text("Appearance", "Dark"));
        assert_eq!(row.title(), "Appearance");
        assert!(matches!(row.kind(), RowKind::Navigation(_)));
    }

    #[test]
    fn rows_get_distinct_ids_and_clones_keep_theirs() {
        let a = Row::navigation("A", Destination::text("A", ""));
        let b = Row::navigation("A", Destination::text("A", ""));
        assert_ne!(a.id(), b.id());
        assert_eq!(a.clone().id(), a.id());
    }

    #[test]
    fn from_impls_wrap_kind() {
        let url = Url::parse("https://github.com/example").unwrap();
        let row: Row = SocialMediaRow::new("github", "Code", url).into();
        assert_eq!(row.title(), "Code");
        let row: Row = NavigationRow::new("About", Destination::text("About", "")).into();
        assert_eq!(row.title(), "About");
    }
}
