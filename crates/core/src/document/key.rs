/// Discriminator for the content records kept in the store.
///
/// The site stores exactly one content document. Repositories are keyed by
/// this enum rather than a free-form string so a second record cannot be
/// addressed by accident.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentKind {
    Homepage,
}

const HOMEPAGE_TAG: &str = "homepage";

impl DocumentKind {
    /// Parse a stored type tag. Unknown tags yield `None`.
    pub fn parse(tag: &str) -> Option<Self> {
        match tag {
            HOMEPAGE_TAG => Some(DocumentKind::Homepage),
            _ => None,
        }
    }

    /// The type tag written alongside the record.
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentKind::Homepage => HOMEPAGE_TAG,
        }
    }
}

impl std::fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
