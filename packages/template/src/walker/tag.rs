//! The fixed tag vocabulary of template articles.

use strum::{AsRefStr, EnumIter, EnumString};

/// A recognized content tag.
///
/// Parsing is ASCII case-insensitive. Any name that does not parse is not
/// part of the vocabulary and is ignored by the walker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, EnumIter, EnumString)]
#[strum(serialize_all = "lowercase")]
#[strum(ascii_case_insensitive)]
pub enum Tag {
    Paragraph,
    Expression,
    Definition,
    Scenario,
    Statement,
    Table,
    Diagram,
}

impl Tag {
    /// Look up a tag by element name.
    ///
    /// # Examples
    /// ```
    /// use regelrecht_template::walker::Tag;
    ///
    /// assert_eq!(Tag::from_name("Table"), Some(Tag::Table));
    /// assert_eq!(Tag::from_name("article"), None);
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        name.parse().ok()
    }

    /// Whether the walker descends into children of this tag.
    ///
    /// Only expressions nest; every other tag is a leaf for the walk.
    #[must_use]
    pub fn recurses(&self) -> bool {
        matches!(self, Self::Expression)
    }
}
