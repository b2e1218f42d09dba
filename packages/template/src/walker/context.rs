//! Per-article accumulator for the tree walk.

use std::collections::HashMap;

use super::tag::Tag;
use crate::types::Content;

/// Accumulator for one article's walk.
///
/// Holds the records produced so far and how often each tag has been seen.
/// A fresh context is created for every article, so numbering restarts at 1
/// per article and per tag.
#[derive(Debug, Clone, Default)]
pub struct IterContext {
    /// 1-based position of the article in the document.
    ordinal: usize,

    /// Records in traversal order, including ones without a value.
    contents: Vec<Content>,

    /// Occurrences seen so far, keyed by tag.
    counters: HashMap<Tag, usize>,
}

impl IterContext {
    /// Create an empty context for the article at `ordinal`.
    #[must_use]
    pub fn new(ordinal: usize) -> Self {
        Self {
            ordinal,
            ..Self::default()
        }
    }

    /// Count one more occurrence of `tag` and return its display identifier.
    ///
    /// # Examples
    /// ```
    /// use regelrecht_template::walker::{IterContext, Tag};
    ///
    /// let mut ctx = IterContext::new(2);
    /// assert_eq!(ctx.next_display_id(Tag::Table), "2.1");
    /// assert_eq!(ctx.next_display_id(Tag::Paragraph), "2.1");
    /// assert_eq!(ctx.next_display_id(Tag::Table), "2.2");
    /// ```
    pub fn next_display_id(&mut self, tag: Tag) -> String {
        let count = self.counters.entry(tag).or_insert(0);
        *count += 1;
        format!("{}.{}", self.ordinal, count)
    }

    /// Number of occurrences of `tag` seen so far.
    #[must_use]
    pub fn count(&self, tag: Tag) -> usize {
        self.counters.get(&tag).copied().unwrap_or(0)
    }

    /// Article ordinal this context numbers for.
    #[must_use]
    pub fn ordinal(&self) -> usize {
        self.ordinal
    }

    /// Append a record.
    pub fn push(&mut self, content: Content) {
        self.contents.push(content);
    }

    /// Records collected so far.
    #[must_use]
    pub fn contents(&self) -> &[Content] {
        &self.contents
    }

    /// Take ownership of the collected records.
    #[must_use]
    pub fn into_contents(self) -> Vec<Content> {
        self.contents
    }
}
