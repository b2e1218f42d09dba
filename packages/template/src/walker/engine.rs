//! Tree walker that turns one article into content records.

use roxmltree::Node;

use super::builder::build_content;
use super::context::IterContext;
use super::tag::Tag;
use crate::types::Content;
use crate::xml::get_tag_name;

/// Walker for a single article.
///
/// Visits the article's direct children in document order and dispatches
/// every recognized element to [`build_content`]. Expressions are the only
/// elements whose children are visited as well; they share the article's
/// counters, so a nested expression continues the same numbering as the
/// top-level ones.
#[derive(Debug, Clone, Copy)]
pub struct TreeWalker {
    ordinal: usize,
}

impl TreeWalker {
    /// Create a walker for the article at 1-based position `ordinal`.
    #[must_use]
    pub fn new(ordinal: usize) -> Self {
        Self { ordinal }
    }

    /// Walk an article and return the filled accumulator.
    ///
    /// The records are in traversal order and still include ones without a
    /// value; see
    /// [`TreeWalker::walk_filtered`] for the article view.
    #[must_use]
    pub fn walk(&self, article: Node<'_, '_>) -> IterContext {
        let mut context = IterContext::new(self.ordinal);
        self.visit_children(article, &mut context);
        context
    }

    /// Walk an article and keep only records with a non-empty value.
    ///
    /// Dropped records keep their counter slot, so display identifiers of
    /// later siblings are not renumbered.
    #[must_use]
    pub fn walk_filtered(&self, article: Node<'_, '_>) -> Vec<Content> {
        self.walk(article)
            .into_contents()
            .into_iter()
            .filter(|content| {
                let keep = content.has_value();
                if !keep {
                    tracing::trace!(
                        display_id = %content.display_id,
                        display = %content.display(),
                        "Dropping content without value"
                    );
                }
                keep
            })
            .collect()
    }

    fn visit_children(&self, parent: Node<'_, '_>, context: &mut IterContext) {
        for child in parent.children() {
            self.visit(child, context);
        }
    }

    fn visit(&self, node: Node<'_, '_>, context: &mut IterContext) {
        if !node.is_element() {
            return;
        }

        let Some(tag) = Tag::from_name(get_tag_name(node)) else {
            tracing::trace!(
                tag = %get_tag_name(node),
                article = self.ordinal,
                "Ignoring element outside the vocabulary"
            );
            return;
        };

        let display_id = context.next_display_id(tag);
        context.push(build_content(tag, node, display_id));

        if tag.recurses() {
            self.visit_children(node, context);
        }
    }
}
