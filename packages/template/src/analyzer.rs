//! Document-level analysis: articles and terminology.

use roxmltree::Document;

use crate::config::{ARTICLE_TAG, DEFINITION_TAG, NAME_ATTR, TITLE_ATTR, VALUE_ATTR};
use crate::types::{Article, Terminology};
use crate::walker::TreeWalker;
use crate::xml::{find_elements, resolve_attribute};

/// Articles and terminology extracted from one document.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Analysis {
    /// Articles in document order.
    pub articles: Vec<Article>,

    /// Definitions in document order.
    pub terminology: Vec<Terminology>,
}

/// Analyze a parsed template document.
///
/// The article pass and the terminology pass are independent: a definition
/// inside an article shows up both as article content and as terminology.
pub fn analyze(doc: &Document<'_>) -> Analysis {
    Analysis {
        articles: extract_articles(doc),
        terminology: extract_terminology(doc),
    }
}

/// Build one [`Article`] per `<article>` element, in document order.
///
/// Each article gets its own walker, numbered from 1. Articles with equal
/// titles or equal content are all kept. The root element is the issue
/// container and is never an article itself, whatever its tag.
pub fn extract_articles(doc: &Document<'_>) -> Vec<Article> {
    find_elements(doc.root_element(), ARTICLE_TAG)
        .enumerate()
        .map(|(index, node)| {
            let ordinal = index + 1;
            let title = resolve_attribute(TITLE_ATTR, &[node]).map(str::to_string);
            let content = TreeWalker::new(ordinal).walk_filtered(node);

            tracing::debug!(
                article = ordinal,
                title = title.as_deref().unwrap_or_default(),
                content = content.len(),
                "Analyzed article"
            );

            Article::new(title, content)
        })
        .collect()
}

/// Collect every `<definition>` element in the document as terminology.
///
/// Placement does not matter; definitions inside articles are included.
pub fn extract_terminology(doc: &Document<'_>) -> Vec<Terminology> {
    let terminology: Vec<Terminology> = find_elements(doc.root_element(), DEFINITION_TAG)
        .map(|node| Terminology {
            name: resolve_attribute(NAME_ATTR, &[node]).map(str::to_string),
            value: resolve_attribute(VALUE_ATTR, &[node]).map(str::to_string),
        })
        .collect();

    tracing::debug!(count = terminology.len(), "Extracted terminology");
    terminology
}
