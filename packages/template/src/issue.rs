//! Assembly of the final [`Issue`] from a document and its analysis.

use roxmltree::Document;

use crate::config::{CURRENCY_ATTR, LANGUAGE_ATTR, VERSION_ATTR};
use crate::types::{Article, Issue, Terminology};
use crate::xml::resolve_attribute;

/// Combine root metadata with extracted articles and terminology.
///
/// `language`, `currency` and `version` are read from the root element
/// as-is; missing or empty attributes stay `None`.
#[must_use]
pub fn assemble(doc: &Document<'_>, articles: Vec<Article>, terminology: Vec<Terminology>) -> Issue {
    let root = [doc.root_element()];
    let metadata = |key: &str| resolve_attribute(key, &root).map(str::to_string);

    Issue {
        language: metadata(LANGUAGE_ATTR),
        currency: metadata(CURRENCY_ATTR),
        version: metadata(VERSION_ATTR),
        articles,
        terminology,
    }
}
