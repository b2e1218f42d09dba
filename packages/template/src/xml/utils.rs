//! XML utility functions for navigating and extracting data from DOM trees.

use roxmltree::Node;

/// Get the tag name without namespace prefix.
///
/// # Examples
/// ```
/// use roxmltree::Document;
/// use regelrecht_template::xml::get_tag_name;
///
/// let xml = r#"<issue><article title="Budget"/></issue>"#;
/// let doc = Document::parse(xml).unwrap();
/// let article = doc.root_element().first_element_child().unwrap();
/// assert_eq!(get_tag_name(article), "article");
/// ```
pub fn get_tag_name<'a>(node: Node<'a, '_>) -> &'a str {
    node.tag_name().name()
}

/// Check if a node is an element with the given tag name.
///
/// Tag names are compared ASCII case-insensitively, so `<Article>` and
/// `<article>` are the same tag.
pub fn has_tag(node: Node<'_, '_>, tag: &str) -> bool {
    node.is_element() && get_tag_name(node).eq_ignore_ascii_case(tag)
}

/// Find all elements with the given tag name below `node`, in document order.
///
/// The search covers every depth, not just direct children. `node` itself is
/// never part of the result, even when its tag matches.
///
/// # Examples
/// ```
/// use roxmltree::Document;
/// use regelrecht_template::xml::find_elements;
///
/// let xml = r#"<issue><definition/><article><definition/></article></issue>"#;
/// let doc = Document::parse(xml).unwrap();
///
/// assert_eq!(find_elements(doc.root_element(), "definition").count(), 2);
/// ```
pub fn find_elements<'a, 'input>(
    node: Node<'a, 'input>,
    tag: &'a str,
) -> impl Iterator<Item = Node<'a, 'input>> {
    node.descendants().skip(1).filter(move |n| has_tag(*n, tag))
}

/// Get the text content of a node and all its descendants, trimmed.
///
/// Text of nested elements is concatenated in document order, so
/// `<paragraph>Total <b>costs</b></paragraph>` yields `"Total costs"`.
pub fn get_text_content(node: Node<'_, '_>) -> String {
    let text: String = node
        .descendants()
        .filter(|n| n.is_text())
        .filter_map(|n| n.text())
        .collect();
    text.trim().to_string()
}

/// Resolve an attribute against an ordered list of sources.
///
/// Returns the first value that is present and non-empty. Values are
/// returned as written: no trimming or normalization.
///
/// # Arguments
/// * `key` - Attribute name
/// * `sources` - Elements to consult, highest priority first
///
/// # Examples
/// ```
/// use roxmltree::Document;
/// use regelrecht_template::xml::resolve_attribute;
///
/// let xml = r#"<article value="fallback"><table value=""/></article>"#;
/// let doc = Document::parse(xml).unwrap();
/// let article = doc.root_element();
/// let table = article.first_element_child().unwrap();
///
/// assert_eq!(resolve_attribute("value", &[table, article]), Some("fallback"));
/// assert_eq!(resolve_attribute("max", &[table, article]), None);
/// ```
pub fn resolve_attribute<'a>(key: &str, sources: &[Node<'a, '_>]) -> Option<&'a str> {
    sources
        .iter()
        .filter_map(|source| source.attribute(key))
        .find(|value| !value.is_empty())
}
