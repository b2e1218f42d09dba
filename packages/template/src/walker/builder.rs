//! Mapping from one markup element to one content record.

use roxmltree::Node;

use super::tag::Tag;
use crate::config::{LOCAL_DEFINITION_SCOPE, NAME_ATTR, VALUE_ATTR};
use crate::types::{Content, ContentKind};
use crate::xml::{get_text_content, resolve_attribute};

/// Build the content record for a recognized element.
///
/// The record is returned even when it has no value; dropping empty records
/// is up to the caller so the counter slot is consumed either way.
///
/// Table and diagram values fall back to the parent element's attributes,
/// so a container can supply defaults that an enclosed element overrides.
///
/// # Arguments
/// * `tag` - The recognized tag of `node`
/// * `node` - The element itself
/// * `display_id` - Identifier already assigned by the walk
#[must_use]
pub fn build_content(tag: Tag, node: Node<'_, '_>, display_id: String) -> Content {
    let own = [node];
    let with_parent: Vec<Node<'_, '_>> = std::iter::once(node)
        .chain(node.parent_element())
        .collect();

    let attr = |key: &str| resolve_attribute(key, &own).map(str::to_string);
    let inherited = |key: &str| resolve_attribute(key, &with_parent).map(str::to_string);
    let text_or_value = || {
        let text = get_text_content(node);
        if text.is_empty() {
            attr(VALUE_ATTR)
        } else {
            Some(text)
        }
    };

    let (value, kind) = match tag {
        Tag::Paragraph => (Some(get_text_content(node)), ContentKind::PlainText),
        Tag::Expression => (
            attr(VALUE_ATTR),
            ContentKind::InputText {
                reference: attr(NAME_ATTR),
                value_type: attr("type"),
                rel: attr("rel"),
                def: None,
            },
        ),
        Tag::Definition => (
            text_or_value(),
            ContentKind::InputText {
                reference: attr(NAME_ATTR),
                value_type: attr("type"),
                rel: None,
                def: Some(LOCAL_DEFINITION_SCOPE.to_string()),
            },
        ),
        Tag::Scenario => (
            attr(VALUE_ATTR),
            ContentKind::InputForm {
                form_type: attr("type"),
            },
        ),
        Tag::Statement => (
            text_or_value(),
            ContentKind::OutputText {
                action: attr("action"),
            },
        ),
        Tag::Table => (
            inherited(VALUE_ATTR),
            ContentKind::OutputTable {
                max: inherited("max"),
                cols: inherited("cols"),
                sort: inherited("sort"),
                fold: inherited("fold"),
            },
        ),
        Tag::Diagram => (
            inherited(VALUE_ATTR),
            ContentKind::OutputDiagram {
                x: inherited("x"),
                y: inherited("y"),
                id: inherited("id"),
                max: inherited("max"),
                fold: inherited("fold"),
                diagram_type: inherited("type"),
            },
        ),
    };

    Content::new(display_id, value.unwrap_or_default(), kind)
}
