//! Core data types for the template content model.
//!
//! An [`Issue`] is the result of reading one template document: its
//! articles, each holding an ordered list of [`Content`] records, plus the
//! document-wide [`Terminology`] and root metadata.

use std::fmt;

use serde::Serialize;

/// Display category of a content record.
///
/// This is the fixed vocabulary a rendering layer switches on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum DisplayKind {
    /// Static text.
    #[serde(rename = "plain/text")]
    PlainText,

    /// Single input field (expressions and definitions).
    #[serde(rename = "input/text")]
    InputText,

    /// Input form for a scenario.
    #[serde(rename = "input/form")]
    InputForm,

    /// Computed text output.
    #[serde(rename = "output/text")]
    OutputText,

    /// Tabular output.
    #[serde(rename = "output/table")]
    OutputTable,

    /// Chart output.
    #[serde(rename = "output/diagram")]
    OutputDiagram,
}

impl DisplayKind {
    /// Get the string value used in serialized output.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PlainText => "plain/text",
            Self::InputText => "input/text",
            Self::InputForm => "input/form",
            Self::OutputText => "output/text",
            Self::OutputTable => "output/table",
            Self::OutputDiagram => "output/diagram",
        }
    }
}

impl fmt::Display for DisplayKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind-specific fields of a content record.
///
/// Serialized inline with the owning [`Content`]; the variant becomes the
/// `display` key and only populated fields are written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "display")]
pub enum ContentKind {
    /// From `<paragraph>`.
    #[serde(rename = "plain/text")]
    PlainText,

    /// From `<expression>` and `<definition>`.
    #[serde(rename = "input/text")]
    InputText {
        /// Name of the variable this input binds to.
        #[serde(rename = "ref", skip_serializing_if = "Option::is_none")]
        reference: Option<String>,

        /// Declared value type.
        #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
        value_type: Option<String>,

        /// Relation to other inputs (expressions only).
        #[serde(skip_serializing_if = "Option::is_none")]
        rel: Option<String>,

        /// Definition scope (definitions only, always `"local"`).
        #[serde(skip_serializing_if = "Option::is_none")]
        def: Option<String>,
    },

    /// From `<scenario>`.
    #[serde(rename = "input/form")]
    InputForm {
        #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
        form_type: Option<String>,
    },

    /// From `<statement>`.
    #[serde(rename = "output/text")]
    OutputText {
        #[serde(skip_serializing_if = "Option::is_none")]
        action: Option<String>,
    },

    /// From `<table>`.
    #[serde(rename = "output/table")]
    OutputTable {
        #[serde(skip_serializing_if = "Option::is_none")]
        max: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        cols: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        sort: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        fold: Option<String>,
    },

    /// From `<diagram>`.
    #[serde(rename = "output/diagram")]
    OutputDiagram {
        #[serde(skip_serializing_if = "Option::is_none")]
        x: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        y: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        id: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        max: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        fold: Option<String>,
        #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
        diagram_type: Option<String>,
    },
}

impl ContentKind {
    /// Get the display category of this kind.
    #[must_use]
    pub fn display(&self) -> DisplayKind {
        match self {
            Self::PlainText => DisplayKind::PlainText,
            Self::InputText { .. } => DisplayKind::InputText,
            Self::InputForm { .. } => DisplayKind::InputForm,
            Self::OutputText { .. } => DisplayKind::OutputText,
            Self::OutputTable { .. } => DisplayKind::OutputTable,
            Self::OutputDiagram { .. } => DisplayKind::OutputDiagram,
        }
    }
}

/// One displayable unit derived from a recognized markup element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Content {
    /// `"<article ordinal>.<per-tag count>"`, e.g. `"2.3"`.
    ///
    /// Only unique within an article together with the tag kind.
    pub display_id: String,

    /// Primary payload. Empty when the element had nothing to resolve.
    pub value: String,

    /// Display category and its kind-specific fields.
    #[serde(flatten)]
    pub kind: ContentKind,
}

impl Content {
    /// Create a new content record.
    #[must_use]
    pub fn new(display_id: impl Into<String>, value: impl Into<String>, kind: ContentKind) -> Self {
        Self {
            display_id: display_id.into(),
            value: value.into(),
            kind,
        }
    }

    /// Get the display category.
    #[must_use]
    pub fn display(&self) -> DisplayKind {
        self.kind.display()
    }

    /// Whether this record carries a value and belongs in an article.
    #[must_use]
    pub fn has_value(&self) -> bool {
        !self.value.is_empty()
    }
}

/// One top-level titled section of a template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Article {
    /// Title from the `title` attribute.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Content records in document order, all with a non-empty value.
    pub content: Vec<Content>,
}

impl Article {
    /// Create a new article.
    #[must_use]
    pub fn new(title: Option<String>, content: Vec<Content>) -> Self {
        Self { title, content }
    }
}

/// A document-wide name/value definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Terminology {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

/// Complete template with metadata, articles and terminology.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Issue {
    /// Document language from the root element.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Currency code from the root element.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,

    /// Template version from the root element.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    /// Articles in document order.
    pub articles: Vec<Article>,

    /// Definitions in document order.
    pub terminology: Vec<Terminology>,
}

impl Issue {
    /// Total number of content records across all articles.
    #[must_use]
    pub fn content_count(&self) -> usize {
        self.articles.iter().map(|a| a.content.len()).sum()
    }

    /// Find the first terminology entry with the given name.
    #[must_use]
    pub fn find_terminology(&self, name: &str) -> Option<&Terminology> {
        self.terminology
            .iter()
            .find(|t| t.name.as_deref() == Some(name))
    }

    /// Iterate over all content records together with their article.
    pub fn contents(&self) -> impl Iterator<Item = (&Article, &Content)> {
        self.articles
            .iter()
            .flat_map(|article| article.content.iter().map(move |c| (article, c)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample_issue() -> Issue {
        Issue {
            language: Some("nl".to_string()),
            currency: Some("EUR".to_string()),
            version: None,
            articles: vec![
                Article::new(
                    Some("Income".to_string()),
                    vec![
                        Content::new("1.1", "Hello", ContentKind::PlainText),
                        Content::new("1.2", "World", ContentKind::PlainText),
                    ],
                ),
                Article::new(
                    None,
                    vec![Content::new(
                        "2.1",
                        "sum",
                        ContentKind::OutputText { action: None },
                    )],
                ),
            ],
            terminology: vec![
                Terminology {
                    name: Some("rate".to_string()),
                    value: Some("0.21".to_string()),
                },
                Terminology {
                    name: Some("rate".to_string()),
                    value: Some("0.09".to_string()),
                },
            ],
        }
    }

    #[test]
    fn test_display_kind_as_str() {
        assert_eq!(DisplayKind::PlainText.as_str(), "plain/text");
        assert_eq!(DisplayKind::InputForm.as_str(), "input/form");
        assert_eq!(DisplayKind::OutputDiagram.to_string(), "output/diagram");
    }

    #[test]
    fn test_display_kind_serialization_matches_as_str() {
        for kind in [
            DisplayKind::PlainText,
            DisplayKind::InputText,
            DisplayKind::InputForm,
            DisplayKind::OutputText,
            DisplayKind::OutputTable,
            DisplayKind::OutputDiagram,
        ] {
            assert_eq!(
                serde_json::to_string(&kind).unwrap(),
                format!("\"{}\"", kind.as_str())
            );
        }
    }

    #[test]
    fn test_content_kind_display() {
        let kind = ContentKind::OutputTable {
            max: None,
            cols: None,
            sort: None,
            fold: None,
        };
        assert_eq!(kind.display(), DisplayKind::OutputTable);
    }

    #[test]
    fn test_content_serialization_omits_absent_fields() {
        let content = Content::new(
            "1.3",
            "price * amount",
            ContentKind::InputText {
                reference: Some("Euro".to_string()),
                value_type: None,
                rel: None,
                def: None,
            },
        );

        let json = serde_json::to_value(&content).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "displayId": "1.3",
                "value": "price * amount",
                "display": "input/text",
                "ref": "Euro"
            })
        );
    }

    #[test]
    fn test_plain_text_serialization() {
        let content = Content::new("1.1", "Hello", ContentKind::PlainText);

        let json = serde_json::to_value(&content).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "displayId": "1.1",
                "value": "Hello",
                "display": "plain/text"
            })
        );
    }

    #[test]
    fn test_content_has_value() {
        assert!(Content::new("1.1", "x", ContentKind::PlainText).has_value());
        assert!(!Content::new("1.2", "", ContentKind::PlainText).has_value());
    }

    #[test]
    fn test_issue_content_count() {
        assert_eq!(sample_issue().content_count(), 3);
    }

    #[test]
    fn test_issue_find_terminology_first_match() {
        let issue = sample_issue();
        let term = issue.find_terminology("rate").unwrap();
        assert_eq!(term.value.as_deref(), Some("0.21"));
        assert!(issue.find_terminology("missing").is_none());
    }

    #[test]
    fn test_issue_contents_iterates_in_order() {
        let issue = sample_issue();
        let ids: Vec<_> = issue
            .contents()
            .map(|(article, content)| (article.title.clone(), content.display_id.as_str()))
            .collect();
        assert_eq!(
            ids,
            vec![
                (Some("Income".to_string()), "1.1"),
                (Some("Income".to_string()), "1.2"),
                (None, "2.1"),
            ]
        );
    }

    #[test]
    fn test_issue_serialization_omits_absent_metadata() {
        let json = serde_json::to_value(sample_issue()).unwrap();
        assert_eq!(json["language"], "nl");
        assert!(json.get("version").is_none());
        assert_eq!(json["articles"][1].get("title"), None);
    }
}
