//! YAML and JSON writers for issues.

use strum::{Display, EnumString};

use crate::error::{Result, TemplateError};
use crate::types::Issue;

/// Supported serialization formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
#[strum(ascii_case_insensitive)]
pub enum OutputFormat {
    #[default]
    Yaml,
    Json,
}

impl OutputFormat {
    /// Parse a format name such as `"yaml"` or `"JSON"`.
    ///
    /// # Errors
    /// Returns `UnsupportedFormat` for any other name.
    pub fn parse(name: &str) -> Result<Self> {
        name.parse()
            .map_err(|_| TemplateError::UnsupportedFormat(name.to_string()))
    }
}

/// Serialize an issue in the given format.
pub fn render(issue: &Issue, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Yaml => to_yaml(issue),
        OutputFormat::Json => to_json(issue),
    }
}

/// Generate pretty-printed JSON from an issue.
pub fn to_json(issue: &Issue) -> Result<String> {
    let mut json = serde_json::to_string_pretty(issue)?;
    json.push('\n');
    Ok(json)
}

/// Generate YAML from an issue.
///
/// Output starts with a document marker. The serializer output is otherwise
/// written unchanged, so multi-line values keep the exact block scalars
/// `serde_yaml_ng` produced.
pub fn to_yaml(issue: &Issue) -> Result<String> {
    let yaml = serde_yaml_ng::to_string(issue)?;
    if yaml.starts_with("---") {
        return Ok(yaml);
    }
    Ok(format!("---\n{yaml}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Article, Content, ContentKind, Terminology};
    use pretty_assertions::assert_eq;

    fn sample_issue() -> Issue {
        Issue {
            language: Some("nl".to_string()),
            currency: None,
            version: None,
            articles: vec![Article::new(
                Some("Intro".to_string()),
                vec![Content::new(
                    "1.1",
                    "Hello",
                    ContentKind::OutputTable {
                        max: Some("5".to_string()),
                        cols: None,
                        sort: None,
                        fold: None,
                    },
                )],
            )],
            terminology: vec![Terminology {
                name: Some("vat".to_string()),
                value: Some("0.21".to_string()),
            }],
        }
    }

    #[test]
    fn test_output_format_parse() {
        assert_eq!(OutputFormat::parse("yaml").unwrap(), OutputFormat::Yaml);
        assert_eq!(OutputFormat::parse("JSON").unwrap(), OutputFormat::Json);
        assert!(matches!(
            OutputFormat::parse("toml"),
            Err(TemplateError::UnsupportedFormat(name)) if name == "toml"
        ));
    }

    #[test]
    fn test_output_format_display() {
        assert_eq!(OutputFormat::Yaml.to_string(), "yaml");
        assert_eq!(OutputFormat::default(), OutputFormat::Yaml);
    }

    #[test]
    fn test_to_yaml_document_marker() {
        let yaml = to_yaml(&sample_issue()).unwrap();
        assert!(yaml.starts_with("---\n"));
        assert!(yaml.ends_with('\n'));
        assert!(!yaml.contains("currency"));
    }

    #[test]
    fn test_to_yaml_is_valid_yaml() {
        let yaml = to_yaml(&sample_issue()).unwrap();
        let parsed: serde_yaml_ng::Value = serde_yaml_ng::from_str(&yaml).unwrap();
        assert_eq!(parsed["articles"][0]["content"][0]["display"], "output/table");
        assert_eq!(parsed["terminology"][0]["name"], "vat");
    }

    #[test]
    fn test_to_json() {
        let json = to_json(&sample_issue()).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(
            parsed["articles"][0]["content"][0],
            serde_json::json!({
                "displayId": "1.1",
                "value": "Hello",
                "display": "output/table",
                "max": "5"
            })
        );
    }

    #[test]
    fn test_render_dispatches_on_format() {
        let issue = sample_issue();
        assert_eq!(render(&issue, OutputFormat::Json).unwrap(), to_json(&issue).unwrap());
        assert_eq!(render(&issue, OutputFormat::Yaml).unwrap(), to_yaml(&issue).unwrap());
    }

    fn issue_with_paragraph(text: &str) -> Issue {
        Issue {
            language: None,
            currency: None,
            version: None,
            articles: vec![Article::new(
                Some("A".to_string()),
                vec![Content::new("1.1", text, ContentKind::PlainText)],
            )],
            terminology: Vec::new(),
        }
    }

    fn yaml_round_trip(text: &str) -> String {
        let yaml = to_yaml(&issue_with_paragraph(text)).unwrap();
        let parsed: serde_yaml_ng::Value = serde_yaml_ng::from_str(&yaml).unwrap();
        parsed["articles"][0]["content"][0]["value"]
            .as_str()
            .unwrap()
            .to_string()
    }

    #[test]
    fn test_to_yaml_keeps_dash_lines_in_values() {
        let text = "Steps:\n- one\n  - two\nend";
        assert_eq!(yaml_round_trip(text), text);
    }

    #[test]
    fn test_to_yaml_keeps_nested_indentation_in_values() {
        let text = "Costs\n    rent: 950\n        - water\n  total";
        assert_eq!(yaml_round_trip(text), text);
    }

    #[test]
    fn test_to_yaml_keeps_dash_only_value() {
        let text = "- first\n- second";
        assert_eq!(yaml_round_trip(text), text);
    }
}
