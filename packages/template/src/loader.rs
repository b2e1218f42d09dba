//! Entry points that go from markup text or files to an [`Issue`].

use std::fs;
use std::path::Path;

use roxmltree::Document;

use crate::analyzer::analyze;
use crate::config::validate_input_size;
use crate::error::Result;
use crate::issue::assemble;
use crate::types::Issue;

/// Read an already parsed document into an [`Issue`].
///
/// Never fails: unknown tags and missing attributes are left out.
#[must_use]
pub fn read_document(doc: &Document<'_>) -> Issue {
    let analysis = analyze(doc);
    assemble(doc, analysis.articles, analysis.terminology)
}

/// Parse template markup and read it into an [`Issue`].
///
/// # Errors
/// Returns `XmlParse` if the text is not well-formed XML.
///
/// # Examples
/// ```
/// use regelrecht_template::parse_issue;
///
/// let xml = r#"<issue language="nl">
///     <article title="Intro"><paragraph>Hello</paragraph><paragraph/></article>
/// </issue>"#;
///
/// let issue = parse_issue(xml).unwrap();
/// assert_eq!(issue.articles[0].content.len(), 1);
/// assert_eq!(issue.articles[0].content[0].display_id, "1.1");
/// ```
pub fn parse_issue(xml: &str) -> Result<Issue> {
    let doc = Document::parse(xml)?;
    Ok(read_document(&doc))
}

/// Load a template file and read it into an [`Issue`].
///
/// # Arguments
/// * `path` - Path to the template file
/// * `max_size` - Maximum accepted file size in bytes
///
/// # Errors
/// Returns `Io` if the file cannot be read, `InputTooLarge` if it exceeds
/// `max_size`, or `XmlParse` if it is not well-formed XML.
pub fn load_issue(path: &Path, max_size: u64) -> Result<Issue> {
    let size = fs::metadata(path)?.len();
    validate_input_size(&path.display().to_string(), size, max_size)?;

    let xml = fs::read_to_string(path)?;
    tracing::debug!(path = %path.display(), bytes = size, "Loaded template");

    parse_issue(&xml)
}
