//! Configuration constants and validation functions for the template reader.

use crate::error::{Result, TemplateError};

/// Tag name of a top-level titled section.
pub const ARTICLE_TAG: &str = "article";

/// Tag name of a document-wide name/value definition.
pub const DEFINITION_TAG: &str = "definition";

/// Attribute holding an article's title.
pub const TITLE_ATTR: &str = "title";

/// Attribute holding the primary value of most vocabulary tags.
pub const VALUE_ATTR: &str = "value";

/// Attribute holding the name of an expression or definition.
pub const NAME_ATTR: &str = "name";

/// Root element attribute: document language.
pub const LANGUAGE_ATTR: &str = "language";

/// Root element attribute: currency code.
pub const CURRENCY_ATTR: &str = "currency";

/// Root element attribute: template version.
pub const VERSION_ATTR: &str = "version";

/// Scope marker placed in the `def` field of content built from a definition.
pub const LOCAL_DEFINITION_SCOPE: &str = "local";

/// Default maximum input file size in bytes (10 MB).
///
/// Templates are hand-written documents; anything larger is almost certainly
/// the wrong file. Can be overridden via the CLI `--max-size` flag.
pub const DEFAULT_MAX_INPUT_SIZE: u64 = 10 * 1024 * 1024;

/// Validate that an input of `size` bytes fits within `limit`.
///
/// # Arguments
/// * `path` - Path of the input, used in the error message
/// * `size` - Size of the input in bytes
/// * `limit` - Maximum allowed size in bytes
///
/// # Examples
/// ```
/// use regelrecht_template::config::validate_input_size;
///
/// assert!(validate_input_size("budget.xml", 512, 1024).is_ok());
/// assert!(validate_input_size("budget.xml", 2048, 1024).is_err());
/// ```
pub fn validate_input_size(path: &str, size: u64, limit: u64) -> Result<()> {
    if size > limit {
        return Err(TemplateError::InputTooLarge {
            path: path.to_string(),
            size,
            limit,
        });
    }
    Ok(())
}
