//! RegelRecht Template - Read budget/report templates into a content model.
//!
//! A template is an XML document whose root carries `language`, `currency`
//! and `version`, and which contains titled `<article>` sections built from
//! a small tag vocabulary (`paragraph`, `expression`, `definition`,
//! `scenario`, `statement`, `table`, `diagram`). This crate turns such a
//! document into an [`Issue`]: one [`Article`] per section with typed
//! [`Content`] records, plus the document-wide [`Terminology`].
//!
//! # Example
//!
//! ```
//! use regelrecht_template::{parse_issue, DisplayKind};
//!
//! let xml = r#"<issue language="nl" currency="EUR">
//!     <article title="Income">
//!         <expression name="Euro" value="salary * 12">
//!             <expression name="Sub" value="bonus"/>
//!         </expression>
//!     </article>
//! </issue>"#;
//!
//! let issue = parse_issue(xml).unwrap();
//! let content = &issue.articles[0].content;
//! assert_eq!(content[0].display(), DisplayKind::InputText);
//! assert_eq!(content[0].display_id, "1.1");
//! assert_eq!(content[1].display_id, "1.2");
//! ```
//!
//! # Architecture
//!
//! - [`config`]: Vocabulary constants and input validation
//! - [`types`]: Content model (Issue, Article, Content, Terminology)
//! - [`error`]: Error types and Result alias
//! - [`xml`]: XML utilities and attribute resolution
//! - [`walker`]: Tag dispatch and per-article tree walk
//! - [`analyzer`]: Article and terminology extraction
//! - [`issue`]: Final assembly with root metadata
//! - [`loader`]: Parsing and file loading entry points
//! - [`output`]: YAML and JSON output
//! - [`cli`]: Command-line interface

pub mod analyzer;
pub mod cli;
pub mod config;
pub mod error;
pub mod issue;
pub mod loader;
pub mod output;
pub mod types;
pub mod walker;
pub mod xml;

// Re-export main functions
pub use loader::{load_issue, parse_issue, read_document};

// Re-export commonly used items
pub use error::{Result, TemplateError};
pub use types::{Article, Content, ContentKind, DisplayKind, Issue, Terminology};
