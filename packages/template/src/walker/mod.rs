//! Tag dispatch and tree walking for template articles.
//!
//! Each recognized element below an `<article>` becomes one [`Content`]
//! record. The walk keeps a per-tag occurrence counter for the article, which
//! produces the `"<article>.<count>"` display identifiers.
//!
//! [`Content`]: crate::types::Content

mod builder;
mod context;
mod engine;
mod tag;

pub use builder::build_content;
pub use context::IterContext;
pub use engine::TreeWalker;
pub use tag::Tag;
