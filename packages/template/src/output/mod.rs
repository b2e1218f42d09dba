//! Serialized output of the content model.

mod writer;

pub use writer::{render, to_json, to_yaml, OutputFormat};
