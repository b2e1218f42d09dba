//! XML utilities for navigating parsed template documents.

mod utils;

pub use utils::{find_elements, get_tag_name, get_text_content, has_tag, resolve_attribute};
