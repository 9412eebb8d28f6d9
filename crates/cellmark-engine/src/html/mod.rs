//! # HTML Input
//!
//! Cell text classified as HTML goes through two steps before rendering:
//!
//! 1. **Sanitizing** (`sanitize`): every tag outside [`ALLOWED_TAGS`] is
//!    removed, its text kept
//! 2. **Tree building** (`tree`): the sanitized markup is wrapped in a
//!    synthetic `<div>` and parsed strictly into an [`HtmlElement`] tree
//!
//! Tree building is the one fallible step in the engine. Unbalanced markup
//! such as `<b>bold` is reported as [`MarkupError::Html`](crate::MarkupError)
//! rather than repaired.

pub mod sanitize;
pub mod tree;

pub use sanitize::{ALLOWED_TAGS, is_allowed_tag, sanitize};
pub use tree::{HtmlElement, HtmlNode, ROOT_TAG, parse_elements};
