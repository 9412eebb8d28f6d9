//! Rendering of parsed content into [`RichBlock`]s and, from there, into
//! character-offset style ranges.
//!
//! Each content kind has its own renderer producing the same block model.
//! [`StyleRangeBuilder`] turns a block's runs into a [`StyledText`] that a
//! [`DocumentSink`](crate::document::DocumentSink) can apply.

pub mod html;
pub mod markdown;
pub mod model;
pub mod options;
pub mod plain;
pub mod ranges;

pub use html::{InlineStyle, render_html};
pub use markdown::render_markdown;
pub use model::{RichBlock, StyledRun};
pub use options::{DEFAULT_CODE_BACKGROUND, RenderOptions};
pub use plain::render_plain;
pub use ranges::{StyleAttr, StyleRangeBuilder, StyleSpan, StyledText};
