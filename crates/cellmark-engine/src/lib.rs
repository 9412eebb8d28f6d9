pub mod classify;
pub mod document;
pub mod error;
pub mod html;
pub mod links;
pub mod outline;
pub mod parsing;
pub mod pipeline;
pub mod render;

// Re-export key types for easier usage
pub use classify::{ContentKind, classify};
pub use document::{DocumentSink, MemoryDocument, write_blocks};
pub use error::MarkupError;
pub use html::{HtmlElement, HtmlNode, parse_elements, sanitize};
pub use links::{CellLink, extract_link, is_hyperlink, render_link_cell};
pub use outline::outline_to_html;
pub use parsing::{
    blocks::{BlockToken, ListItem},
    inline::{InlineToken, tokenize_inline},
    parse_markdown, parse_markdown_with,
};
pub use pipeline::{convert, convert_or_plain, convert_or_plain_with, convert_with};
pub use render::{RenderOptions, RichBlock, StyleAttr, StyleRangeBuilder, StyledRun, StyledText};
