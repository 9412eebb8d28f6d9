use serde::Serialize;

use crate::parsing::inline::InlineToken;

/// One item of a [`BlockToken::List`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListItem {
    pub content: Vec<InlineToken>,
    /// Nesting depth, 0 for top-level items.
    pub indent: usize,
}

/// A structural unit of parsed Markdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum BlockToken {
    /// An ATX heading, level 1 to 6.
    Header {
        level: u8,
        content: Vec<InlineToken>,
    },
    /// A line of body text. Empty content marks a blank-line break.
    Paragraph { content: Vec<InlineToken> },
    /// Consecutive items sharing one marker style.
    List { ordered: bool, items: Vec<ListItem> },
    /// A `>` line.
    Blockquote { content: Vec<InlineToken> },
    /// Raw fenced code, fence lines excluded, joined with `\n`.
    Codeblock { content: String },
}

impl BlockToken {
    /// The break marker emitted for a blank line.
    pub fn blank() -> Self {
        BlockToken::Paragraph { content: vec![] }
    }
}
