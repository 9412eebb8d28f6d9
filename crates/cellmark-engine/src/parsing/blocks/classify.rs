use super::kinds::{BlockQuote, CodeFence, Heading, ListMarker};

/// Classification of a single line containing only local facts.
///
/// This is phase 1 of block parsing: each line is classified independently
/// without reference to surrounding context. Whether the line sits inside a
/// code fence is the builder's business.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineClass<'a> {
    /// Opens or closes a code fence.
    Fence,
    /// Whitespace only.
    Blank,
    Heading { level: u8, text: &'a str },
    ListItem(ListMarker<'a>),
    Quote { text: &'a str },
    /// Anything else: a paragraph line.
    Text { text: &'a str },
}

/// Classifies individual lines for the block parsing phase.
pub struct MarkdownLineClassifier {
    /// Leading whitespace characters per list nesting level.
    pub indent_width: usize,
}

impl MarkdownLineClassifier {
    pub const DEFAULT_INDENT_WIDTH: usize = 2;

    pub fn new(indent_width: usize) -> Self {
        Self { indent_width }
    }

    /// Classifies a line (without its terminator) into a [`LineClass`].
    ///
    /// Checks run in precedence order: fence, blank, heading, list item,
    /// blockquote, and finally plain text.
    pub fn classify<'a>(&self, line: &'a str) -> LineClass<'a> {
        if CodeFence::is_delimiter(line) {
            return LineClass::Fence;
        }
        if line.trim().is_empty() {
            return LineClass::Blank;
        }
        if let Some((level, text)) = Heading::parse(line) {
            return LineClass::Heading { level, text };
        }
        if let Some(marker) = ListMarker::parse(line, self.indent_width) {
            return LineClass::ListItem(marker);
        }
        if let Some(text) = BlockQuote::parse(line) {
            return LineClass::Quote { text };
        }
        LineClass::Text { text: line }
    }
}

impl Default for MarkdownLineClassifier {
    fn default() -> Self {
        Self::new(Self::DEFAULT_INDENT_WIDTH)
    }
}
