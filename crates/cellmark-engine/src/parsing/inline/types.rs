use serde::Serialize;

/// A styled fragment of a line, produced by [`tokenize_inline`](super::tokenize_inline).
///
/// Every variant carries the visible text with its delimiters stripped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum InlineToken {
    /// Text that isn't part of any inline construct.
    Text { text: String },
    /// `**text**`
    Bold { text: String },
    /// `*text*`
    Italic { text: String },
    /// `~~text~~`
    Strikethrough { text: String },
    /// `` `text` ``. Nothing inside a code span is parsed.
    Code { text: String },
    /// `[text](url)`
    Link { text: String, url: String },
}

impl InlineToken {
    /// The visible text of the token.
    pub fn text(&self) -> &str {
        match self {
            InlineToken::Text { text }
            | InlineToken::Bold { text }
            | InlineToken::Italic { text }
            | InlineToken::Strikethrough { text }
            | InlineToken::Code { text }
            | InlineToken::Link { text, .. } => text,
        }
    }
}
