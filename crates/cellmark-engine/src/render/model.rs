use serde::Serialize;

use crate::parsing::inline::InlineToken;

/// The smallest unit of rendered text: one string with one style combination.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StyledRun {
    pub text: String,
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
    pub strikethrough: bool,
    /// Monospace with the code background.
    pub is_code: bool,
    pub link_url: Option<String>,
}

impl StyledRun {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn italic(mut self) -> Self {
        self.italic = true;
        self
    }

    pub fn underline(mut self) -> Self {
        self.underline = true;
        self
    }

    pub fn strikethrough(mut self) -> Self {
        self.strikethrough = true;
        self
    }

    pub fn code(mut self) -> Self {
        self.is_code = true;
        self
    }

    pub fn link(mut self, url: impl Into<String>) -> Self {
        self.link_url = Some(url.into());
        self
    }

    /// Length in characters, the unit of every style range.
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }
}

impl From<&InlineToken> for StyledRun {
    fn from(token: &InlineToken) -> Self {
        let run = StyledRun::plain(token.text());
        match token {
            InlineToken::Text { .. } => run,
            InlineToken::Bold { .. } => run.bold(),
            InlineToken::Italic { .. } => run.italic(),
            InlineToken::Strikethrough { .. } => run.strikethrough(),
            InlineToken::Code { .. } => run.code(),
            InlineToken::Link { url, .. } => run.link(url.as_str()),
        }
    }
}

/// The renderer's output unit, handed to a
/// [`DocumentSink`](crate::document::DocumentSink) in order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RichBlock {
    Heading { level: u8, runs: Vec<StyledRun> },
    Paragraph { runs: Vec<StyledRun> },
    ListItem {
        ordered: bool,
        /// Nesting depth, 0 for top-level items.
        indent: usize,
        runs: Vec<StyledRun>,
    },
    BlockquoteLine { runs: Vec<StyledRun> },
    /// Raw code, never styled run by run.
    CodeBlock { text: String },
}

impl RichBlock {
    /// Styled runs of the block; code blocks have none.
    pub fn runs(&self) -> &[StyledRun] {
        match self {
            RichBlock::Heading { runs, .. }
            | RichBlock::Paragraph { runs }
            | RichBlock::ListItem { runs, .. }
            | RichBlock::BlockquoteLine { runs } => runs,
            RichBlock::CodeBlock { .. } => &[],
        }
    }

    /// The block's text with all styling dropped.
    pub fn plain_text(&self) -> String {
        match self {
            RichBlock::CodeBlock { text } => text.clone(),
            _ => self.runs().iter().map(|run| run.text.as_str()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inline_tokens_map_to_single_styles() {
        let link = InlineToken::Link {
            text: "docs".into(),
            url: "https://example.com".into(),
        };
        assert_eq!(
            StyledRun::from(&link),
            StyledRun::plain("docs").link("https://example.com")
        );
        assert_eq!(
            StyledRun::from(&InlineToken::Code { text: "x".into() }),
            StyledRun::plain("x").code()
        );
    }

    #[test]
    fn char_len_counts_characters() {
        assert_eq!(StyledRun::plain("héllo").char_len(), 5);
    }

    #[test]
    fn plain_text_joins_runs() {
        let block = RichBlock::Paragraph {
            runs: vec![StyledRun::plain("a "), StyledRun::plain("b").bold()],
        };
        assert_eq!(block.plain_text(), "a b");
    }
}
