use crate::parsing::blocks::MarkdownLineClassifier;

/// Background colour given to inline code and code blocks.
pub const DEFAULT_CODE_BACKGROUND: &str = "#efefef";

/// Knobs for parsing and writing that callers may override.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Leading whitespace characters per Markdown list level.
    pub indent_width: usize,
    /// Prefix list items with one tab per nesting level when writing.
    pub indent_with_tabs: bool,
    pub code_background: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            indent_width: MarkdownLineClassifier::DEFAULT_INDENT_WIDTH,
            indent_with_tabs: true,
            code_background: DEFAULT_CODE_BACKGROUND.to_string(),
        }
    }
}
