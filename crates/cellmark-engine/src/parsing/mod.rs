pub mod blocks;
pub mod inline;

use blocks::{BlockBuilder, BlockToken, MarkdownLineClassifier};

/// Parses Markdown cell text into block tokens, two spaces per list level.
pub fn parse_markdown(content: &str) -> Vec<BlockToken> {
    parse_markdown_with(content, MarkdownLineClassifier::DEFAULT_INDENT_WIDTH)
}

/// Parses Markdown cell text, counting `indent_width` leading whitespace
/// characters per list nesting level.
pub fn parse_markdown_with(content: &str, indent_width: usize) -> Vec<BlockToken> {
    let mut builder = BlockBuilder::with_classifier(MarkdownLineClassifier::new(indent_width));

    if !content.is_empty() {
        for line in content.split('\n') {
            builder.push(line);
        }
    }

    builder.finish()
}
