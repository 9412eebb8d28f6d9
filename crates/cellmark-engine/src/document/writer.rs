use crate::render::{RenderOptions, RichBlock, StyleAttr, StyleRangeBuilder, StyledText};

use super::sink::DocumentSink;

/// Appends `blocks` to `sink` in order.
///
/// Each block's runs are inserted one at a time at a running cursor and
/// styled over their own range. Because inserted text inherits its
/// neighbour's attributes, a block with inline code finishes with the
/// background normalisation so only code ranges keep the code background.
pub fn write_blocks<S: DocumentSink>(blocks: &[RichBlock], sink: &mut S, options: &RenderOptions) {
    for block in blocks {
        let handle = match block {
            RichBlock::CodeBlock { text } => {
                write_code_block(sink, text, options);
                continue;
            }
            RichBlock::Heading { level, .. } => sink.append_heading(*level),
            RichBlock::Paragraph { .. } => sink.append_paragraph(),
            RichBlock::ListItem {
                ordered, indent, ..
            } => sink.append_list_item(*ordered, *indent),
            RichBlock::BlockquoteLine { .. } => sink.append_quote_line(),
        };
        write_styled(sink, handle, &styled_text(block, options));
    }
}

/// Builds the text and style ranges written for one block.
///
/// List items are prefixed with one tab per nesting level when
/// `indent_with_tabs` is set. Code blocks have no runs and give empty text.
pub fn styled_text(block: &RichBlock, options: &RenderOptions) -> StyledText {
    let mut builder = StyleRangeBuilder::new(options.code_background.as_str());
    if let RichBlock::ListItem { indent, .. } = block
        && options.indent_with_tabs
    {
        builder.push_plain(&"\t".repeat(*indent));
    }
    builder.extend(block.runs());
    builder.finish()
}

fn write_styled<S: DocumentSink>(sink: &mut S, handle: S::Handle, styled: &StyledText) {
    for span in &styled.spans {
        sink.insert_text(handle, span.range.start, &styled.slice(&span.range));
        for attr in &span.attrs {
            sink.apply(handle, span.range.clone(), attr);
        }
    }

    for (range, attr) in styled.background_normalization(sink.text_len(handle)) {
        sink.apply(handle, range, &attr);
    }
}

fn write_code_block<S: DocumentSink>(sink: &mut S, text: &str, options: &RenderOptions) {
    let handle = sink.append_code_block(text);
    let len = sink.text_len(handle);
    if len == 0 {
        return;
    }

    let attrs = [
        StyleAttr::Bold(false),
        StyleAttr::Italic(false),
        StyleAttr::Underline(false),
        StyleAttr::Strikethrough(false),
        StyleAttr::Link(None),
        StyleAttr::Monospace(true),
        StyleAttr::Background(Some(options.code_background.clone())),
    ];
    for attr in &attrs {
        sink.apply(handle, 0..len, attr);
    }
}
