use crate::classify::{ContentKind, classify};
use crate::error::MarkupError;
use crate::html::{parse_elements, sanitize};
use crate::parsing::parse_markdown_with;
use crate::render::{RenderOptions, RichBlock, render_html, render_markdown, render_plain};

/// Classifies `text` and renders it with the matching path, using default
/// options.
pub fn convert(text: &str) -> Result<Vec<RichBlock>, MarkupError> {
    convert_with(text, &RenderOptions::default())
}

/// Classifies `text` and renders it with the matching path.
///
/// # Errors
/// [`MarkupError::Html`] when text classified as HTML is not well-formed
/// after sanitizing. Markdown and plain text never fail.
pub fn convert_with(text: &str, options: &RenderOptions) -> Result<Vec<RichBlock>, MarkupError> {
    let blocks = match classify(text) {
        ContentKind::Markdown => render_markdown(&parse_markdown_with(text, options.indent_width)),
        ContentKind::Html => {
            let sanitized = sanitize(text);
            log::debug!("sanitized html: {sanitized:?}");
            render_html(&parse_elements(&sanitized)?)
        }
        ContentKind::Plain => render_plain(text),
    };
    log::debug!("rendered {} blocks", blocks.len());
    Ok(blocks)
}

pub fn convert_or_plain(text: &str) -> Vec<RichBlock> {
    convert_or_plain_with(text, &RenderOptions::default())
}

/// Like [`convert_with`], but HTML that fails to parse is logged and
/// rendered as plain text.
pub fn convert_or_plain_with(text: &str, options: &RenderOptions) -> Vec<RichBlock> {
    convert_with(text, options).unwrap_or_else(|err| {
        log::warn!("{err}; rendering cell as plain text");
        render_plain(text)
    })
}
