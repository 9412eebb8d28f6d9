use std::ops::Range;
use std::sync::OnceLock;

use regex::Regex;

use crate::render::{RichBlock, StyledRun, render_plain};

/// A URL found in cell text, split from the words around it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellLink {
    /// The remaining text, or the URL itself when nothing else is left.
    pub text: String,
    pub url: String,
}

/// Byte range of the first `http://` or `https://` URL in `text`.
///
/// Trailing punctuation that usually ends a sentence is not part of the URL.
pub fn find_url(text: &str) -> Option<Range<usize>> {
    static URL_REGEX: OnceLock<Regex> = OnceLock::new();
    let url_regex =
        URL_REGEX.get_or_init(|| Regex::new(r"https?://[^\s<>\[\]]+").expect("Invalid URL regex"));

    url_regex.find(text).map(|found| {
        let trimmed = found
            .as_str()
            .trim_end_matches(['.', ',', ':', ';', '!', '?', ')', ']', '}']);
        found.start()..found.start() + trimmed.len()
    })
}

pub fn is_hyperlink(text: &str) -> bool {
    find_url(text).is_some()
}

/// Splits the first URL out of `text`.
pub fn extract_link(text: &str) -> Option<CellLink> {
    let range = find_url(text)?;
    let url = &text[range.clone()];
    let before = text[..range.start].trim();
    let after = text[range.end..].trim();

    let rest = match (before.is_empty(), after.is_empty()) {
        (true, true) => url.to_string(),
        (false, true) => before.to_string(),
        (true, false) => after.to_string(),
        (false, false) => format!("{before} {after}"),
    };

    Some(CellLink {
        text: rest,
        url: url.to_string(),
    })
}

/// Renders a cell that may hold a link as one paragraph whose whole text
/// links to the URL. Cells without a URL render as plain text.
pub fn render_link_cell(text: &str) -> Vec<RichBlock> {
    match extract_link(text) {
        Some(link) => vec![RichBlock::Paragraph {
            runs: vec![StyledRun::plain(link.text).link(link.url)],
        }],
        None => render_plain(text),
    }
}
