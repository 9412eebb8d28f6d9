use std::fmt;
use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;

/// The markup flavour of a piece of cell text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentKind {
    Markdown,
    Html,
    Plain,
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ContentKind::Markdown => "markdown",
            ContentKind::Html => "html",
            ContentKind::Plain => "plain",
        };
        f.write_str(name)
    }
}

/// Decides how a blob of cell text should be parsed.
///
/// Markdown signals are checked first, so text carrying both a Markdown
/// marker and an HTML tag is Markdown. Only when no Markdown signal is found
/// is the text checked for a tag, and anything else is plain.
pub fn classify(text: &str) -> ContentKind {
    let kind = if is_markdown(text) {
        ContentKind::Markdown
    } else if is_html(text) {
        ContentKind::Html
    } else {
        ContentKind::Plain
    };
    log::debug!("classified {} bytes of cell text as {kind}", text.len());
    kind
}

/// Returns true if any Markdown signal appears in `text`.
pub fn is_markdown(text: &str) -> bool {
    markdown_signals().iter().any(|re| re.is_match(text))
}

/// Returns true if `text` contains something shaped like an opening or
/// closing tag.
pub fn is_html(text: &str) -> bool {
    static TAG: OnceLock<Regex> = OnceLock::new();
    TAG.get_or_init(|| Regex::new(r"(?is)</?[a-z].*>").expect("Invalid tag regex"))
        .is_match(text)
}

fn markdown_signals() -> &'static [Regex] {
    static SIGNALS: OnceLock<Vec<Regex>> = OnceLock::new();
    SIGNALS.get_or_init(|| {
        [
            // heading
            r"(?m)^#{1,6}[ \t]",
            // emphasis, strikethrough and code spans anywhere
            r"\*\*[^\n]+?\*\*",
            r"\*[^*\n]+\*",
            r"~~[^\n]+?~~",
            r"`[^`\n]+`",
            // bullet and numbered list markers
            r"(?m)^[-*+][ \t]",
            r"(?m)^\d+\.[ \t]",
            // inline link
            r"\[[^\]]+\]\([^)]+\)",
            // blockquote
            r"(?m)^>[ \t]",
            // fenced code
            r"(?s)```.*?```",
        ]
        .iter()
        .map(|pattern| Regex::new(pattern).expect("Invalid markdown signal regex"))
        .collect()
    })
}
