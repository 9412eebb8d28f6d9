use std::sync::OnceLock;

use regex::Regex;

/// Single-level blockquote line: `>` then the quoted text.
pub struct BlockQuote;

impl BlockQuote {
    /// Returns the quoted text when `line` is a blockquote line.
    pub fn parse(line: &str) -> Option<&str> {
        static QUOTE: OnceLock<Regex> = OnceLock::new();
        let re = QUOTE.get_or_init(|| Regex::new(r"^>\s*(.+)$").expect("Invalid quote regex"));
        Some(re.captures(line)?.get(1)?.as_str())
    }
}
