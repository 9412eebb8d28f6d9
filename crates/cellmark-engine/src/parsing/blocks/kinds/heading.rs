use std::sync::OnceLock;

use regex::Regex;

/// ATX heading: one to six `#`, whitespace, then the heading text.
pub struct Heading;

impl Heading {
    /// Returns `(level, text)` when `line` is a heading.
    pub fn parse(line: &str) -> Option<(u8, &str)> {
        static HEADING: OnceLock<Regex> = OnceLock::new();
        let re = HEADING
            .get_or_init(|| Regex::new(r"^(#{1,6})\s+(.+)$").expect("Invalid heading regex"));

        let caps = re.captures(line)?;
        let level = caps.get(1)?.as_str().len() as u8;
        Some((level, caps.get(2)?.as_str()))
    }
}
