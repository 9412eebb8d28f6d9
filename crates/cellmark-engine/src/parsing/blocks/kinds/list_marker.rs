use std::sync::OnceLock;

use regex::Regex;

/// A list item line: optional indentation, a bullet (`-`, `*`, `+`) or a
/// number followed by `.`, whitespace, then the item text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListMarker<'a> {
    /// Nesting depth: leading whitespace characters divided by the indent width.
    pub indent: usize,
    /// True for `1.` style markers.
    pub ordered: bool,
    pub text: &'a str,
}

impl<'a> ListMarker<'a> {
    pub fn parse(line: &'a str, indent_width: usize) -> Option<Self> {
        static ITEM: OnceLock<Regex> = OnceLock::new();
        let re = ITEM.get_or_init(|| {
            Regex::new(r"^(\s*)([-*+]|\d+\.)\s+(.+)$").expect("Invalid list item regex")
        });

        let caps = re.captures(line)?;
        let leading = caps.get(1)?.as_str().chars().count();
        Some(Self {
            indent: leading / indent_width.max(1),
            ordered: caps.get(2)?.as_str().ends_with('.'),
            text: caps.get(3)?.as_str(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("- a", 0, false, "a")]
    #[case("* a", 0, false, "a")]
    #[case("+ a", 0, false, "a")]
    #[case("1. a", 0, true, "a")]
    #[case("42. a", 0, true, "a")]
    #[case("  - b", 1, false, "b")]
    #[case("   - c", 1, false, "c")]
    #[case("    2. d", 2, true, "d")]
    fn parses_markers(
        #[case] line: &str,
        #[case] indent: usize,
        #[case] ordered: bool,
        #[case] text: &str,
    ) {
        assert_eq!(
            ListMarker::parse(line, 2),
            Some(ListMarker {
                indent,
                ordered,
                text
            })
        );
    }

    #[test]
    fn indent_width_is_configurable() {
        let marker = ListMarker::parse("    - x", 4).unwrap();
        assert_eq!(marker.indent, 1);
    }

    #[test]
    fn not_list_items() {
        assert_eq!(ListMarker::parse("-nospace", 2), None);
        assert_eq!(ListMarker::parse("**bold** text", 2), None);
        assert_eq!(ListMarker::parse("1.5 apples", 2), None);
        assert_eq!(ListMarker::parse("-", 2), None);
    }
}
