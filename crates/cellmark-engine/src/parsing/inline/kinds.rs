use std::sync::OnceLock;

use regex::{Captures, Regex};

use super::types::InlineToken;

/// The inline constructs recognised by the tokenizer.
///
/// Each kind owns its delimiter pattern. Every pattern requires at least one
/// character of content, so a match always consumes input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InlineKind {
    Link,
    Code,
    Bold,
    Italic,
    Strikethrough,
}

impl InlineKind {
    /// Tie-break order for matches starting at the same offset.
    pub const PRIORITY: [InlineKind; 5] = [
        InlineKind::Link,
        InlineKind::Code,
        InlineKind::Bold,
        InlineKind::Italic,
        InlineKind::Strikethrough,
    ];

    pub fn pattern(self) -> &'static Regex {
        static PATTERNS: OnceLock<[Regex; 5]> = OnceLock::new();
        let patterns = PATTERNS.get_or_init(|| {
            [
                r"\[([^\]]+)\]\(([^)]+)\)",
                r"`([^`]+)`",
                r"\*\*(.+?)\*\*",
                r"\*([^*]+)\*",
                r"~~(.+?)~~",
            ]
            .map(|pattern| Regex::new(pattern).expect("Invalid inline regex"))
        });
        &patterns[self as usize]
    }

    /// Builds the token for a match of this kind's pattern.
    pub fn token(self, caps: &Captures<'_>) -> InlineToken {
        let group = |i: usize| caps.get(i).map_or(String::new(), |m| m.as_str().to_string());
        match self {
            InlineKind::Link => InlineToken::Link {
                text: group(1),
                url: group(2),
            },
            InlineKind::Code => InlineToken::Code { text: group(1) },
            InlineKind::Bold => InlineToken::Bold { text: group(1) },
            InlineKind::Italic => InlineToken::Italic { text: group(1) },
            InlineKind::Strikethrough => InlineToken::Strikethrough { text: group(1) },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn patterns_line_up_with_kinds() {
        assert!(InlineKind::Link.pattern().is_match("[a](b)"));
        assert!(InlineKind::Code.pattern().is_match("`a`"));
        assert!(InlineKind::Bold.pattern().is_match("**a**"));
        assert!(InlineKind::Italic.pattern().is_match("*a*"));
        assert!(InlineKind::Strikethrough.pattern().is_match("~~a~~"));
    }

    #[test]
    fn patterns_reject_empty_content() {
        assert!(!InlineKind::Link.pattern().is_match("[](b)"));
        assert!(!InlineKind::Code.pattern().is_match("``"));
        assert!(!InlineKind::Bold.pattern().is_match("****"));
        assert!(!InlineKind::Italic.pattern().is_match("**"));
        assert!(!InlineKind::Strikethrough.pattern().is_match("~~~~"));
    }

    #[test]
    fn link_token_carries_url() {
        let caps = InlineKind::Link
            .pattern()
            .captures("[docs](https://example.com)")
            .unwrap();
        assert_eq!(
            InlineKind::Link.token(&caps),
            InlineToken::Link {
                text: "docs".into(),
                url: "https://example.com".into()
            }
        );
    }
}
