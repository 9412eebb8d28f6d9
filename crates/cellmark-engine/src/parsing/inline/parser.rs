use std::ops::Range;

use super::{kinds::InlineKind, types::InlineToken};

/// Tokenizes one line of Markdown into a sequence of [`InlineToken`]s.
///
/// Text between constructs is emitted as `InlineToken::Text`. Each step
/// consumes at least the matched construct, and the no-match branch consumes
/// the rest of the input, so the loop always terminates.
///
/// # Returns
/// Tokens in source order. Empty input yields no tokens.
pub fn tokenize_inline(text: &str) -> Vec<InlineToken> {
    let mut out = vec![];
    let mut rest = text;

    while !rest.is_empty() {
        let Some((range, token)) = earliest_match(rest) else {
            out.push(InlineToken::Text {
                text: rest.to_string(),
            });
            break;
        };

        if range.start > 0 {
            out.push(InlineToken::Text {
                text: rest[..range.start].to_string(),
            });
        }
        out.push(token);
        rest = &rest[range.end..];
    }

    out
}

/// Finds the construct starting earliest in `s`, preferring higher priority
/// kinds on a tie.
fn earliest_match(s: &str) -> Option<(Range<usize>, InlineToken)> {
    let mut best: Option<(Range<usize>, InlineToken)> = None;

    for kind in InlineKind::PRIORITY {
        let Some(caps) = kind.pattern().captures(s) else {
            continue;
        };
        let Some(whole) = caps.get(0) else {
            continue;
        };
        if best
            .as_ref()
            .is_none_or(|(range, _)| whole.start() < range.start)
        {
            best = Some((whole.range(), kind.token(&caps)));
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn text(s: &str) -> InlineToken {
        InlineToken::Text { text: s.into() }
    }

    #[test]
    fn plain_text_is_one_token() {
        assert_eq!(tokenize_inline("hello world"), vec![text("hello world")]);
    }

    #[test]
    fn empty_input_has_no_tokens() {
        assert!(tokenize_inline("").is_empty());
    }

    #[test]
    fn mixed_emphasis() {
        assert_eq!(
            tokenize_inline("Some **bold** and *italic* text."),
            vec![
                text("Some "),
                InlineToken::Bold {
                    text: "bold".into()
                },
                text(" and "),
                InlineToken::Italic {
                    text: "italic".into()
                },
                text(" text."),
            ]
        );
    }

    #[test]
    fn strikethrough_and_code() {
        assert_eq!(
            tokenize_inline("~~old~~ `new`"),
            vec![
                InlineToken::Strikethrough { text: "old".into() },
                text(" "),
                InlineToken::Code { text: "new".into() },
            ]
        );
    }

    #[test]
    fn link_with_url() {
        assert_eq!(
            tokenize_inline("see [the docs](https://example.com/a?b=c) now"),
            vec![
                text("see "),
                InlineToken::Link {
                    text: "the docs".into(),
                    url: "https://example.com/a?b=c".into()
                },
                text(" now"),
            ]
        );
    }

    #[test]
    fn earliest_start_beats_priority() {
        // italic starts before the link, so it wins even though links rank higher
        assert_eq!(
            tokenize_inline("*a* [b](c)"),
            vec![
                InlineToken::Italic { text: "a".into() },
                text(" "),
                InlineToken::Link {
                    text: "b".into(),
                    url: "c".into()
                },
            ]
        );
    }

    #[test]
    fn bold_beats_italic_at_same_start() {
        assert_eq!(
            tokenize_inline("**x**"),
            vec![InlineToken::Bold { text: "x".into() }]
        );
    }

    #[test]
    fn code_span_is_raw() {
        assert_eq!(
            tokenize_inline("`**not bold**`"),
            vec![InlineToken::Code {
                text: "**not bold**".into()
            }]
        );
    }

    #[test]
    fn link_text_is_not_reparsed() {
        assert_eq!(
            tokenize_inline("[**x**](u)"),
            vec![InlineToken::Link {
                text: "**x**".into(),
                url: "u".into()
            }]
        );
    }

    #[test]
    fn unmatched_delimiters_stay_literal() {
        assert_eq!(tokenize_inline("2 * 3 = 6"), vec![text("2 * 3 = 6")]);
        assert_eq!(
            tokenize_inline("`unclosed code"),
            vec![text("`unclosed code")]
        );
        assert_eq!(tokenize_inline("[text](no close"), vec![text("[text](no close")]);
    }

    #[test]
    fn multibyte_text_is_preserved() {
        assert_eq!(
            tokenize_inline("café **crème** brûlée"),
            vec![
                text("café "),
                InlineToken::Bold {
                    text: "crème".into()
                },
                text(" brûlée"),
            ]
        );
    }
}
