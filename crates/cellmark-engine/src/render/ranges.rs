use std::ops::Range;

use super::model::StyledRun;

/// One text attribute set over a character range.
///
/// Every run sets all of its on/off attributes explicitly, so text inserted
/// next to a styled neighbour never keeps a style it should not have.
/// Background is the exception: only code sets it, and a separate
/// normalisation pass clears it everywhere else.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StyleAttr {
    Bold(bool),
    Italic(bool),
    Underline(bool),
    Strikethrough(bool),
    Monospace(bool),
    Background(Option<String>),
    Link(Option<String>),
}

/// Attributes recorded for a half-open character range of a [`StyledText`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleSpan {
    pub range: Range<usize>,
    pub attrs: Vec<StyleAttr>,
}

/// The concatenated text of a block with its style ranges.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StyledText {
    pub text: String,
    /// One span per non-empty run, contiguous and in order.
    pub spans: Vec<StyleSpan>,
    /// Ranges that must carry the code background, tracked apart from the
    /// spans so they can be re-applied last.
    pub code_ranges: Vec<Range<usize>>,
    pub code_background: String,
}

impl StyledText {
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    /// The text covered by a character range.
    pub fn slice(&self, range: &Range<usize>) -> String {
        self.text
            .chars()
            .skip(range.start)
            .take(range.end.saturating_sub(range.start))
            .collect()
    }

    /// Background operations to run after all spans are applied: clear the
    /// whole buffer of `buffer_len` characters, then restore every code range.
    ///
    /// Afterwards a character has the code background if and only if it lies
    /// in a code range, whatever the insertion order left behind. Returns
    /// nothing when there is no code or the buffer is empty.
    pub fn background_normalization(&self, buffer_len: usize) -> Vec<(Range<usize>, StyleAttr)> {
        if self.code_ranges.is_empty() || buffer_len == 0 {
            return vec![];
        }

        let mut ops = vec![(0..buffer_len, StyleAttr::Background(None))];
        ops.extend(self.code_ranges.iter().map(|range| {
            (
                range.clone(),
                StyleAttr::Background(Some(self.code_background.clone())),
            )
        }));
        ops
    }
}

/// Builds a [`StyledText`] by appending runs and tracking a running
/// character cursor.
///
/// Ranges come from accumulating run lengths, never from scanning the
/// rendered text.
#[derive(Debug)]
pub struct StyleRangeBuilder {
    text: String,
    cursor: usize,
    spans: Vec<StyleSpan>,
    code_ranges: Vec<Range<usize>>,
    code_background: String,
}

impl StyleRangeBuilder {
    pub fn new(code_background: impl Into<String>) -> Self {
        Self {
            text: String::new(),
            cursor: 0,
            spans: vec![],
            code_ranges: vec![],
            code_background: code_background.into(),
        }
    }

    /// Current end of the buffer, in characters.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Appends unstyled text, such as list indentation.
    pub fn push_plain(&mut self, text: &str) {
        self.push_run(&StyledRun::plain(text));
    }

    pub fn push_run(&mut self, run: &StyledRun) {
        let len = run.char_len();
        if len == 0 {
            return;
        }

        let range = self.cursor..self.cursor + len;
        let mut attrs = vec![
            StyleAttr::Bold(run.bold),
            StyleAttr::Italic(run.italic),
            StyleAttr::Underline(run.underline),
            StyleAttr::Strikethrough(run.strikethrough),
            StyleAttr::Monospace(run.is_code),
            StyleAttr::Link(run.link_url.clone()),
        ];
        if run.is_code {
            attrs.push(StyleAttr::Background(Some(self.code_background.clone())));
            self.code_ranges.push(range.clone());
        }

        self.text.push_str(&run.text);
        self.spans.push(StyleSpan { range, attrs });
        self.cursor += len;
    }

    pub fn extend<'a>(&mut self, runs: impl IntoIterator<Item = &'a StyledRun>) {
        for run in runs {
            self.push_run(run);
        }
    }

    pub fn finish(self) -> StyledText {
        StyledText {
            text: self.text,
            spans: self.spans,
            code_ranges: self.code_ranges,
            code_background: self.code_background,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::DEFAULT_CODE_BACKGROUND;
    use pretty_assertions::assert_eq;

    fn build(runs: &[StyledRun]) -> StyledText {
        let mut builder = StyleRangeBuilder::new(DEFAULT_CODE_BACKGROUND);
        builder.extend(runs);
        builder.finish()
    }

    #[test]
    fn ranges_accumulate_run_lengths() {
        let text = build(&[
            StyledRun::plain("ab"),
            StyledRun::plain("code").code(),
            StyledRun::plain("cd"),
        ]);

        assert_eq!(text.text, "abcodecd");
        let ranges: Vec<_> = text.spans.iter().map(|s| s.range.clone()).collect();
        assert_eq!(ranges, vec![0..2, 2..6, 6..8]);
        assert_eq!(text.code_ranges, vec![2..6]);
    }

    #[test]
    fn normalization_clears_then_restores_code() {
        let text = build(&[
            StyledRun::plain("ab"),
            StyledRun::plain("code").code(),
            StyledRun::plain("cd"),
        ]);

        assert_eq!(
            text.background_normalization(text.char_len()),
            vec![
                (0..8, StyleAttr::Background(None)),
                (
                    2..6,
                    StyleAttr::Background(Some(DEFAULT_CODE_BACKGROUND.into()))
                ),
            ]
        );
    }

    #[test]
    fn no_normalization_without_code() {
        let text = build(&[StyledRun::plain("a").bold()]);
        assert!(text.background_normalization(text.char_len()).is_empty());
    }

    #[test]
    fn offsets_are_characters_not_bytes() {
        let text = build(&[StyledRun::plain("héé"), StyledRun::plain("x").italic()]);
        assert_eq!(text.spans[1].range, 3..4);
        assert_eq!(text.slice(&(3..4)), "x");
    }

    #[test]
    fn empty_runs_leave_no_span() {
        let text = build(&[StyledRun::plain(""), StyledRun::plain("a")]);
        assert_eq!(text.spans.len(), 1);
        assert_eq!(text.spans[0].range, 0..1);
    }

    #[test]
    fn prefix_shifts_following_ranges() {
        let mut builder = StyleRangeBuilder::new(DEFAULT_CODE_BACKGROUND);
        builder.push_plain("\t\t");
        builder.push_run(&StyledRun::plain("x").code());
        assert_eq!(builder.cursor(), 3);
        assert_eq!(builder.finish().code_ranges, vec![2..3]);
    }
}
