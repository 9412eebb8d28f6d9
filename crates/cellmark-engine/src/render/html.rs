use crate::html::{HtmlElement, HtmlNode};

use super::model::{RichBlock, StyledRun};

/// Inline style carried down the tree walk.
///
/// Passed by value: a tag's style applies to its own descendants only, so
/// siblings after an inline tag start again from the enclosing style.
/// Nested inline tags combine (`<b><i>x</i></b>` is bold and italic).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InlineStyle {
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
}

impl InlineStyle {
    /// The style inside an inline tag, or `None` if `tag` is not inline.
    pub fn enter(self, tag: &str) -> Option<Self> {
        match tag {
            "b" => Some(Self { bold: true, ..self }),
            "i" => Some(Self {
                italic: true,
                ..self
            }),
            "u" => Some(Self {
                underline: true,
                ..self
            }),
            _ => None,
        }
    }

    pub fn run(self, text: &str) -> StyledRun {
        StyledRun {
            text: text.to_string(),
            bold: self.bold,
            italic: self.italic,
            underline: self.underline,
            ..StyledRun::default()
        }
    }
}

/// Renders a sanitized element tree into rich blocks.
///
/// The children of `root` are walked as a block container:
/// - `b`, `i`, `u` and bare text append runs to the open paragraph,
///   opening one if needed. The style of an inline tag also carries into
///   any block elements it contains
/// - `p` and `div` open a new paragraph that later inline siblings keep
///   appending to
/// - `h1`..`h6` become headings, preceded by an empty spacer paragraph when
///   the open paragraph already has text
/// - `ul` and `ol` close the open paragraph and emit one list item per `li`,
///   nested lists one level deeper
/// - `br` adds a line break to the open paragraph and is otherwise ignored
/// - anything else contributes its text, joined with a space
///
/// Whitespace-only text collapses to a single space between runs of the same
/// paragraph and is dropped everywhere else.
pub fn render_html(root: &HtmlElement) -> Vec<RichBlock> {
    let mut walker = HtmlWalker::default();
    walker.container(&root.children, InlineStyle::default(), false);
    walker.out
}

pub fn heading_level(tag: &str) -> Option<u8> {
    match tag {
        "h1" => Some(1),
        "h2" => Some(2),
        "h3" => Some(3),
        "h4" => Some(4),
        "h5" => Some(5),
        "h6" => Some(6),
        _ => None,
    }
}

fn is_list(el: &HtmlElement) -> bool {
    matches!(el.tag_name.as_str(), "ul" | "ol")
}

/// Elements that start on a line of their own inside a list item.
fn is_line_block(el: &HtmlElement) -> bool {
    matches!(el.tag_name.as_str(), "p" | "div") || heading_level(&el.tag_name).is_some()
}

/// Walk state. While a paragraph is open it is always the last block.
#[derive(Default)]
struct HtmlWalker {
    out: Vec<RichBlock>,
    /// Collapsed whitespace waiting for the next run of the open paragraph.
    pending_space: Option<InlineStyle>,
}

impl HtmlWalker {
    /// Walks block-level children under `style`. `open` says whether the
    /// last block is a paragraph still taking runs; the updated flag is
    /// returned.
    fn container(&mut self, nodes: &[HtmlNode], style: InlineStyle, mut open: bool) -> bool {
        for node in nodes {
            open = match node {
                HtmlNode::Text { text } => self.text(text, style, open),
                HtmlNode::Element(el) => self.element(el, style, open),
            };
        }
        open
    }

    fn text(&mut self, text: &str, style: InlineStyle, open: bool) -> bool {
        if text.trim().is_empty() {
            if !text.is_empty() && open && self.open_has_text() {
                self.pending_space = Some(style);
            }
            return open;
        }
        if !open {
            self.open_paragraph();
        }
        self.append(vec![style.run(text)]);
        true
    }

    fn element(&mut self, el: &HtmlElement, style: InlineStyle, open: bool) -> bool {
        let tag = el.tag_name.as_str();

        if let Some(inner) = style.enter(tag) {
            return self.container(&el.children, inner, open);
        }

        if let Some(level) = heading_level(tag) {
            if open && self.open_has_text() {
                self.push_block(RichBlock::Paragraph { runs: vec![] });
            }
            let mut runs = vec![];
            inline_runs(&el.children, style, &mut runs);
            trim_runs(&mut runs);
            self.push_block(RichBlock::Heading { level, runs });
            return false;
        }

        match tag {
            "p" | "div" => {
                self.open_paragraph();
                self.container(&el.children, style, true)
            }
            "ul" | "ol" => {
                self.list(el, style, 0);
                false
            }
            "li" => {
                self.list_item(el, style, false, 0);
                false
            }
            "br" => {
                if open {
                    self.pending_space = None;
                    self.append(vec![StyledRun::plain("\n")]);
                }
                open
            }
            _ => {
                let text = el.text_content();
                if text.is_empty() {
                    return open;
                }
                if open && !self.open_is_empty() {
                    self.pending_space = None;
                    self.append(vec![style.run(&format!(" {text}"))]);
                } else {
                    if !open {
                        self.open_paragraph();
                    }
                    self.append(vec![style.run(&text)]);
                }
                true
            }
        }
    }

    fn list(&mut self, list: &HtmlElement, style: InlineStyle, depth: usize) {
        let ordered = list.tag_name == "ol";
        for child in list.elements() {
            match child.tag_name.as_str() {
                "li" => self.list_item(child, style, ordered, depth),
                "ul" | "ol" => self.list(child, style, depth + 1),
                _ => {}
            }
        }
    }

    fn list_item(&mut self, item: &HtmlElement, style: InlineStyle, ordered: bool, depth: usize) {
        let mut runs = vec![];
        let mut nested = vec![];
        item_content(&item.children, style, &mut runs, &mut nested);
        trim_runs(&mut runs);

        self.push_block(RichBlock::ListItem {
            ordered,
            indent: depth,
            runs,
        });
        for (list, style) in nested {
            self.list(list, style, depth + 1);
        }
    }

    fn open_paragraph(&mut self) {
        self.push_block(RichBlock::Paragraph { runs: vec![] });
    }

    fn push_block(&mut self, block: RichBlock) {
        self.pending_space = None;
        self.out.push(block);
    }

    fn append(&mut self, new_runs: Vec<StyledRun>) {
        let mut new_runs = new_runs
            .into_iter()
            .filter(|run| !run.text.is_empty())
            .peekable();
        if new_runs.peek().is_none() {
            return;
        }
        if let Some(RichBlock::Paragraph { runs }) = self.out.last_mut() {
            if let Some(style) = self.pending_space.take() {
                runs.push(style.run(" "));
            }
            runs.extend(new_runs);
        }
    }

    fn open_is_empty(&self) -> bool {
        self.out
            .last()
            .is_none_or(|block| block.runs().iter().all(|run| run.text.is_empty()))
    }

    fn open_has_text(&self) -> bool {
        self.out
            .last()
            .is_some_and(|block| !block.plain_text().trim().is_empty())
    }
}

/// Collects the runs of a list item. Nested lists are set aside with the
/// style they were found under; paragraphs and headings start a new line.
fn item_content<'a>(
    nodes: &'a [HtmlNode],
    style: InlineStyle,
    runs: &mut Vec<StyledRun>,
    nested: &mut Vec<(&'a HtmlElement, InlineStyle)>,
) {
    for node in nodes {
        match node {
            HtmlNode::Text { text } if text.trim().is_empty() => {
                if !text.is_empty()
                    && runs
                    .last()
                    .is_some_and(|run| !run.text.ends_with(char::is_whitespace))
                {
                    runs.push(style.run(" "));
                }
            }
            HtmlNode::Text { text } => runs.push(style.run(text)),
            HtmlNode::Element(el) if is_list(el) => nested.push((el, style)),
            HtmlNode::Element(el) if el.tag_name == "br" => runs.push(StyledRun::plain("\n")),
            HtmlNode::Element(el) if is_line_block(el) => {
                line_break(runs);
                item_content(&el.children, style, runs, nested);
                line_break(runs);
            }
            HtmlNode::Element(el) => {
                let inner = style.enter(&el.tag_name).unwrap_or(style);
                item_content(&el.children, inner, runs, nested);
            }
        }
    }
}

/// Ends the current line of a list item unless it is empty or already ended.
fn line_break(runs: &mut Vec<StyledRun>) {
    while runs
        .last()
        .is_some_and(|run| run.text.trim().is_empty() && !run.text.ends_with('\n'))
    {
        runs.pop();
    }
    if runs.last().is_some_and(|run| !run.text.ends_with('\n')) {
        runs.push(StyledRun::plain("\n"));
    }
}

fn inline_runs(nodes: &[HtmlNode], style: InlineStyle, runs: &mut Vec<StyledRun>) {
    for node in nodes {
        inline_node(node, style, runs);
    }
}

fn inline_node(node: &HtmlNode, style: InlineStyle, runs: &mut Vec<StyledRun>) {
    match node {
        HtmlNode::Text { text } => {
            if !text.is_empty() {
                runs.push(style.run(text));
            }
        }
        HtmlNode::Element(el) => match style.enter(&el.tag_name) {
            Some(inner) => inline_runs(&el.children, inner, runs),
            None if el.tag_name == "br" => runs.push(StyledRun::plain("\n")),
            None => inline_runs(&el.children, style, runs),
        },
    }
}

/// Drops surrounding whitespace from a run sequence.
fn trim_runs(runs: &mut Vec<StyledRun>) {
    while runs.first().is_some_and(|run| run.text.trim().is_empty()) {
        runs.remove(0);
    }
    while runs.last().is_some_and(|run| run.text.trim().is_empty()) {
        runs.pop();
    }
    if let Some(first) = runs.first_mut() {
        first.text = first.text.trim_start().to_string();
    }
    if let Some(last) = runs.last_mut() {
        last.text = last.text.trim_end().to_string();
    }
}
