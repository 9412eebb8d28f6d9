use crate::parsing::inline::tokenize_inline;

use super::{
    classify::{LineClass, MarkdownLineClassifier},
    kinds::ListMarker,
    types::{BlockToken, ListItem},
};

#[derive(Debug)]
struct OpenList {
    ordered: bool,
    items: Vec<ListItem>,
}

/// Single-pass state machine turning lines into [`BlockToken`]s.
///
/// Two states: normal, and inside a code fence. At most one list is open at
/// a time; anything that is not a list item of the same marker style closes
/// it.
pub struct BlockBuilder {
    classifier: MarkdownLineClassifier,
    /// Raw lines of the open fence, `None` outside a fence.
    fence: Option<Vec<String>>,
    list: Option<OpenList>,
    out: Vec<BlockToken>,
}

impl BlockBuilder {
    pub fn new() -> Self {
        Self::with_classifier(MarkdownLineClassifier::default())
    }

    pub fn with_classifier(classifier: MarkdownLineClassifier) -> Self {
        Self {
            classifier,
            fence: None,
            list: None,
            out: vec![],
        }
    }

    /// Feeds one line, without its terminator.
    pub fn push(&mut self, line: &str) {
        let line = line.trim_end_matches('\r');
        let class = self.classifier.classify(line);

        if let Some(lines) = self.fence.as_mut() {
            if class == LineClass::Fence {
                self.close_fence();
            } else {
                lines.push(line.to_string());
            }
            return;
        }

        match class {
            LineClass::Fence => {
                self.flush_list();
                self.fence = Some(vec![]);
            }
            LineClass::Blank => {
                self.flush_list();
                self.out.push(BlockToken::blank());
            }
            LineClass::Heading { level, text } => {
                self.flush_list();
                self.out.push(BlockToken::Header {
                    level,
                    content: tokenize_inline(text),
                });
            }
            LineClass::ListItem(marker) => self.push_list_item(marker),
            LineClass::Quote { text } => {
                self.flush_list();
                self.out.push(BlockToken::Blockquote {
                    content: tokenize_inline(text),
                });
            }
            LineClass::Text { text } => {
                self.flush_list();
                self.out.push(BlockToken::Paragraph {
                    content: tokenize_inline(text),
                });
            }
        }
    }

    pub fn finish(mut self) -> Vec<BlockToken> {
        // EOF flush: an unterminated fence keeps everything after it as code
        if self.fence.is_some() {
            self.close_fence();
        }
        self.flush_list();
        self.out
    }

    fn push_list_item(&mut self, marker: ListMarker<'_>) {
        if self
            .list
            .as_ref()
            .is_some_and(|list| list.ordered != marker.ordered)
        {
            self.flush_list();
        }

        let list = self.list.get_or_insert_with(|| OpenList {
            ordered: marker.ordered,
            items: vec![],
        });
        list.items.push(ListItem {
            content: tokenize_inline(marker.text),
            indent: marker.indent,
        });
    }

    fn flush_list(&mut self) {
        if let Some(OpenList { ordered, items }) = self.list.take() {
            self.out.push(BlockToken::List { ordered, items });
        }
    }

    fn close_fence(&mut self) {
        if let Some(lines) = self.fence.take() {
            self.out.push(BlockToken::Codeblock {
                content: lines.join("\n"),
            });
        }
    }
}

impl Default for BlockBuilder {
    fn default() -> Self {
        Self::new()
    }
}
