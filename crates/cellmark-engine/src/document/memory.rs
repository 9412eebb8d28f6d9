use std::fmt;
use std::ops::Range;

use serde::Serialize;

use crate::render::StyleAttr;

use super::sink::DocumentSink;

/// The full attribute state of one character.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CharAttrs {
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
    pub strikethrough: bool,
    pub monospace: bool,
    pub background: Option<String>,
    pub link: Option<String>,
}

impl CharAttrs {
    pub fn set(&mut self, attr: &StyleAttr) {
        match attr {
            StyleAttr::Bold(on) => self.bold = *on,
            StyleAttr::Italic(on) => self.italic = *on,
            StyleAttr::Underline(on) => self.underline = *on,
            StyleAttr::Strikethrough(on) => self.strikethrough = *on,
            StyleAttr::Monospace(on) => self.monospace = *on,
            StyleAttr::Background(color) => self.background = color.clone(),
            StyleAttr::Link(url) => self.link = url.clone(),
        }
    }

    fn flags(&self) -> Vec<String> {
        let mut flags = vec![];
        for (on, name) in [
            (self.bold, "b"),
            (self.italic, "i"),
            (self.underline, "u"),
            (self.strikethrough, "s"),
            (self.monospace, "mono"),
        ] {
            if on {
                flags.push(name.to_string());
            }
        }
        if let Some(color) = &self.background {
            flags.push(format!("bg={color}"));
        }
        if let Some(url) = &self.link {
            flags.push(format!("link={url}"));
        }
        flags
    }
}

/// What a [`MemoryBlock`] was appended as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BlockKind {
    Heading { level: u8 },
    Paragraph,
    ListItem { ordered: bool, indent: usize },
    Quote,
    Code,
}

impl fmt::Display for BlockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BlockKind::Heading { level } => write!(f, "h{level}"),
            BlockKind::Paragraph => write!(f, "p"),
            BlockKind::ListItem { ordered, indent } => {
                let glyph = if *ordered { "number" } else { "bullet" };
                write!(f, "li({glyph},{indent})")
            }
            BlockKind::Quote => write!(f, "quote"),
            BlockKind::Code => write!(f, "code"),
        }
    }
}

/// One block of a [`MemoryDocument`]: characters with their attributes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryBlock {
    kind: BlockKind,
    chars: Vec<char>,
    attrs: Vec<CharAttrs>,
}

impl MemoryBlock {
    fn new(kind: BlockKind) -> Self {
        Self {
            kind,
            chars: vec![],
            attrs: vec![],
        }
    }

    pub fn kind(&self) -> BlockKind {
        self.kind
    }

    pub fn text(&self) -> String {
        self.chars.iter().collect()
    }

    /// Attributes of every character, parallel to [`text`](Self::text).
    pub fn attrs(&self) -> &[CharAttrs] {
        &self.attrs
    }

    /// Maximal stretches of characters sharing the same attributes.
    pub fn segments(&self) -> Vec<(String, &CharAttrs)> {
        let mut out: Vec<(String, &CharAttrs)> = vec![];
        for (c, attrs) in self.chars.iter().zip(&self.attrs) {
            match out.last_mut() {
                Some((text, last)) if *last == attrs => text.push(*c),
                _ => out.push((c.to_string(), attrs)),
            }
        }
        out
    }

    fn insert(&mut self, offset: usize, text: &str) {
        let offset = offset.min(self.chars.len());
        let inherited = match offset {
            0 => self.attrs.first().cloned().unwrap_or_default(),
            _ => self.attrs[offset - 1].clone(),
        };

        let chars: Vec<char> = text.chars().collect();
        let count = chars.len();
        self.chars.splice(offset..offset, chars);
        self.attrs
            .splice(offset..offset, std::iter::repeat_n(inherited, count));
    }

    fn apply(&mut self, range: Range<usize>, attr: &StyleAttr) {
        let end = range.end.min(self.attrs.len());
        let start = range.start.min(end);
        for attrs in &mut self.attrs[start..end] {
            attrs.set(attr);
        }
    }
}

impl fmt::Display for MemoryBlock {
    /// `p: [plain] [bold]{b} [code]{mono,bg=#efefef}`, with line breaks and
    /// tabs escaped.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:", self.kind)?;
        for (text, attrs) in self.segments() {
            let text = text.replace('\n', "\\n").replace('\t', "\\t");
            write!(f, " [{text}]")?;
            let flags = attrs.flags();
            if !flags.is_empty() {
                write!(f, "{{{}}}", flags.join(","))?;
            }
        }
        Ok(())
    }
}

/// An in-memory [`DocumentSink`] that records per-character attributes.
///
/// Inserted text takes the attributes of the character before it (or the
/// first character when inserting at the start), the way a rich-text editor
/// extends the style under the cursor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryDocument {
    blocks: Vec<MemoryBlock>,
}

impl MemoryDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn blocks(&self) -> &[MemoryBlock] {
        &self.blocks
    }

    fn push(&mut self, block: MemoryBlock) -> usize {
        self.blocks.push(block);
        self.blocks.len() - 1
    }
}

impl fmt::Display for MemoryDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, block) in self.blocks.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{block}")?;
        }
        Ok(())
    }
}

impl DocumentSink for MemoryDocument {
    /// Index into [`MemoryDocument::blocks`].
    type Handle = usize;

    fn append_heading(&mut self, level: u8) -> usize {
        self.push(MemoryBlock::new(BlockKind::Heading { level }))
    }

    fn append_paragraph(&mut self) -> usize {
        self.push(MemoryBlock::new(BlockKind::Paragraph))
    }

    fn append_list_item(&mut self, ordered: bool, indent: usize) -> usize {
        self.push(MemoryBlock::new(BlockKind::ListItem { ordered, indent }))
    }

    fn append_quote_line(&mut self) -> usize {
        self.push(MemoryBlock::new(BlockKind::Quote))
    }

    fn append_code_block(&mut self, text: &str) -> usize {
        let mut block = MemoryBlock::new(BlockKind::Code);
        block.insert(0, text);
        self.push(block)
    }

    fn insert_text(&mut self, handle: usize, offset: usize, text: &str) {
        if let Some(block) = self.blocks.get_mut(handle) {
            block.insert(offset, text);
        }
    }

    fn text_len(&self, handle: usize) -> usize {
        self.blocks.get(handle).map_or(0, |block| block.chars.len())
    }

    fn apply(&mut self, handle: usize, range: Range<usize>, attr: &StyleAttr) {
        if let Some(block) = self.blocks.get_mut(handle) {
            block.apply(range, attr);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn inserted_text_inherits_previous_character() {
        let mut doc = MemoryDocument::new();
        let p = doc.append_paragraph();
        doc.insert_text(p, 0, "ab");
        doc.apply(p, 0..2, &StyleAttr::Bold(true));
        doc.insert_text(p, 2, "cd");

        assert_eq!(doc.blocks()[0].text(), "abcd");
        assert!(doc.blocks()[0].attrs().iter().all(|a| a.bold));
    }

    #[test]
    fn insert_in_the_middle() {
        let mut doc = MemoryDocument::new();
        let p = doc.append_paragraph();
        doc.insert_text(p, 0, "hé!");
        doc.insert_text(p, 2, "llo");
        assert_eq!(doc.blocks()[0].text(), "hélllo!");
        assert_eq!(doc.text_len(p), 7);
    }

    #[test]
    fn apply_clamps_to_block_length() {
        let mut doc = MemoryDocument::new();
        let p = doc.append_paragraph();
        doc.insert_text(p, 0, "abc");
        doc.apply(p, 1..10, &StyleAttr::Italic(true));
        doc.apply(p, 8..9, &StyleAttr::Bold(true));

        let italic: Vec<bool> = doc.blocks()[0].attrs().iter().map(|a| a.italic).collect();
        assert_eq!(italic, vec![false, true, true]);
        assert!(doc.blocks()[0].attrs().iter().all(|a| !a.bold));
    }

    #[test]
    fn new_blocks_start_unstyled() {
        let mut doc = MemoryDocument::new();
        let first = doc.append_paragraph();
        doc.insert_text(first, 0, "x");
        doc.apply(first, 0..1, &StyleAttr::Background(Some("#efefef".into())));

        let second = doc.append_quote_line();
        doc.insert_text(second, 0, "y");
        assert_eq!(doc.blocks()[1].attrs()[0], CharAttrs::default());
    }

    #[test]
    fn display_merges_equal_neighbours() {
        let mut doc = MemoryDocument::new();
        let h = doc.append_heading(2);
        doc.insert_text(h, 0, "Title");
        let li = doc.append_list_item(true, 1);
        doc.insert_text(li, 0, "\tone two");
        doc.apply(li, 5..8, &StyleAttr::Bold(true));
        doc.apply(li, 5..8, &StyleAttr::Link(Some("u".into())));
        doc.append_paragraph();

        assert_eq!(
            doc.to_string(),
            "h2: [Title]\nli(number,1): [\\tone ] [two]{b,link=u}\np:"
        );
    }
}
