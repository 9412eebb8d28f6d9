use std::ops::Range;

use crate::render::StyleAttr;

/// A growing rich document that blocks can be appended to and styled.
///
/// Every `append_*` call adds one block at the end and returns a handle to
/// it. Offsets and ranges are in characters, relative to the block's text.
pub trait DocumentSink {
    type Handle: Copy;

    fn append_heading(&mut self, level: u8) -> Self::Handle;
    fn append_paragraph(&mut self) -> Self::Handle;
    /// `indent` is the nesting depth; the glyph follows `ordered`.
    fn append_list_item(&mut self, ordered: bool, indent: usize) -> Self::Handle;
    fn append_quote_line(&mut self) -> Self::Handle;
    fn append_code_block(&mut self, text: &str) -> Self::Handle;

    /// Inserts `text` at character `offset`. The new characters take the
    /// attributes of the character before them.
    fn insert_text(&mut self, handle: Self::Handle, offset: usize, text: &str);
    fn text_len(&self, handle: Self::Handle) -> usize;
    /// Sets one attribute over a half-open character range.
    fn apply(&mut self, handle: Self::Handle, range: Range<usize>, attr: &StyleAttr);
}
