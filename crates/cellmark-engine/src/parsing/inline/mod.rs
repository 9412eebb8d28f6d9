//! # Inline Tokenizing
//!
//! Splits a single line of Markdown text into styled fragments.
//!
//! ## Architecture
//!
//! Inline tokenizing runs after block parsing, over the text of headers,
//! paragraphs, list items and blockquotes. Code blocks never reach it.
//!
//! The tokenizer repeatedly looks for the earliest-starting match of any
//! inline construct in the unconsumed text:
//! - Text before the match becomes a `Text` token
//! - The match becomes its typed token
//! - When nothing matches, the remainder is one final `Text` token
//!
//! ## Modules
//!
//! - **`types`**: `InlineToken` enum (Text, Bold, Italic, Strikethrough, Code, Link)
//! - **`kinds`**: `InlineKind` with the delimiter pattern owned by each construct
//! - **`parser`**: `tokenize_inline()` main entry point
//!
//! ## Priority
//!
//! When two constructs start at the same offset the first in
//! `InlineKind::PRIORITY` wins: link, code, bold, italic, strikethrough.
//! Unmatched delimiters (a lone `*`, an unclosed backtick) stay literal text.

pub mod kinds;
pub mod parser;
pub mod types;

pub use kinds::InlineKind;
pub use parser::tokenize_inline;
pub use types::InlineToken;
