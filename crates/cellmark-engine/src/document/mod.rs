//! # Document Writing
//!
//! The last step of the pipeline: [`RichBlock`](crate::render::RichBlock)s
//! are appended to a rich document one block at a time and styled through
//! character ranges.
//!
//! - **`sink`**: [`DocumentSink`], the handle-based API a target document
//!   exposes
//! - **`writer`**: [`write_blocks`], which inserts runs at a running cursor
//!   and finishes each block with the code-background normalisation
//! - **`memory`**: [`MemoryDocument`], an in-memory sink with per-character
//!   attributes, used by the CLI and tests

pub mod memory;
pub mod sink;
pub mod writer;

pub use memory::{BlockKind, CharAttrs, MemoryBlock, MemoryDocument};
pub use sink::DocumentSink;
pub use writer::{styled_text, write_blocks};
