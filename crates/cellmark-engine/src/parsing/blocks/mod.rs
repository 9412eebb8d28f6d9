//! # Block Parsing
//!
//! Two-phase, single-pass block parsing over the lines of a cell.
//!
//! ## Parsing Phases
//!
//! 1. **Line Classification** (`classify`): Each line is classified into a
//!    `LineClass` from local facts only (fence delimiter, blank, heading,
//!    list marker, quote prefix)
//!
//! 2. **Block Construction** (`builder`): A `BlockBuilder` tracks the fence
//!    state and the open list, and emits `BlockToken`s in source order
//!
//! ## Modules
//!
//! - **`types`**: Core types (`BlockToken`, `ListItem`)
//! - **`kinds`**: Block-specific types with owned delimiters (CodeFence, Heading, ListMarker, BlockQuote)
//! - **`classify`**: `MarkdownLineClassifier` produces `LineClass` for each line
//! - **`builder`**: `BlockBuilder` state machine for block construction
//!
//! ## Key Invariants
//!
//! - Fenced code blocks are raw zones: no block/inline parsing inside
//! - A list token never mixes bullet and numbered items
//! - A blank line closes the open list and emits an empty paragraph
//! - Blocks are never reordered or merged

pub mod builder;
pub mod classify;
pub mod kinds;
pub mod types;

pub use builder::BlockBuilder;
pub use classify::{LineClass, MarkdownLineClassifier};
pub use types::{BlockToken, ListItem};
