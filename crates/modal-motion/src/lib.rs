#![warn(missing_docs)]
//! Modal Motion - Headless Vim-Style Cursor Motions
//!
//! # Overview
//!
//! `modal-motion` computes where a modal editor's cursor goes next. It owns no buffer and draws
//! nothing: the host exposes its lines through [`TextSource`] and, optionally, its live caret
//! through [`CaretHost`]. The engine reads both and hands back a [`Position`].
//!
//! # Core Features
//!
//! - **Linear motions**: left/right/up/down, line begin/end
//! - **Sticky column**: vertical motions remember the column of the last horizontal move
//! - **Word motions**: regex-based line segmentation with a configurable separator set
//! - **Document motions**: document begin/end, first/last line non-blank
//! - **Two cursor flavors**: [`Caret`] (Normal mode) and [`Cursor`] (Insert mode) share every
//!   algorithm and differ only in their [`BoundaryPolicy`]
//!
//! # Quick Start
//!
//! ```rust
//! use modal_motion::{Caret, Cursor, MotionKind, Position};
//!
//! let lines = vec!["foo.bar  baz", "    next"];
//!
//! // Word motions stop at words and punctuation.
//! let caret = Caret::new(&lines, Position::zero()).word_right().word_right();
//! assert_eq!(caret.position(), Position::new(0, 4));
//!
//! // At the end of a line, `w` continues on the next line's first non-blank.
//! let caret = caret.apply_all([MotionKind::LineEnd, MotionKind::WordRight]);
//! assert_eq!(caret.position(), Position::new(1, 4));
//!
//! // An Insert-mode cursor may sit past the last character.
//! let cursor = Cursor::new(&lines, Position::zero()).line_end();
//! assert_eq!(cursor.position(), Position::new(0, 12));
//! ```
//!
//! # Module Description
//!
//! - [`position`] - Logical `(line, column)` positions
//! - [`text_source`] - Read-only line access and the host caret seam
//! - [`boundary`] - Caret/Cursor column bounds
//! - [`words`] - Word segmentation
//! - [`motion`] - The motion engine
//! - [`insert`] - Insert-mode entry points
//! - [`options`] - Motion configuration
//!
//! # Unicode Support
//!
//! - Columns count `char`s, not bytes
//! - Whitespace follows Unicode's definition

pub mod boundary;
mod error;
pub mod insert;
pub mod motion;
pub mod options;
pub mod position;
pub mod text_source;
pub mod words;

pub use boundary::{BoundaryPolicy, CaretBoundary, CursorBoundary};
pub use error::MotionError;
pub use insert::InsertEntry;
pub use motion::{Caret, Cursor, Motion, MotionKind};
pub use options::MotionOptions;
pub use position::Position;
pub use text_source::{CaretHost, TextSource};
pub use words::{DEFAULT_NON_WORD_CHARS, Segment, SegmentKind, WordSeparators};
