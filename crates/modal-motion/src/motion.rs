//! Motion engine
//!
//! [`Motion`] computes new cursor positions from the current position, the document's lines and a
//! requested movement. One set of algorithms serves both cursor flavors; the flavor only decides
//! the largest column allowed on a line (see [`BoundaryPolicy`]):
//!
//! - [`Caret`]: Normal-mode caret, rests on characters (`[0, len)`)
//! - [`Cursor`]: Insert-mode cursor, may sit past the last character (`[0, len]`)
//!
//! The engine is a small value threaded through calls by ownership. Every motion consumes it and
//! returns the next state, so motions chain naturally:
//!
//! ```rust
//! use modal_motion::{Caret, Position};
//!
//! let lines = vec!["fn main() {", "    body();", "}"];
//! let caret = Caret::new(&lines, Position::new(0, 0)).line_end().left().down();
//! assert_eq!(caret.position(), Position::new(1, 9));
//! ```
//!
//! # Sticky column
//!
//! Horizontal moves (`left`/`right`) record the column the user asked for. Vertical moves
//! (`up`/`down`) target that remembered column and clamp it to the destination line, without
//! overwriting it, so passing through a short line does not lose the original column.
//!
//! # Boundaries
//!
//! Motions are total: at a line or document edge they return the state unchanged (or the
//! documented fallback). The only error is [`MotionError::OutOfRange`] from
//! [`Motion::is_line_end`].

use std::fmt;
use std::marker::PhantomData;
use tracing::{debug, trace, warn};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::boundary::{BoundaryPolicy, CaretBoundary, CursorBoundary};
use crate::error::MotionError;
use crate::position::Position;
use crate::text_source::{CaretHost, TextSource};
use crate::words::WordSeparators;

/// Motion kinds understood by [`Motion::apply`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MotionKind {
    /// One column left (`h`).
    Left,
    /// One column right (`l`).
    Right,
    /// One line up, keeping the sticky column (`k`).
    Up,
    /// One line down, keeping the sticky column (`j`).
    Down,
    /// Previous word start (`b`).
    WordLeft,
    /// Next word start (`w`).
    WordRight,
    /// Column 0 (`0`).
    LineBegin,
    /// Last allowed column of the line (`$`).
    LineEnd,
    /// First non-blank character of the first line.
    FirstLineNonBlankChar,
    /// First non-blank character of the last line.
    LastLineNonBlankChar,
    /// Start of the document.
    DocumentBegin,
    /// End of the last line.
    DocumentEnd,
}

/// Cursor motion engine over a [`TextSource`], parameterized by a [`BoundaryPolicy`].
pub struct Motion<'a, S: ?Sized, B> {
    source: &'a S,
    words: &'a WordSeparators,
    position: Position,
    sticky_column: usize,
    boundary: PhantomData<B>,
}

/// Normal-mode motion engine.
pub type Caret<'a, S> = Motion<'a, S, CaretBoundary>;

/// Insert-mode motion engine.
pub type Cursor<'a, S> = Motion<'a, S, CursorBoundary>;

impl<'a, S, B> Motion<'a, S, B>
where
    S: TextSource + ?Sized,
    B: BoundaryPolicy,
{
    /// Create an engine at `position`. The sticky column starts at `position.column`.
    pub fn new(source: &'a S, position: Position) -> Self {
        Self {
            source,
            words: WordSeparators::standard(),
            position,
            sticky_column: position.column,
            boundary: PhantomData,
        }
    }

    /// Create an engine at `(line, column)`.
    pub fn at(source: &'a S, line: usize, column: usize) -> Self {
        Self::new(source, Position::new(line, column))
    }

    /// Create an engine at the host's live caret.
    pub fn from_host(source: &'a S, host: &impl CaretHost) -> Self {
        Self::new(source, host.caret_position())
    }

    /// Use `words` instead of the default separator set for word motions.
    pub fn with_separators(mut self, words: &'a WordSeparators) -> Self {
        self.words = words;
        self
    }

    /// Current position.
    pub fn position(&self) -> Position {
        self.position
    }

    /// Column remembered for vertical motions.
    pub fn sticky_column(&self) -> usize {
        self.sticky_column
    }

    /// Consume the engine, returning its position.
    pub fn into_position(self) -> Position {
        self.position
    }

    /// Largest column the boundary policy allows on `line`.
    pub fn max_column(&self, line: usize) -> usize {
        B::max_column(self.source.line_len(line))
    }

    /// Returns `true` if `position.column` lies past the line's last allowed column.
    pub fn is_out_of_range(&self, position: Position) -> bool {
        position.column > self.max_column(position.line)
    }

    /// Returns `true` if `position` sits on the line's last allowed column.
    ///
    /// # Errors
    ///
    /// Returns [`MotionError::OutOfRange`] when `position` is out of range; callers must only ask
    /// about positions they know to be valid.
    pub fn is_line_end(&self, position: Position) -> Result<bool, MotionError> {
        let max_column = self.max_column(position.line);
        if position.column > max_column {
            warn!(
                line = position.line,
                column = position.column,
                max_column,
                "line-end query on an out-of-range position"
            );
            return Err(MotionError::OutOfRange {
                line: position.line,
                column: position.column,
                max_column,
            });
        }

        Ok(position.column == max_column)
    }

    /// Resync with the host caret, forgetting the sticky column.
    pub fn reset(mut self, host: &impl CaretHost) -> Self {
        let position = host.caret_position();
        debug!(line = position.line, column = position.column, "motion reset to host caret");
        self.position = position;
        self.sticky_column = position.column;
        self
    }

    /// Collapse the host selection to the engine position.
    pub fn apply_to(self, host: &mut impl CaretHost) -> Self {
        debug!(
            line = self.position.line,
            column = self.position.column,
            "moving host caret"
        );
        host.set_caret(self.position);
        self
    }

    /// Run one motion.
    pub fn apply(self, kind: MotionKind) -> Self {
        match kind {
            MotionKind::Left => self.left(),
            MotionKind::Right => self.right(),
            MotionKind::Up => self.up(),
            MotionKind::Down => self.down(),
            MotionKind::WordLeft => self.word_left(),
            MotionKind::WordRight => self.word_right(),
            MotionKind::LineBegin => self.line_begin(),
            MotionKind::LineEnd => self.line_end(),
            MotionKind::FirstLineNonBlankChar => self.first_line_non_blank_char(),
            MotionKind::LastLineNonBlankChar => self.last_line_non_blank_char(),
            MotionKind::DocumentBegin => self.document_begin(),
            MotionKind::DocumentEnd => self.document_end(),
        }
    }

    /// Run a sequence of motions in order.
    pub fn apply_all(self, kinds: impl IntoIterator<Item = MotionKind>) -> Self {
        kinds.into_iter().fold(self, Self::apply)
    }

    /// One column left. Records the sticky column.
    pub fn left(mut self) -> Self {
        if self.position.column > 0 {
            self.position.column -= 1;
            self.sticky_column = self.position.column;
        }
        self
    }

    /// One column right, up to the line end. Records the sticky column.
    pub fn right(mut self) -> Self {
        if self.position.column < self.max_column(self.position.line) {
            self.position.column += 1;
            self.sticky_column = self.position.column;
        }
        self
    }

    /// One line up, targeting the sticky column.
    pub fn up(mut self) -> Self {
        if self.position.line > 0 {
            self.position = self.vertical_target(self.position.line - 1);
        }
        self
    }

    /// One line down, targeting the sticky column.
    pub fn down(mut self) -> Self {
        if self.position.line < self.last_line() {
            self.position = self.vertical_target(self.position.line + 1);
        }
        self
    }

    /// Start of the next word.
    ///
    /// At the line end this jumps to the first non-blank of the next line. With no further word
    /// on the line it stops at the line end.
    pub fn word_right(mut self) -> Self {
        let Position { line, column } = self.position;

        if column == self.max_column(line) {
            if line < self.last_line() {
                let next = Position::new(line + 1, self.first_non_blank(line + 1));
                trace!(from = line, to = next.line, "word motion wraps to next line");
                self.position = next;
            }
            return self;
        }

        let source = self.source;
        let text = source.line_text(line);
        match self.words.next_stop(&text, column) {
            Some(stop) => {
                self.position = self.position.with_column(stop);
                self
            }
            None => {
                trace!(line, column, "no word ahead, falling back to line end");
                self.line_end()
            }
        }
    }

    /// Start of the previous word.
    ///
    /// From within the leading indentation this jumps to the end of the previous line.
    /// That jump lands on the previous line's `max_column`, not its raw length, so a [`Caret`]
    /// stops on the last character instead of one past it.
    pub fn word_left(mut self) -> Self {
        let Position { line, column } = self.position;
        let source = self.source;

        if column <= source.leading_whitespace(line) && line > 0 {
            let prev = Position::new(line - 1, self.max_column(line - 1));
            trace!(from = line, to = prev.line, "word motion wraps to previous line");
            self.position = prev;
            return self;
        }

        let text = source.line_text(line);
        let stop = self.words.prev_stop(&text, column).unwrap_or(0);
        self.position = self.position.with_column(stop);
        self
    }

    /// Column 0.
    pub fn line_begin(mut self) -> Self {
        self.position = self.position.with_column(0);
        self
    }

    /// Last allowed column of the current line.
    pub fn line_end(mut self) -> Self {
        self.position = self.position.with_column(self.max_column(self.position.line));
        self
    }

    /// First non-blank character of the first line.
    pub fn first_line_non_blank_char(mut self) -> Self {
        self.position = Position::new(0, self.first_non_blank(0));
        self
    }

    /// First non-blank character of the last line.
    pub fn last_line_non_blank_char(mut self) -> Self {
        let line = self.last_line();
        self.position = Position::new(line, self.first_non_blank(line));
        self
    }

    /// Start of the document.
    pub fn document_begin(mut self) -> Self {
        self.position = Position::zero();
        self
    }

    /// End of the last line.
    ///
    /// The column is the full line length for both flavors; the boundary policy is not applied.
    pub fn document_end(mut self) -> Self {
        let line = self.last_line();
        self.position = Position::new(line, self.source.line_len(line));
        self
    }

    fn last_line(&self) -> usize {
        self.source.line_count().saturating_sub(1)
    }

    // Clamped so whitespace-only lines stay within bounds.
    fn first_non_blank(&self, line: usize) -> usize {
        self.source
            .leading_whitespace(line)
            .min(self.max_column(line))
    }

    fn vertical_target(&self, line: usize) -> Position {
        Position::new(line, self.max_column(line).min(self.sticky_column))
    }
}

impl<S: ?Sized, B> Clone for Motion<'_, S, B> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S: ?Sized, B> Copy for Motion<'_, S, B> {}

impl<S: ?Sized, B> fmt::Debug for Motion<'_, S, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Motion")
            .field("position", &self.position)
            .field("sticky_column", &self.sticky_column)
            .field("separators", &self.words.chars())
            .finish()
    }
}
