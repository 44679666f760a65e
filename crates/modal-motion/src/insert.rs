//! Where Insert mode places the cursor when it is entered.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::motion::Cursor;
use crate::position::Position;
use crate::text_source::{CaretHost, TextSource};

/// Insert-mode entry point relative to the current caret.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum InsertEntry {
    /// Insert before the caret (`i`).
    AtCursor,
    /// Insert at column 0 (`I`).
    LineBegin,
    /// Append after the caret (`a`).
    AfterCursor,
    /// Append at the end of the line (`A`).
    LineEnd,
}

impl InsertEntry {
    /// Move `cursor` to where typing starts for this entry point.
    pub fn target<'a, S>(self, cursor: Cursor<'a, S>) -> Cursor<'a, S>
    where
        S: TextSource + ?Sized,
    {
        match self {
            Self::AtCursor => cursor,
            Self::LineBegin => cursor.line_begin(),
            Self::AfterCursor => cursor.right(),
            Self::LineEnd => cursor.line_end(),
        }
    }

    /// Enter Insert mode on `host`: start from its caret, move, and write the result back.
    pub fn enter<S, H>(self, source: &S, host: &mut H) -> Position
    where
        S: TextSource + ?Sized,
        H: CaretHost,
    {
        let cursor = Cursor::from_host(source, &*host);
        let position = self.target(cursor).apply_to(host).into_position();
        debug!(entry = ?self, line = position.line, column = position.column, "entered insert mode");
        position
    }
}
