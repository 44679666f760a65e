//! Logical cursor positions.

use std::cmp::Ordering;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Position coordinates (line and column numbers)
///
/// Both coordinates are zero-based. Columns count characters (Unicode scalar values), not bytes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Position {
    /// Zero-based logical line index.
    pub line: usize,
    /// Zero-based column in characters within the logical line.
    pub column: usize,
}

impl Position {
    /// Create a new logical position.
    pub const fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }

    /// The first position of the document.
    pub const fn zero() -> Self {
        Self { line: 0, column: 0 }
    }

    /// Same line, different column.
    pub const fn with_column(self, column: usize) -> Self {
        Self {
            line: self.line,
            column,
        }
    }
}

impl Ord for Position {
    fn cmp(&self, other: &Self) -> Ordering {
        self.line
            .cmp(&other.line)
            .then_with(|| self.column.cmp(&other.column))
    }
}

impl PartialOrd for Position {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl From<(usize, usize)> for Position {
    fn from((line, column): (usize, usize)) -> Self {
        Self::new(line, column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn orders_by_line_then_column() {
        assert!(Position::new(0, 9) < Position::new(1, 0));
        assert!(Position::new(2, 1) < Position::new(2, 3));
        assert_eq!(Position::new(4, 4).cmp(&Position::new(4, 4)), Ordering::Equal);
    }

    #[test]
    fn with_column_keeps_line() {
        let pos = Position::new(3, 7).with_column(1);
        assert_eq!(pos, Position::new(3, 1));
        assert_eq!(Position::from((3, 1)), pos);
    }
}
