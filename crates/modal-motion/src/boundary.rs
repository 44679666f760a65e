//! Column bounds for the two cursor flavors.
//!
//! The motion algorithms are shared; the only thing that differs between a Normal-mode caret and
//! an Insert-mode cursor is how far right the column may go on a line.

/// Largest column a cursor may occupy on a line of a given length.
pub trait BoundaryPolicy {
    /// Maximum column on a line of `line_len` characters.
    fn max_column(line_len: usize) -> usize;
}

/// Normal-mode bounds: the caret rests on an existing character, never past the last one.
///
/// Valid columns: `[0, len)`, or exactly `0` on an empty line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CaretBoundary;

/// Insert-mode bounds: the cursor may sit one past the last character.
///
/// Valid columns: `[0, len]`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CursorBoundary;

impl BoundaryPolicy for CaretBoundary {
    fn max_column(line_len: usize) -> usize {
        line_len.saturating_sub(1)
    }
}

impl BoundaryPolicy for CursorBoundary {
    fn max_column(line_len: usize) -> usize {
        line_len
    }
}
