//! Read-only line access used by the motion engine.
//!
//! The engine never caches line text between calls: every motion re-reads what it needs through
//! [`TextSource`], so a host may mutate its document freely between two motions.

use ropey::Rope;
use std::borrow::Cow;

use crate::position::Position;

/// Line-oriented view of a document.
///
/// Line text never includes the line terminator. Lines past the end of the document read as
/// empty.
pub trait TextSource {
    /// Number of logical lines. An empty document may report `0`.
    fn line_count(&self) -> usize;

    /// Text of `line` without its terminator.
    fn line_text(&self, line: usize) -> Cow<'_, str>;

    /// Length of `line` in characters.
    fn line_len(&self, line: usize) -> usize {
        self.line_text(line).chars().count()
    }

    /// Number of leading whitespace characters on `line`.
    fn leading_whitespace(&self, line: usize) -> usize {
        leading_whitespace_in(&self.line_text(line))
    }
}

/// The host's live caret.
///
/// The engine only touches it when explicitly handed one (`Motion::from_host`, `Motion::reset`,
/// `Motion::apply_to`).
pub trait CaretHost {
    /// Current caret position.
    fn caret_position(&self) -> Position;

    /// Collapse the host selection to `position`.
    fn set_caret(&mut self, position: Position);
}

// Same whitespace definition as the word tokenizer's `\s`.
pub(crate) fn leading_whitespace_in(text: &str) -> usize {
    text.chars().take_while(|ch| ch.is_whitespace()).count()
}

impl TextSource for Rope {
    fn line_count(&self) -> usize {
        self.len_lines()
    }

    fn line_text(&self, line: usize) -> Cow<'_, str> {
        if line >= self.len_lines() {
            return Cow::Borrowed("");
        }

        self.line(line).slice(..rope_content_len(self, line)).into()
    }

    fn line_len(&self, line: usize) -> usize {
        if line >= self.len_lines() {
            return 0;
        }

        rope_content_len(self, line)
    }
}

/// Length of `line` without its break, for every break ropey splits on (LF, CRLF, CR, VT, FF,
/// NEL, U+2028, U+2029).
///
/// Every line but the last ends in exactly one break; CRLF is a single break of two chars.
fn rope_content_len(rope: &Rope, line: usize) -> usize {
    let start = rope.line_to_char(line);
    if line + 1 >= rope.len_lines() {
        return rope.len_chars() - start;
    }

    let len = rope.line_to_char(line + 1) - start;
    let slice = rope.line(line);
    if len >= 2 && slice.char(len - 2) == '\r' && slice.char(len - 1) == '\n' {
        len - 2
    } else {
        len - 1
    }
}

impl<S: AsRef<str>> TextSource for [S] {
    fn line_count(&self) -> usize {
        self.len()
    }

    fn line_text(&self, line: usize) -> Cow<'_, str> {
        Cow::Borrowed(self.get(line).map(AsRef::as_ref).unwrap_or(""))
    }
}

impl<S: AsRef<str>> TextSource for Vec<S> {
    fn line_count(&self) -> usize {
        self.as_slice().line_count()
    }

    fn line_text(&self, line: usize) -> Cow<'_, str> {
        self.as_slice().line_text(line)
    }
}
