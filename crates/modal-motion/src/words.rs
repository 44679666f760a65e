//! Word segmentation for word motions.
//!
//! A line is split in a single regex pass into an ordered list of [`Segment`]s. Three kinds of
//! segment exist:
//!
//! - **blank line**: the whole line, when it is empty or holds only whitespace
//! - **word**: a maximal run of characters that are neither whitespace nor non-word characters
//! - **separator**: a maximal run of whitespace and/or non-word characters
//!
//! Word motions stop at a segment's *stop* column: the first character of a word, or the first
//! non-whitespace character of a separator. Pure whitespace runs and blank lines have no stop.
//!
//! All offsets are **character** offsets, not byte offsets.

use regex::Regex;
use std::sync::OnceLock;

use crate::error::MotionError;

/// Punctuation that terminates a word.
pub const DEFAULT_NON_WORD_CHARS: &str = "/\\()\"':,.;<>~!@#$%^&*|+=[]{}`?-";

/// Kind of a line segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentKind {
    /// An empty line, or a line made only of whitespace.
    BlankLine,
    /// A run of word characters.
    Word,
    /// A run of whitespace and/or non-word characters.
    Separator,
}

/// A segment of a line, as a half-open character range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    /// What the segment is made of.
    pub kind: SegmentKind,
    /// Inclusive start column.
    pub start: usize,
    /// Exclusive end column.
    pub end: usize,
    /// Column a word motion lands on inside this segment, if any.
    pub stop: Option<usize>,
}

/// A non-word character set together with its compiled tokenizer.
#[derive(Debug, Clone)]
pub struct WordSeparators {
    chars: String,
    tokenizer: Regex,
}

impl WordSeparators {
    /// Build a tokenizer treating every char of `non_word_chars` as punctuation.
    ///
    /// Chars are escaped before they enter the character classes, so any set is accepted.
    pub fn new(non_word_chars: &str) -> Result<Self, MotionError> {
        let class: String = non_word_chars
            .chars()
            .map(|ch| regex::escape(ch.encode_utf8(&mut [0; 4])))
            .collect();
        let pattern = format!(r"(^\s*$)|([^\s{class}]+)|[\s{class}]+");
        let tokenizer = Regex::new(&pattern)?;

        Ok(Self {
            chars: non_word_chars.to_string(),
            tokenizer,
        })
    }

    /// The default separator set ([`DEFAULT_NON_WORD_CHARS`]), compiled once per process.
    pub fn standard() -> &'static WordSeparators {
        static STANDARD: OnceLock<WordSeparators> = OnceLock::new();
        STANDARD.get_or_init(|| {
            WordSeparators::new(DEFAULT_NON_WORD_CHARS).expect("default separator set compiles")
        })
    }

    /// The configured non-word characters.
    pub fn chars(&self) -> &str {
        &self.chars
    }

    /// Split `text` into its ordered segments.
    pub fn segments(&self, text: &str) -> Vec<Segment> {
        let mut segments = Vec::new();
        let mut char_pos = 0;
        let mut byte_pos = 0;

        for caps in self.tokenizer.captures_iter(text) {
            let Some(whole) = caps.get(0) else {
                continue;
            };

            let start = char_pos + text[byte_pos..whole.start()].chars().count();
            let end = start + whole.as_str().chars().count();
            let kind = if caps.get(1).is_some() {
                SegmentKind::BlankLine
            } else if caps.get(2).is_some() {
                SegmentKind::Word
            } else {
                SegmentKind::Separator
            };
            let stop = match kind {
                SegmentKind::BlankLine => None,
                SegmentKind::Word => Some(start),
                SegmentKind::Separator => whole
                    .as_str()
                    .chars()
                    .position(|ch| !ch.is_whitespace())
                    .map(|offset| start + offset),
            };

            segments.push(Segment {
                kind,
                start,
                end,
                stop,
            });
            char_pos = end;
            byte_pos = whole.end();
        }

        segments
    }

    /// Nearest stop strictly after `column`.
    pub fn next_stop(&self, text: &str, column: usize) -> Option<usize> {
        self.segments(text)
            .iter()
            .filter_map(|segment| segment.stop)
            .find(|&stop| stop > column)
    }

    /// Nearest stop strictly before `column`.
    pub fn prev_stop(&self, text: &str, column: usize) -> Option<usize> {
        self.segments(text)
            .iter()
            .rev()
            .filter_map(|segment| segment.stop)
            .find(|&stop| stop < column)
    }
}

impl Default for WordSeparators {
    fn default() -> Self {
        Self::standard().clone()
    }
}
