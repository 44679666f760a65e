//! Motion configuration.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::MotionError;
use crate::words::{DEFAULT_NON_WORD_CHARS, WordSeparators};

/// User-facing motion settings.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MotionOptions {
    /// Characters that end a word for word motions.
    pub word_separators: String,
}

impl Default for MotionOptions {
    fn default() -> Self {
        Self {
            word_separators: DEFAULT_NON_WORD_CHARS.to_string(),
        }
    }
}

impl MotionOptions {
    /// Compile the configured separator set.
    ///
    /// # Errors
    ///
    /// Returns [`MotionError::Tokenizer`] if the tokenizer fails to compile.
    pub fn build_separators(&self) -> Result<WordSeparators, MotionError> {
        WordSeparators::new(&self.word_separators)
    }
}
