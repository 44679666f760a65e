use thiserror::Error;

#[derive(Debug, Error)]
/// Errors produced by the motion engine.
pub enum MotionError {
    #[error("position {line}:{column} is out of range (max column {max_column})")]
    /// A position's column lies past the last column the boundary policy allows on its line.
    ///
    /// This is an invariant violation by the caller, not an editing outcome.
    OutOfRange {
        /// Logical line index of the rejected position.
        line: usize,
        /// Column of the rejected position.
        column: usize,
        /// Largest column the policy permits on that line.
        max_column: usize,
    },

    #[error("word tokenizer failed to compile: {0}")]
    /// The tokenizer built from a custom separator set failed to compile.
    Tokenizer(#[from] regex::Error),
}
