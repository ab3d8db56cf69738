//! # Error Types

/// Errors from subpiece operations.
#[derive(Debug, thiserror::Error)]
pub enum SubpieceError {
    /// Vocab size exceeds the capacity of the target token type.
    #[error("vocab size ({size}) exceeds token type capacity")]
    VocabSizeOverflow {
        /// The vocab size that exceeded the capacity.
        size: usize,
    },

    /// Vocabulary has no entries; id 0 (the unknown token) must exist.
    #[error("vocabulary is empty")]
    EmptyVocab,

    /// Malformed vocabulary data.
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// I/O error.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// A pretrained resource could not be resolved.
    #[error("resource not found: {0}")]
    ResourceNotFound(String),

    /// Error from an external component.
    #[error("{0}")]
    External(String),
}

/// Result type for subpiece operations.
pub type SPResult<T> = core::result::Result<T, SubpieceError>;
