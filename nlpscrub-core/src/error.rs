//! Error types for pipeline and analysis operations

use thiserror::Error;

/// Error raised by any pipeline or analysis operation
#[derive(Debug, Error)]
pub enum ProcessingError {
    /// Linguistic resources could not be built (bad or invalid language config)
    #[error("Resource initialization failed: {0}")]
    ResourceInit(String),

    /// No embedded language configuration exists for this code
    #[error("Unsupported language: {0}")]
    UnsupportedLanguage(String),

    /// An option key outside the fixed pipeline key set
    #[error("Unknown option: {0}")]
    UnknownOption(String),

    /// Input exceeds the processor's configured size limit
    #[error("Input too large: {size} bytes (limit {limit} bytes)")]
    InputTooLarge {
        /// Size of the rejected input in bytes
        size: usize,
        /// Configured limit in bytes
        limit: usize,
    },

    /// The tokenizer could not split the input
    ///
    /// Reserved for fallible tokenizer backends; the bundled rule-based
    /// tokenizer never fails.
    #[error("Tokenization failed: {0}")]
    Tokenization(String),

    /// The lemmatizer could not map a token
    ///
    /// Reserved for fallible lemmatizer backends; the bundled rule table
    /// never fails.
    #[error("Lemmatization failed: {0}")]
    Lemmatization(String),

    /// The emoji reference data is unusable
    #[error("Emoji data error: {0}")]
    EmojiData(String),
}

/// Result type for pipeline and analysis operations
pub type Result<T> = std::result::Result<T, ProcessingError>;
