//! Error types for the symcodec system.
//!
//! All operations return structured errors rather than panicking.
//! This enables graceful shutdown and clear error reporting.

use thiserror::Error;

/// Top-level error type for all operations in the system.
///
/// Each variant corresponds to a specific failure domain:
/// - Codebook: building a code assignment from frequencies
/// - I/O: file system and stream operations
///
/// Malformed codebook records are deliberately NOT an error domain: the
/// parser skips lines it cannot understand (see `record`).
#[derive(Debug, Error)]
pub enum Error {
    /// Codebook construction failed (empty input or alphabet overflow)
    #[error("codebook error: {0}")]
    Codebook(#[from] CodebookError),

    /// File I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Codebook construction errors.
#[derive(Debug, Error)]
pub enum CodebookError {
    /// No symbols with non-zero count (cannot build a codebook).
    ///
    /// Callers treat this as a reportable condition, not a fatal one: an
    /// empty input has no meaningful codebook or bitstream.
    #[error("empty frequency table: no symbols to encode")]
    EmptyInput,

    /// More distinct symbols than the fixed code width can represent.
    ///
    /// The all-ones pattern is reserved for the stream sentinel, so a
    /// 7-bit codebook holds at most 127 entries. Assigning the 128th would
    /// collide with the sentinel and corrupt every stream that uses it.
    #[error("alphabet overflow: {distinct} distinct symbols exceed the {max} codes available at width {width}")]
    AlphabetOverflow {
        distinct: usize,
        max: usize,
        width: usize,
    },
}

/// Type alias for Result with our Error type
pub type Result<T> = std::result::Result<T, Error>;
