//! symcodec-core: static fixed-length symbol codec
//!
//! This library implements a codec that assigns every distinct byte value in
//! an input a fixed-width 7-bit code, persists the assignment as a textual
//! codebook, and packs the input as a dense MSB-first bitstream terminated
//! by an all-ones sentinel. Decoding reconstructs the codebook from its
//! serialized form and reproduces the original bytes exactly.
//!
//! # Architecture
//!
//! The system is designed around clear module boundaries:
//! - `freq`: per-byte occurrence counting over the full input
//! - `codebook`: frequency-ranked code assignment
//! - `record`: textual codebook serialization and lenient parsing
//! - `bitio`: low-level bit reading/writing over owned I/O handles
//! - `codec`: encode pipeline and the sentinel-aware greedy decoder
//! - `stats`: observable run summaries
//!
//! # Design Principles
//!
//! - **No panics**: all errors are structured and recoverable
//! - **Two-pass encode**: frequencies first, codes second; input is buffered
//! - **Single-pass decode**: a small bit buffer, no backtracking
//! - **Explicit state**: bit readers/writers own their handles; nothing is
//!   process-wide

pub mod bitio;
pub mod codebook;
pub mod codec;
pub mod error;
pub mod freq;
pub mod record;
pub mod stats;

// Re-export commonly used types
pub use codebook::{Codebook, CodebookEntry, CODE_WIDTH, MAX_ALPHABET, SENTINEL};
pub use error::{CodebookError, Error, Result};
