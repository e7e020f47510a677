//! Run summaries for the codec tools.
//!
//! This module provides observable insights into a single encode or decode
//! run: byte counts, codebook size, payload bits, timing, and derived
//! rates. Reports are plain structs updated at each pipeline stage and
//! printed at the end.
//!
//! # Thread Safety
//!
//! Reports are NOT thread-safe; each run owns its own report, which is all
//! the single-threaded codec needs.

use std::time::Duration;

use crate::codebook::CODE_WIDTH;

/// Summary of one encode run.
#[derive(Debug, Clone, Default)]
pub struct EncodeReport {
    /// Bytes read from the input file
    pub input_bytes: u64,

    /// Distinct byte values observed
    pub distinct_symbols: usize,

    /// Codebook entries written (equals distinct_symbols on success)
    pub codebook_entries: usize,

    /// Payload bits emitted: codes plus sentinel, padding excluded
    pub payload_bits: u64,

    /// Bytes in the packed bitstream file
    pub packed_bytes: u64,

    /// Wall-clock time for the run
    pub elapsed: Duration,
}

impl EncodeReport {
    /// Packed size relative to the input (packed / input).
    ///
    /// Above 1.0 for inputs under 8 symbols per byte of overhead; fixed
    /// 7-bit codes give at best 7/8 of the input size.
    pub fn compression_ratio(&self) -> f64 {
        if self.input_bytes == 0 {
            0.0
        } else {
            self.packed_bytes as f64 / self.input_bytes as f64
        }
    }

    /// Average emitted bits per input symbol, sentinel included.
    pub fn bits_per_symbol(&self) -> f64 {
        if self.input_bytes == 0 {
            0.0
        } else {
            self.payload_bits as f64 / self.input_bytes as f64
        }
    }

    /// Print a human-readable summary to stdout.
    pub fn print_summary(&self) {
        println!("\n=== Encode Summary ===");
        println!("Duration: {} ms", self.elapsed.as_millis());
        println!();
        println!("Input: {} bytes", self.input_bytes);
        println!(
            "Distinct symbols: {} ({}-bit codes)",
            self.distinct_symbols, CODE_WIDTH
        );
        println!("Codebook entries: {}", self.codebook_entries);
        println!();
        println!("=== Bitstream ===");
        println!("Payload bits: {} (sentinel included)", self.payload_bits);
        println!("Packed: {} bytes", self.packed_bytes);
        println!("Ratio: {:.1}%", self.compression_ratio() * 100.0);
        println!("Bits/symbol: {:.3}", self.bits_per_symbol());
        println!();
    }
}

/// Summary of one decode run.
#[derive(Debug, Clone, Default)]
pub struct DecodeReport {
    /// Codebook records successfully parsed
    pub codebook_entries: usize,

    /// Bytes consumed from the packed bitstream file
    pub packed_bytes: u64,

    /// Symbols written to the output file
    pub decoded_bytes: u64,

    /// Wall-clock time for the run
    pub elapsed: Duration,
}

impl DecodeReport {
    /// Print a human-readable summary to stdout.
    pub fn print_summary(&self) {
        println!("\n=== Decode Summary ===");
        println!("Duration: {} ms", self.elapsed.as_millis());
        println!();
        println!("Codebook entries: {}", self.codebook_entries);
        println!("Packed: {} bytes", self.packed_bytes);
        println!("Decoded: {} bytes", self.decoded_bytes);
        println!();
    }
}
