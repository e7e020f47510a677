//! Command-line front end for the symcodec tools.
//!
//! Three binaries share this crate:
//! - `symcodec-encode`: input file -> codebook + packed bitstream
//! - `symcodec-decode`: codebook + packed bitstream -> decoded file
//! - `symcodec-gen`: seeded sample-input generation

pub mod config;
pub mod input_gen;
