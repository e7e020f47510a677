//! Encode and decode pipelines.
//!
//! Encoding walks the input once more after frequency ranking, emitting one
//! 7-bit code per byte through a `BitWriter`, then the all-ones sentinel,
//! then zero padding to the byte boundary. The packed length obeys
//! `ceil((N*7 + 7) / 8)` for an N-symbol input.
//!
//! Decoding feeds bits into a growing buffer. After each bit, the trailing
//! 7 bits are checked against the sentinel first, then looked up in a
//! sparse code->symbol table. A hit emits the symbol and drops exactly
//! those trailing bits; earlier buffered bits stay put. No backtracking is
//! ever needed because all codes share one fixed length. Running out of
//! input without seeing the sentinel ends the decode cleanly with whatever
//! was produced.

use std::io::{self, Read, Write};

use crate::bitio::{BitReader, BitWriter};
use crate::codebook::{Codebook, CODE_WIDTH, SENTINEL};
use crate::error::Result;
use crate::freq::FreqTable;
use crate::record::CodeAssignment;

/// Encode `input` through `sink`: one code per byte, then the sentinel,
/// then padding. Returns the number of payload bits written (sentinel
/// included, padding excluded).
///
/// Bytes without an assigned code are skipped; this cannot happen when the
/// codebook was built from the same input.
pub fn encode_to<W: Write>(input: &[u8], book: &Codebook, sink: W) -> io::Result<u64> {
    let table = book.encode_table();
    let mut writer = BitWriter::new(sink);

    for &byte in input {
        if let Some(code) = table[byte as usize] {
            writer.write_bits(code as u32, CODE_WIDTH as u32)?;
        }
    }
    writer.write_bits(SENTINEL as u32, CODE_WIDTH as u32)?;

    let bits = writer.bit_len();
    writer.finish()?;
    Ok(bits)
}

/// Build the codebook for `input` and pack it in one call.
///
/// # Errors
/// - `CodebookError::EmptyInput` for a zero-length input
/// - `CodebookError::AlphabetOverflow` for more than 127 distinct bytes
pub fn encode(input: &[u8]) -> Result<(Codebook, Vec<u8>)> {
    let freqs = FreqTable::from_bytes(input);
    let book = Codebook::from_frequencies(&freqs)?;

    let mut packed = Vec::new();
    encode_to(input, &book, &mut packed)?;
    Ok((book, packed))
}

/// Greedy fixed-width matcher over a reconstructed code assignment.
#[derive(Debug)]
pub struct Decoder {
    /// Code value -> symbol; `None` marks unassigned patterns
    table: [Option<u8>; 1 << CODE_WIDTH],
}

impl Decoder {
    /// Build a decoder from parsed code assignments.
    ///
    /// On duplicate code values the earliest assignment wins, matching the
    /// record parser's order-preserving contract.
    pub fn new(assignments: &[CodeAssignment]) -> Self {
        let mut table = [None; 1 << CODE_WIDTH];
        for assignment in assignments {
            let slot = &mut table[assignment.code as usize];
            if slot.is_none() {
                *slot = Some(assignment.symbol);
            }
        }
        Self { table }
    }

    /// Build a decoder directly from an in-memory codebook.
    pub fn from_codebook(book: &Codebook) -> Self {
        let assignments: Vec<CodeAssignment> = book
            .entries()
            .iter()
            .map(|entry| CodeAssignment {
                symbol: entry.symbol,
                code: entry.code,
            })
            .collect();
        Self::new(&assignments)
    }

    /// Decode a packed bitstream from `source` into `sink`.
    ///
    /// Terminates on the sentinel or on physical end of input, whichever
    /// comes first; both are success. Returns the number of symbols
    /// emitted.
    pub fn decode<R: Read, W: Write>(&self, source: R, sink: &mut W) -> io::Result<u64> {
        let mut reader = BitReader::new(source);
        // Pending bits, oldest first; stays tiny for well-formed streams
        let mut pending: Vec<u8> = Vec::with_capacity(2 * CODE_WIDTH);
        let mut emitted = 0u64;

        while let Some(bit) = reader.read_bit()? {
            pending.push(bit as u8);

            let len = pending.len();
            if len < CODE_WIDTH {
                continue;
            }

            let tail = &pending[len - CODE_WIDTH..];
            if tail.iter().all(|&b| b == 1) {
                break;
            }

            let value = tail.iter().fold(0u8, |acc, &b| (acc << 1) | b);
            if let Some(symbol) = self.table[value as usize] {
                sink.write_all(&[symbol])?;
                emitted += 1;
                pending.truncate(len - CODE_WIDTH);
            }
        }

        Ok(emitted)
    }

    /// Decode an in-memory bitstream to a byte vector.
    pub fn decode_bytes(&self, packed: &[u8]) -> io::Result<Vec<u8>> {
        let mut out = Vec::new();
        self.decode(packed, &mut out)?;
        Ok(out)
    }
}

/// Reconstruct a decoder from assignments and decode `packed` in one call.
pub fn decode(assignments: &[CodeAssignment], packed: &[u8]) -> io::Result<Vec<u8>> {
    Decoder::new(assignments).decode_bytes(packed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codebook::MAX_ALPHABET;
    use crate::error::CodebookError;

    #[test]
    fn test_aab_packed_bytes() {
        let (book, packed) = encode(b"aab").unwrap();

        // codes: a=0000001, b=0000000; stream + sentinel = 28 bits
        assert_eq!(packed, vec![0x02, 0x04, 0x0F, 0xF0]);
        assert_eq!(book.len(), 2);
    }

    #[test]
    fn test_aab_round_trip() {
        let (book, packed) = encode(b"aab").unwrap();
        let decoder = Decoder::from_codebook(&book);
        assert_eq!(decoder.decode_bytes(&packed).unwrap(), b"aab");
    }

    #[test]
    fn test_packed_length_law() {
        for input in [&b"a"[..], b"aab", b"hello world", b"aaaaaaaaaaaaaaaa"] {
            let (_, packed) = encode(input).unwrap();
            let n = input.len() as u64;
            let expected = (n * CODE_WIDTH as u64 + CODE_WIDTH as u64).div_ceil(8);
            assert_eq!(packed.len() as u64, expected, "input {input:?}");
        }
    }

    #[test]
    fn test_single_symbol_input() {
        let (book, packed) = encode(b"zzzzz").unwrap();
        assert_eq!(book.len(), 1);
        assert_eq!(book.entries()[0].code, 0);

        let decoder = Decoder::from_codebook(&book);
        assert_eq!(decoder.decode_bytes(&packed).unwrap(), b"zzzzz");
    }

    #[test]
    fn test_empty_input_is_error() {
        assert!(matches!(
            encode(b""),
            Err(crate::Error::Codebook(CodebookError::EmptyInput))
        ));
    }

    #[test]
    fn test_full_alphabet_round_trip() {
        // Exactly MAX_ALPHABET distinct values, skewed counts
        let mut data = Vec::new();
        for value in 0..MAX_ALPHABET as u8 {
            data.extend(std::iter::repeat(value).take((value % 5 + 1) as usize));
        }

        let (book, packed) = encode(&data).unwrap();
        assert_eq!(book.len(), MAX_ALPHABET);

        let decoder = Decoder::from_codebook(&book);
        assert_eq!(decoder.decode_bytes(&packed).unwrap(), data);
    }

    #[test]
    fn test_decode_stops_at_sentinel_ignores_rest() {
        let (book, mut packed) = encode(b"abcabc").unwrap();
        // Bytes after the sentinel must not influence the output
        packed.extend_from_slice(&[0xAA, 0x55, 0x00]);

        let decoder = Decoder::from_codebook(&book);
        assert_eq!(decoder.decode_bytes(&packed).unwrap(), b"abcabc");
    }

    #[test]
    fn test_decode_truncated_stream_keeps_prefix() {
        let (book, packed) = encode(b"abcdabcd").unwrap();
        let decoder = Decoder::from_codebook(&book);

        // Drop the final two bytes: sentinel (and possibly a code) lost
        let truncated = &packed[..packed.len() - 2];
        let out = decoder.decode_bytes(truncated).unwrap();
        assert!(out.len() < 8);
        assert_eq!(&b"abcdabcd"[..out.len()], &out[..]);
    }

    #[test]
    fn test_decode_empty_stream() {
        let decoder = Decoder::new(&[]);
        assert_eq!(decoder.decode_bytes(&[]).unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn test_unassigned_pattern_accumulates() {
        // Only code 0 is assigned; a stream starting with 0000001 matches
        // nothing until more bits arrive
        let assignments = [CodeAssignment { symbol: b'x', code: 0 }];
        let decoder = Decoder::new(&assignments);

        // 0000001 0000000 -> first group unmatched, trailing groups shift
        // through; the all-zero window that forms at bit 14 matches
        let packed = [0b0000001_0u8, 0b000000_11, 0b111111_00];
        let out = decoder.decode_bytes(&packed).unwrap();
        assert_eq!(out, b"x");
    }

    #[test]
    fn test_duplicate_code_first_assignment_wins() {
        let assignments = [
            CodeAssignment { symbol: b'a', code: 3 },
            CodeAssignment { symbol: b'b', code: 3 },
        ];
        let decoder = Decoder::new(&assignments);

        // one code 3 then sentinel: 0000011 1111111 (pad 00)
        let packed = [0b00000111u8, 0b11111100];
        assert_eq!(decoder.decode_bytes(&packed).unwrap(), b"a");
    }

    #[test]
    fn test_encode_skips_bytes_without_codes() {
        let freqs = FreqTable::from_bytes(b"ab");
        let book = Codebook::from_frequencies(&freqs).unwrap();

        // 'z' has no code in this book and contributes no bits
        let mut packed = Vec::new();
        let bits = encode_to(b"azb", &book, &mut packed).unwrap();
        assert_eq!(bits, 3 * CODE_WIDTH as u64);

        let decoder = Decoder::from_codebook(&book);
        assert_eq!(decoder.decode_bytes(&packed).unwrap(), b"ab");
    }
}
