//! Integration tests for the full codec pipeline.
//!
//! These tests verify end-to-end behavior: input -> frequency table ->
//! codebook -> serialized records + packed bitstream -> parsed records ->
//! decode -> output, with verification that output matches input.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use symcodec_core::{
    codec::{encode, encode_to, Decoder},
    codebook::{Codebook, CODE_WIDTH, MAX_ALPHABET, SENTINEL},
    error::CodebookError,
    freq::FreqTable,
    record::{read_codebook, write_codebook},
};

/// Round-trip one input through the serialized codebook text and the packed
/// bitstream, exactly as the two tools would on disk.
fn round_trip(input: &[u8]) -> Vec<u8> {
    let (book, packed) = encode(input).expect("encode failed");

    // Persist and reload the codebook as the decoder tool would
    let mut book_text = Vec::new();
    write_codebook(&mut book_text, &book).expect("serialize failed");
    let assignments = read_codebook(&book_text[..]).expect("parse failed");
    assert_eq!(assignments.len(), book.len());

    Decoder::new(&assignments)
        .decode_bytes(&packed)
        .expect("decode failed")
}

#[test]
fn test_round_trip_simple_text() {
    let input = b"hello world! this is a test with some repetition: aaaaaaaaaa bbbbbbbbbb";
    assert_eq!(round_trip(input), input);
}

#[test]
fn test_round_trip_special_symbols() {
    // Every escaped representation plus hex-escaped control bytes
    let input = b"line one\nline two\r\"quoted\\path\"\x00\x01\x7f\xff tail";
    assert_eq!(round_trip(input), input);
}

#[test]
fn test_round_trip_max_alphabet() {
    // Exactly 127 distinct byte values with skewed counts
    let mut input = Vec::new();
    for value in 0..MAX_ALPHABET as u8 {
        input.extend(std::iter::repeat(value).take((value as usize % 7) + 1));
    }
    assert_eq!(round_trip(&input), input);
}

#[test]
fn test_round_trip_random_inputs() {
    let mut rng = ChaCha8Rng::seed_from_u64(42);

    for round in 0..20 {
        // Bounded alphabet keeps the distinct count under the code limit
        let alphabet: Vec<u8> = (0..rng.gen_range(1..=100u8)).collect();
        let len = rng.gen_range(1..4096);
        let input: Vec<u8> = (0..len)
            .map(|_| alphabet[rng.gen_range(0..alphabet.len())])
            .collect();

        assert_eq!(round_trip(&input), input, "round {round}");
    }
}

#[test]
fn test_bitstream_length_law() {
    let mut rng = ChaCha8Rng::seed_from_u64(7);

    for _ in 0..10 {
        let len = rng.gen_range(1..2000usize);
        let input: Vec<u8> = (0..len).map(|_| rng.gen_range(b'a'..=b'z')).collect();

        let (_, packed) = encode(&input).unwrap();
        let bits = (len as u64) * CODE_WIDTH as u64 + CODE_WIDTH as u64;
        assert_eq!(packed.len() as u64, bits.div_ceil(8));
    }
}

#[test]
fn test_codebook_codes_unique_and_rank_ordered() {
    let mut rng = ChaCha8Rng::seed_from_u64(99);
    let input: Vec<u8> = (0..5000).map(|_| rng.gen_range(0..120u8)).collect();

    let freqs = FreqTable::from_bytes(&input);
    let book = Codebook::from_frequencies(&freqs).unwrap();

    let mut seen = std::collections::HashSet::new();
    for (rank, entry) in book.entries().iter().enumerate() {
        assert!(seen.insert(entry.code), "duplicate code {}", entry.code);
        assert_eq!(entry.code as usize, rank);
        assert_ne!(entry.code, SENTINEL);
    }
    for pair in book.entries().windows(2) {
        assert!(
            pair[0].count < pair[1].count
                || (pair[0].count == pair[1].count && pair[0].symbol < pair[1].symbol)
        );
    }
}

#[test]
fn test_serialized_book_and_stream_for_aab() {
    let (book, packed) = encode(b"aab").unwrap();

    let mut text = Vec::new();
    write_codebook(&mut text, &book).unwrap();
    assert_eq!(
        String::from_utf8(text).unwrap(),
        "\"b\",1,0.3333333,\"0000000\"\n\"a\",2,0.6666667,\"0000001\"\n"
    );
    assert_eq!(packed, vec![0x02, 0x04, 0x0F, 0xF0]);
}

#[test]
fn test_decoder_survives_mangled_codebook_file() {
    let (book, packed) = encode(b"banana band").unwrap();

    let mut text = Vec::new();
    write_codebook(&mut text, &book).unwrap();

    // Corrupt the file with junk between valid records
    let mut mangled = String::from("# not a record\n");
    for line in String::from_utf8(text).unwrap().lines() {
        mangled.push_str(line);
        mangled.push('\n');
        mangled.push_str(",,,,\n");
    }

    let assignments = read_codebook(mangled.as_bytes()).unwrap();
    assert_eq!(assignments.len(), book.len());

    let out = Decoder::new(&assignments).decode_bytes(&packed).unwrap();
    assert_eq!(out, b"banana band");
}

#[test]
fn test_alphabet_overflow_is_rejected_not_encoded() {
    let input: Vec<u8> = (0..=255u8).collect();
    match encode(&input) {
        Err(symcodec_core::Error::Codebook(CodebookError::AlphabetOverflow {
            distinct,
            max,
            ..
        })) => {
            assert_eq!(distinct, 256);
            assert_eq!(max, 127);
        }
        other => panic!("expected overflow, got {other:?}"),
    }
}

#[test]
fn test_decode_with_foreign_codebook_order() {
    // A book whose file order differs from rank order still decodes: codes
    // are unique and fixed-length, so order is not load-bearing for
    // correctness
    let (book, packed) = encode(b"mississippi").unwrap();

    let mut text = Vec::new();
    write_codebook(&mut text, &book).unwrap();
    let mut lines: Vec<String> = String::from_utf8(text)
        .unwrap()
        .lines()
        .map(String::from)
        .collect();
    lines.reverse();
    let reversed = lines.join("\n");

    let assignments = read_codebook(reversed.as_bytes()).unwrap();
    let out = Decoder::new(&assignments).decode_bytes(&packed).unwrap();
    assert_eq!(out, b"mississippi");
}

#[test]
fn test_streaming_writer_matches_in_memory_encode() {
    let input = b"stream me through a writer";
    let (book, packed) = encode(input).unwrap();

    let mut sink = Vec::new();
    let bits = encode_to(input, &book, &mut sink).unwrap();

    assert_eq!(sink, packed);
    assert_eq!(
        bits,
        (input.len() as u64 + 1) * CODE_WIDTH as u64
    );
}
