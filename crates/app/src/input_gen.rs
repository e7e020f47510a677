//! Sample input generation for testing the codec.
//!
//! Generates data with interesting frequency characteristics: a mix of
//! long runs, text-like sections, and repeating patterns. Everything is
//! drawn from a bounded alphabet, so the distinct-symbol count always fits
//! the codec's 127-code space and generated files are always encodable.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::io::Write;

/// Every byte the generator may emit. Includes the characters the codebook
/// serializer escapes (quote, backslash, newline) so generated samples
/// exercise those paths too.
const ALPHABET: &[u8] =
    b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789 .,:;!?\"\\\n";

/// Generate sample data with mixed frequency skew.
///
/// # Arguments
/// - `seed`: random seed for determinism
/// - `size_bytes`: exact size of generated data
pub fn generate_sample_data(seed: u64, size_bytes: usize) -> Vec<u8> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut data = Vec::with_capacity(size_bytes);

    let mut remaining = size_bytes;

    while remaining > 0 {
        let chunk_size = remaining.min(4096);

        // Choose chunk type randomly
        let chunk_type: u8 = rng.gen_range(0..10);

        match chunk_type {
            // 30% heavily skewed (runs of one symbol)
            0..=2 => {
                let byte = pick(&mut rng);
                data.extend(std::iter::repeat(byte).take(chunk_size));
            }

            // 40% text-like (uniform draws over the alphabet)
            3..=6 => {
                for _ in 0..chunk_size {
                    data.push(pick(&mut rng));
                }
            }

            // 30% structured (short repeating pattern)
            _ => {
                let pattern = generate_pattern(&mut rng);
                for pos in 0..chunk_size {
                    data.push(pattern[pos % pattern.len()]);
                }
            }
        }

        remaining = remaining.saturating_sub(chunk_size);
    }

    data.truncate(size_bytes);
    data
}

fn pick(rng: &mut ChaCha8Rng) -> u8 {
    ALPHABET[rng.gen_range(0..ALPHABET.len())]
}

/// Generate a small repeating pattern over the alphabet.
fn generate_pattern(rng: &mut ChaCha8Rng) -> Vec<u8> {
    let pattern_len = rng.gen_range(4..=32);
    (0..pattern_len).map(|_| pick(rng)).collect()
}

/// Write generated data to a file.
pub fn write_sample_file(
    path: &std::path::Path,
    seed: u64,
    size_bytes: usize,
) -> std::io::Result<()> {
    let data = generate_sample_data(seed, size_bytes);
    let mut file = std::fs::File::create(path)?;
    file.write_all(&data)?;
    Ok(())
}
