//! Configuration for the symcodec command-line tools.
//!
//! Handles parsing command-line arguments and producing usage text. The
//! process surfaces are deliberately small: each tool takes exactly three
//! positional paths, mirroring the codec's on-disk contract, plus a couple
//! of behavior flags.

use std::path::PathBuf;

/// Arguments for the encoder tool.
#[derive(Debug, Clone)]
pub struct EncodeArgs {
    /// File to encode
    pub input: PathBuf,

    /// Where the textual codebook is written
    pub codebook: PathBuf,

    /// Where the packed bitstream is written
    pub encoded: PathBuf,

    /// Whether to print the run summary
    pub print_stats: bool,
}

impl EncodeArgs {
    pub const USAGE: &'static str =
        "Usage: symcodec-encode [--no-stats] <input> <codebook.csv> <encoded.bin>";

    /// Parse encoder arguments.
    ///
    /// Wrong positional count or an unknown flag is an error; the caller
    /// reports it with the usage line and a non-zero exit.
    pub fn from_args(args: &[String]) -> Result<Self, String> {
        let (paths, print_stats) = parse_common(args, print_encode_help)?;
        let [input, codebook, encoded] = take_three(paths)?;
        Ok(Self {
            input,
            codebook,
            encoded,
            print_stats,
        })
    }
}

/// Arguments for the decoder tool.
#[derive(Debug, Clone)]
pub struct DecodeArgs {
    /// Where the decoded bytes are written
    pub output: PathBuf,

    /// Serialized codebook to reconstruct the assignment from
    pub codebook: PathBuf,

    /// Packed bitstream to decode
    pub encoded: PathBuf,

    /// Whether to print the run summary
    pub print_stats: bool,
}

impl DecodeArgs {
    pub const USAGE: &'static str =
        "Usage: symcodec-decode [--no-stats] <output> <codebook.csv> <encoded.bin>";

    /// Parse decoder arguments.
    pub fn from_args(args: &[String]) -> Result<Self, String> {
        let (paths, print_stats) = parse_common(args, print_decode_help)?;
        let [output, codebook, encoded] = take_three(paths)?;
        Ok(Self {
            output,
            codebook,
            encoded,
            print_stats,
        })
    }
}

/// Arguments for the sample-input generator.
#[derive(Debug, Clone)]
pub struct GenArgs {
    /// Where the generated sample is written
    pub output: PathBuf,

    /// Approximate output size in bytes
    pub size: usize,

    /// Seed driving all randomness (echoed for reproducibility)
    pub seed: u64,
}

impl GenArgs {
    pub const USAGE: &'static str = "Usage: symcodec-gen [--size <N>] [--seed <N>] <output>";

    /// Parse generator arguments.
    ///
    /// Without `--seed`, a time-based seed is chosen and echoed so the run
    /// can be reproduced.
    pub fn from_args(args: &[String]) -> Result<Self, String> {
        let mut size: Option<usize> = None;
        let mut seed: Option<u64> = None;
        let mut positional: Vec<PathBuf> = Vec::new();

        let mut i = 0;
        while i < args.len() {
            match args[i].as_str() {
                "--size" => {
                    i += 1;
                    let value = args.get(i).ok_or("--size requires a number")?;
                    size = Some(value.parse().map_err(|_| "invalid size")?);
                }
                "--seed" => {
                    i += 1;
                    let value = args.get(i).ok_or("--seed requires a number")?;
                    seed = Some(value.parse().map_err(|_| "invalid seed")?);
                }
                "--help" | "-h" => {
                    print_gen_help();
                    std::process::exit(0);
                }
                other if other.starts_with('-') => {
                    return Err(format!("unknown argument: {other}"));
                }
                other => positional.push(PathBuf::from(other)),
            }
            i += 1;
        }

        if positional.len() != 1 {
            return Err(format!("expected 1 path, got {}", positional.len()));
        }
        let output = positional.remove(0);

        Ok(Self {
            output,
            size: size.unwrap_or(65536),
            seed: seed.unwrap_or_else(time_seed),
        })
    }
}

/// Shared flag loop for the two codec tools: positionals plus
/// `--no-stats` / `--help`.
fn parse_common(
    args: &[String],
    help: fn(),
) -> Result<(Vec<PathBuf>, bool), String> {
    let mut print_stats = true;
    let mut positional = Vec::new();

    for arg in args {
        match arg.as_str() {
            "--no-stats" => print_stats = false,
            "--help" | "-h" => {
                help();
                std::process::exit(0);
            }
            other if other.starts_with('-') => {
                return Err(format!("unknown argument: {other}"));
            }
            other => positional.push(PathBuf::from(other)),
        }
    }

    Ok((positional, print_stats))
}

fn take_three(paths: Vec<PathBuf>) -> Result<[PathBuf; 3], String> {
    <[PathBuf; 3]>::try_from(paths)
        .map_err(|paths| format!("expected 3 paths, got {}", paths.len()))
}

/// Time-based fallback seed, like the tools' other randomized defaults.
fn time_seed() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|t| t.as_millis() as u64)
        .unwrap_or(0)
}

fn print_encode_help() {
    println!("symcodec-encode: pack a file with fixed-length 7-bit symbol codes");
    println!();
    println!("{}", EncodeArgs::USAGE);
    println!();
    println!("ARGS:");
    println!("    <input>         File to encode (at most 127 distinct byte values)");
    println!("    <codebook.csv>  Output: one quoted record per observed symbol");
    println!("    <encoded.bin>   Output: MSB-first bitstream, all-ones terminated");
    println!();
    println!("OPTIONS:");
    println!("    --no-stats      Don't print the encode summary");
    println!("    --help, -h      Print this help");
    println!();
    println!("An empty input is reported and exits 0 without creating outputs.");
}

fn print_decode_help() {
    println!("symcodec-decode: reconstruct a file from its codebook and bitstream");
    println!();
    println!("{}", DecodeArgs::USAGE);
    println!();
    println!("ARGS:");
    println!("    <output>        Where the decoded bytes are written");
    println!("    <codebook.csv>  Codebook written by symcodec-encode");
    println!("    <encoded.bin>   Bitstream written by symcodec-encode");
    println!();
    println!("OPTIONS:");
    println!("    --no-stats      Don't print the decode summary");
    println!("    --help, -h      Print this help");
    println!();
    println!("Unparseable codebook lines are skipped; a bitstream ending without");
    println!("its terminator decodes to whatever was recovered up to that point.");
}

fn print_gen_help() {
    println!("symcodec-gen: generate sample input with mixed compressibility");
    println!();
    println!("{}", GenArgs::USAGE);
    println!();
    println!("OPTIONS:");
    println!("    --size <N>      Approximate size in bytes (default: 65536)");
    println!("    --seed <N>      Random seed for determinism (default: time-based)");
    println!("    --help, -h      Print this help");
    println!();
    println!("Generated data always stays within the codec's 127-symbol limit.");
}
