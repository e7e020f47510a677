//! Encoder tool: tally an input file, write its codebook and packed
//! bitstream.
//!
//! Exit status: 0 on success and for the reported empty-input condition;
//! 1 for usage errors, unreadable/unwritable files, and alphabet overflow.
//! Partial outputs are not cleaned up on failure.

use std::env;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::process;
use std::time::Instant;

use symcodec_app::config::EncodeArgs;
use symcodec_core::codec::encode_to;
use symcodec_core::freq::FreqTable;
use symcodec_core::record;
use symcodec_core::stats::EncodeReport;
use symcodec_core::Codebook;

fn main() {
    let args: Vec<String> = env::args().skip(1).collect();
    let cfg = match EncodeArgs::from_args(&args) {
        Ok(cfg) => cfg,
        Err(msg) => {
            eprintln!("error: {msg}");
            eprintln!("{}", EncodeArgs::USAGE);
            process::exit(1);
        }
    };
    process::exit(run(&cfg));
}

fn run(cfg: &EncodeArgs) -> i32 {
    let started = Instant::now();

    // First pass: buffer the input and tally frequencies
    let input = match fs::read(&cfg.input) {
        Ok(data) => data,
        Err(e) => {
            eprintln!("cannot read {}: {e}", cfg.input.display());
            return 1;
        }
    };

    let freqs = FreqTable::from_bytes(&input);
    if freqs.is_empty() {
        // Reported, not fatal; neither output file is created
        eprintln!("{}: empty input, nothing to encode", cfg.input.display());
        return 0;
    }

    let book = match Codebook::from_frequencies(&freqs) {
        Ok(book) => book,
        Err(e) => {
            eprintln!("cannot encode {}: {e}", cfg.input.display());
            return 1;
        }
    };

    let book_file = match File::create(&cfg.codebook) {
        Ok(file) => file,
        Err(e) => {
            eprintln!("cannot create {}: {e}", cfg.codebook.display());
            return 1;
        }
    };
    let mut book_out = BufWriter::new(book_file);
    if let Err(e) = record::write_codebook(&mut book_out, &book).and_then(|_| book_out.flush()) {
        eprintln!("cannot write {}: {e}", cfg.codebook.display());
        return 1;
    }

    // Second pass: emit one code per input byte, then the sentinel
    let packed_file = match File::create(&cfg.encoded) {
        Ok(file) => file,
        Err(e) => {
            eprintln!("cannot create {}: {e}", cfg.encoded.display());
            return 1;
        }
    };
    let payload_bits = match encode_to(&input, &book, BufWriter::new(packed_file)) {
        Ok(bits) => bits,
        Err(e) => {
            eprintln!("cannot write {}: {e}", cfg.encoded.display());
            return 1;
        }
    };

    if cfg.print_stats {
        let report = EncodeReport {
            input_bytes: input.len() as u64,
            distinct_symbols: freqs.distinct(),
            codebook_entries: book.len(),
            payload_bits,
            packed_bytes: payload_bits.div_ceil(8),
            elapsed: started.elapsed(),
        };
        report.print_summary();
    }

    0
}
