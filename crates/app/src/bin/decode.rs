//! Decoder tool: reconstruct the code assignment from a codebook file and
//! decode a packed bitstream.
//!
//! Exit status: 0 on success, 1 for usage errors and any file that cannot
//! be opened. A bitstream that ends without its sentinel decodes to the
//! prefix recovered so far; that is normal termination, not an error.

use std::env;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::process;
use std::time::Instant;

use symcodec_app::config::DecodeArgs;
use symcodec_core::codec::Decoder;
use symcodec_core::record;
use symcodec_core::stats::DecodeReport;

fn main() {
    let args: Vec<String> = env::args().skip(1).collect();
    let cfg = match DecodeArgs::from_args(&args) {
        Ok(cfg) => cfg,
        Err(msg) => {
            eprintln!("error: {msg}");
            eprintln!("{}", DecodeArgs::USAGE);
            process::exit(1);
        }
    };
    process::exit(run(&cfg));
}

fn run(cfg: &DecodeArgs) -> i32 {
    let started = Instant::now();

    let book_file = match File::open(&cfg.codebook) {
        Ok(file) => file,
        Err(e) => {
            eprintln!("cannot open {}: {e}", cfg.codebook.display());
            return 1;
        }
    };
    let assignments = match record::read_codebook(BufReader::new(book_file)) {
        Ok(assignments) => assignments,
        Err(e) => {
            eprintln!("cannot read {}: {e}", cfg.codebook.display());
            return 1;
        }
    };
    let decoder = Decoder::new(&assignments);

    let packed_file = match File::open(&cfg.encoded) {
        Ok(file) => file,
        Err(e) => {
            eprintln!("cannot open {}: {e}", cfg.encoded.display());
            return 1;
        }
    };
    let packed_bytes = packed_file.metadata().map(|m| m.len()).unwrap_or(0);

    let out_file = match File::create(&cfg.output) {
        Ok(file) => file,
        Err(e) => {
            eprintln!("cannot create {}: {e}", cfg.output.display());
            return 1;
        }
    };
    let mut out = BufWriter::new(out_file);

    let decoded_bytes = match decoder.decode(BufReader::new(packed_file), &mut out) {
        Ok(count) => count,
        Err(e) => {
            eprintln!("decode failed: {e}");
            return 1;
        }
    };
    if let Err(e) = out.flush() {
        eprintln!("cannot write {}: {e}", cfg.output.display());
        return 1;
    }

    if cfg.print_stats {
        let report = DecodeReport {
            codebook_entries: assignments.len(),
            packed_bytes,
            decoded_bytes,
            elapsed: started.elapsed(),
        };
        report.print_summary();
    }

    0
}
