//! Sample-input generator: writes a seeded file with mixed frequency skew,
//! guaranteed to fit the codec's 127-symbol limit.

use std::env;
use std::fs;
use std::process;

use symcodec_app::config::GenArgs;
use symcodec_app::input_gen;
use symcodec_core::freq::FreqTable;

fn main() {
    let args: Vec<String> = env::args().skip(1).collect();
    let cfg = match GenArgs::from_args(&args) {
        Ok(cfg) => cfg,
        Err(msg) => {
            eprintln!("error: {msg}");
            eprintln!("{}", GenArgs::USAGE);
            process::exit(1);
        }
    };
    process::exit(run(&cfg));
}

fn run(cfg: &GenArgs) -> i32 {
    let data = input_gen::generate_sample_data(cfg.seed, cfg.size);
    if let Err(e) = fs::write(&cfg.output, &data) {
        eprintln!("cannot write {}: {e}", cfg.output.display());
        return 1;
    }

    let freqs = FreqTable::from_bytes(&data);
    println!(
        "Wrote {} bytes to {} (seed {}, {} distinct symbols)",
        data.len(),
        cfg.output.display(),
        cfg.seed,
        freqs.distinct()
    );

    0
}
