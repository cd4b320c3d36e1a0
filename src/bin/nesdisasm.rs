//! Thin CLI binary: parses arguments, delegates everything to
//! `nesdisasm::cli::run`, and translates its result into a process exit
//! code per spec.md §6 (0 success, 1 fatal error; clap itself exits 2 on
//! a usage error before this file's `main` ever runs).

use clap::Parser;
use nesdisasm::cli::{self, Args};

fn main() {
    let args = Args::parse();
    let code = match cli::run(args) {
        Ok(code) => code,
        Err(err) => {
            log::error!("{err}");
            eprintln!("error: {err}");
            1
        }
    };
    std::process::exit(code);
}
