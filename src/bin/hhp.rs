//! Hand History Parser
//!
//! Parses files (or directories of files) of raw hand histories and prints
//! a summary of what was accepted and rejected.
//!
//! Options: --json, --threads, --ignore, --verbose

fn main() {
    use clap::Parser;
    match hhp::cli::Args::parse().run() {
        Ok(true) => std::process::exit(0),
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("{:#}", e);
            std::process::exit(2)
        }
    }
}
