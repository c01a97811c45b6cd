//! greetr CLI - a terminal greeting demo.
//!
//! This binary provides:
//! - A fixed demo sequence (greeting, bounded sum, string reversal)
//! - Timestamped start/end log lines on standard output

#![forbid(unsafe_code)]

mod cli;
mod demo;
mod error;
mod sink;

use std::io;

use clap::Parser;

use cli::Cli;
use error::{exit_codes, CliError};
use sink::TimestampSink;

fn run() -> Result<i32, CliError> {
    let stdout = io::stdout();
    // The stdout lock is reentrant, so the sink and the writer can both
    // hold it on this thread.
    let mut sink = TimestampSink::new(stdout.lock());
    let mut out = stdout.lock();

    demo::run(&mut out, &mut sink)?;

    Ok(exit_codes::SUCCESS)
}

fn main() {
    // Arguments are accepted but have no effect on the demo run.
    let _cli = Cli::parse();

    let exit_code = match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("greetr: {e}");
            e.exit_code()
        }
    };

    std::process::exit(exit_code);
}
