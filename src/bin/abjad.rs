//! Command line entry point for Abjad analysis.

use std::io::Write;
use std::process;

use clap::Parser;
use env_logger::Builder;
use log::LevelFilter;

use abjad::cli::args::AbjadArgs;
use abjad::cli::commands::execute_command;

/// Table fallback warnings show by default; `-q` keeps only errors.
fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Error,
        1 => LevelFilter::Warn,
        2 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    }
}

fn init_logging(verbosity: u8) {
    Builder::new()
        .filter_level(level_for(verbosity))
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .init();
}

fn main() {
    let args = AbjadArgs::parse();
    init_logging(args.verbosity());

    if let Err(e) = execute_command(args) {
        eprintln!("abjad: {e}");
        process::exit(1);
    }
}
