//! Binary entry point for the tokseq demonstration.
//!
//! Builds a few token sequences and exercises every container operation,
//! including an out-of-range access that is reported and handled.

#![allow(clippy::print_stderr)]

use anyhow::Context as _;
use std::io::{self, IsTerminal, Write};
use std::process::ExitCode;
use tokseq::config::LOG_ENV;
use tokseq::output::{write_element, write_sequence};
use tokseq::{Config, OutputFormat, TokenSequence, format_error};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_env(LOG_ENV))
        .with_ansi(io::stderr().is_terminal())
        .with_writer(io::stderr)
        .init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // Stop quietly when stdout is closed (e.g. piped to `head`)
            if e
                .downcast_ref::<tokseq::Error>()
                .is_some_and(tokseq::Error::is_broken_pipe)
            {
                return ExitCode::SUCCESS;
            }
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> anyhow::Result<()> {
    let config = Config::from_env().context("failed to load configuration")?;
    let format = config.format;
    let mut out = io::stdout().lock();

    let mut words = TokenSequence::split_with("one two three", ' ', config.convention);
    write_sequence(&mut out, &words, format)?;

    let phrases = TokenSequence::split_with("one,two,and three", ',', config.convention);
    write_sequence(&mut out, &phrases, format)?;

    words.append("four");
    write_sequence(&mut out, &words, format)?;

    words.resize(2);
    write_sequence(&mut out, &words, format)?;

    write_element(&mut out, 1, words.get(1)?, format)?;

    match words.get(5) {
        Ok(element) => write_element(&mut out, 5, element, format)?,
        Err(e) => match format {
            // JSON errors go to stdout for programmatic parsing
            OutputFormat::Json => writeln!(out, "{}", format_error(&e, format))
                .map_err(tokseq::Error::from)?,
            OutputFormat::Text => eprintln!("Element at index 5: {}", format_error(&e, format)),
        },
    }

    Ok(())
}
