// SPDX-License-Identifier: GPL-3.0
// main.rs - Copyright Phillip Potter, 2026, under GPLv3 only.

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

// This file is the core of the basic client - it exists merely as a CLI-based
// program to drive the engine with typed key tokens, either in one batch from
// the command line or line by line from standard input.

use clap::{Parser, ValueEnum};
use log::{error, info, LevelFilter};
use rpncalc_core::{
    engine::{rpn_engine::RpnEngine, Engine},
    keys::{parse_keys, Key, KeyParseError},
};
use thiserror::Error;

#[derive(Parser)]
#[command(
    version,
    about = "A basic barebones UI for the RPN calculator engine",
    long_about = None
)]
struct RpnCalcArgs {
    #[arg(
        long = "keys",
        help = "Whitespace-separated key tokens to run, e.g. \"3 ENTER 4 +\"",
        id = "Key tokens"
    )]
    keys: Option<String>,

    #[arg(
        long = "show-stack",
        help = "Print every register and memory after each key"
    )]
    show_stack: bool,

    #[arg(
        long = "log-level",
        help = "How much logging to emit",
        value_enum,
        default_value_t = LogLevel::Warn
    )]
    log_level: LogLevel,
}

/// The log levels selectable from the command line.
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {

    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Everything that can stop the client.
#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Key(#[from] KeyParseError),

    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),
}

fn main() -> ExitCode {

    let rpncalc_args = RpnCalcArgs::parse();

    let mut builder = colog::default_builder();
    builder.filter_level(rpncalc_args.log_level.into());
    builder.init();

    match run(&rpncalc_args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{}", err);
            ExitCode::FAILURE
        },
    }
}

/// Runs either the batch or the interactive session.
fn run(args: &RpnCalcArgs) -> Result<(), CliError> {

    let mut engine = RpnEngine::new();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match &args.keys {

        // Batch mode: a bad token anywhere aborts before any key is pressed.
        Some(tokens) => {
            let keys = parse_keys(tokens)?;
            for key in keys {
                press_and_show(&mut engine, key, args.show_stack, &mut out)?;
            }
        },

        // Interactive mode: a bad line is reported and skipped.
        None => {
            info!("reading key tokens from standard input, 'q' to quit");
            for line in io::stdin().lock().lines() {
                let line = line?;
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }
                if trimmed.eq_ignore_ascii_case("q") || trimmed.eq_ignore_ascii_case("quit") {
                    break;
                }

                match parse_keys(trimmed) {
                    Ok(keys) => {
                        for key in keys {
                            press_and_show(&mut engine, key, args.show_stack, &mut out)?;
                        }
                    },
                    Err(err) => error!("{}, line ignored", err),
                }
            }
        },
    }

    Ok(())
}

/// Presses a single key and prints what the calculator now shows.
fn press_and_show(
    engine: &mut RpnEngine,
    key: Key,
    show_stack: bool,
    out: &mut impl Write
) -> Result<(), CliError> {

    engine.press(key);

    if show_stack {
        writeln!(out, "{:>6} ->\n{}\n", key.to_string(), engine.observe())?;
    } else {
        writeln!(out, "{:>6} -> {}", key.to_string(), engine.display())?;
    }

    Ok(())
}
