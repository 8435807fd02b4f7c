#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Command-line adapter that drives a Mars Rover session.

mod config;
mod render;
mod session;

use std::{
    io::{self, BufRead, Write},
    path::PathBuf,
};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::{
    config::Config,
    session::{Flow, Input, Session},
};

const DEFAULT_LOG_FILTER: &str = "warn";

/// Drive a grid rover with F, B, L and R commands.
#[derive(Debug, Parser)]
#[command(name = "mars-rover", version, after_help = render::HELP)]
struct Args {
    /// TOML file describing the start position and obstacles.
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Tracing filter directive; overrides `RUST_LOG`.
    #[arg(long, value_name = "FILTER")]
    log: Option<String>,

    /// Command batches to run in order. Reads stdin when omitted.
    batches: Vec<String>,
}

/// Entry point for the Mars Rover command-line interface.
fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.log.as_deref());

    let config = match &args.config {
        Some(path) => Config::from_path(path)?,
        None => Config::default(),
    };
    let mut session = Session::new(config.into_world());

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if args.batches.is_empty() {
        run_interactive(&mut session, io::stdin().lock(), &mut out)
    } else {
        for script in args.batches {
            debug!(script = script.as_str(), "running batch from arguments");
            let _ = session.handle(Input::Batch(script), &mut out)?;
        }
        Ok(())
    }
}

fn init_tracing(directive: Option<&str>) {
    let filter = match directive {
        Some(directive) => EnvFilter::new(directive),
        None => EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .compact()
        .init();
}

fn run_interactive(
    session: &mut Session,
    input: impl BufRead,
    out: &mut impl Write,
) -> Result<()> {
    writeln!(out, "Mars Rover. Type `help` for commands.")?;
    let _ = session.handle(Input::ShowPosition, out)?;
    prompt(out)?;

    for line in input.lines() {
        let line = line.context("failed to read command input")?;
        if session.handle(Input::parse(&line), out)? == Flow::Quit {
            break;
        }
        prompt(out)?;
    }
    Ok(())
}

fn prompt(out: &mut impl Write) -> io::Result<()> {
    write!(out, "> ")?;
    out.flush()
}
