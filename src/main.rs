mod cli;
mod commands;
mod config;
mod convert;
mod logging;

use std::io;
use std::process;

use anyhow::Result;
use clap::Parser;
use tracing::debug;

use crate::cli::Cli;
use crate::config::AlmanacConfig;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(&cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = AlmanacConfig::load(cli.config.as_deref())?;
    debug!("dispatching command");
    let stdout = io::stdout();
    let mut out = stdout.lock();
    commands::run(&cli.command, &config, &mut out)
}
