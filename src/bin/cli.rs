// src/bin/cli.rs
use clap::Parser;
use tracing::{error, info};

use docs_scrape::{cli, log};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = cli::Cli::parse();
    let options = args.options();
    let _guard = log::init(&options.logs_dir())?;

    info!("parser started");
    info!(?args, "command line arguments");

    let result = cli::run(&options);
    if let Err(e) = &result {
        error!(error = %e, mode = %options.mode, "parser failed");
    }
    info!("parser finished");

    // Non-zero exit on a fatal error.
    Ok(result?)
}
