// src/cli.rs
use std::path::PathBuf;
use std::str::FromStr;

use clap::Parser;
use tracing::info;

use crate::config::options::{AppOptions, FileFormat, OutputMode, ParserMode};
use crate::core::CachedClient;
use crate::error::Result;
use crate::output::control_output;
use crate::progress::ConsoleProgress;
use crate::scrape::{self, Sites};

/// Parser for the Python documentation and the PEP index.
#[derive(Debug, Parser)]
#[command(name = "docs_scrape", version, about)]
pub struct Cli {
    /// What to parse
    #[arg(value_enum)]
    pub mode: ParserMode,

    /// Output: default | pretty | file
    #[arg(short, long, value_parser = OutputMode::from_str, default_value = "default")]
    pub output: OutputMode,

    /// Delimited file format for `--output file`
    #[arg(short, long, value_enum, default_value_t = FileFormat::Csv)]
    pub format: FileFormat,

    /// Clear the HTTP response cache before running
    #[arg(short, long)]
    pub clear_cache: bool,

    /// Directory for results/, downloads/, logs/ and the cache
    #[arg(long, default_value = ".")]
    pub base_dir: PathBuf,
}

impl Cli {
    pub fn options(&self) -> AppOptions {
        let mut opts = AppOptions::new(self.mode).with_base_dir(&self.base_dir);
        opts.output = self.output;
        opts.format = self.format;
        opts.clear_cache = self.clear_cache;
        opts
    }
}

/// Run one mode end to end: cache setup, scrape, render.
pub fn run(options: &AppOptions) -> Result<()> {
    let client = CachedClient::new(options.cache_dir())?;
    if options.clear_cache {
        client.clear()?;
        info!("response cache cleared");
    }

    let sites = Sites::python()?;
    let mut progress = ConsoleProgress::new();
    let report = scrape::run(options.mode, &sites, &client, &options.downloads_dir(), Some(&mut progress))?;

    if let Some(report) = report {
        control_output(&report, options, chrono::Local::now().naive_local())?;
    }
    Ok(())
}
