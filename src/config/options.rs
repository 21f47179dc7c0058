// src/config/options.rs
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use clap::ValueEnum;

use super::consts::*;
use crate::error::ScrapeError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ParserMode {
    WhatsNew,
    LatestVersions,
    Download,
    Pep,
}

impl ParserMode {
    /// Name used on the command line and in result filenames.
    pub fn as_str(&self) -> &'static str {
        match self {
            ParserMode::WhatsNew => "whats-new",
            ParserMode::LatestVersions => "latest-versions",
            ParserMode::Download => "download",
            ParserMode::Pep => "pep",
        }
    }
}

impl fmt::Display for ParserMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputMode {
    #[default]
    Default,
    Pretty,
    File,
}

impl FromStr for OutputMode {
    type Err = ScrapeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "default" => Ok(OutputMode::Default),
            "pretty" => Ok(OutputMode::Pretty),
            "file" => Ok(OutputMode::File),
            _ => Err(ScrapeError::Configuration(format!("invalid output mode: {s}"))),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum FileFormat {
    #[default]
    Csv,
    Tsv,
}

impl FileFormat {
    pub fn ext(&self) -> &'static str {
        match self { FileFormat::Csv => "csv", FileFormat::Tsv => "tsv" }
    }
    pub fn delim(&self) -> u8 {
        match self { FileFormat::Csv => b',', FileFormat::Tsv => b'\t' }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppOptions {
    pub mode: ParserMode,
    pub output: OutputMode,
    pub format: FileFormat,
    pub clear_cache: bool,
    pub base_dir: PathBuf,
}

impl AppOptions {
    pub fn new(mode: ParserMode) -> Self {
        Self {
            mode,
            output: OutputMode::default(),
            format: FileFormat::default(),
            clear_cache: false,
            base_dir: PathBuf::from("."),
        }
    }

    pub fn results_dir(&self) -> PathBuf { self.base_dir.join(RESULTS_DIR) }
    pub fn downloads_dir(&self) -> PathBuf { self.base_dir.join(DOWNLOADS_DIR) }
    pub fn logs_dir(&self) -> PathBuf { self.base_dir.join(LOGS_DIR) }
    pub fn cache_dir(&self) -> PathBuf { self.base_dir.join(CACHE_DIR) }

    pub fn with_base_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.base_dir = dir.as_ref().to_path_buf();
        self
    }
}
