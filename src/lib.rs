// src/lib.rs
#[macro_use]
pub mod macros;

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod file;
pub mod log;
pub mod output;
pub mod progress;
pub mod report;
pub mod scrape;
pub mod specs;
pub mod status;

pub use error::{Result, ScrapeError};
