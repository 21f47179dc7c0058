// src/output.rs
//! Renderers for a finished [`Report`]: plain lines, an aligned table, or a
//! delimited file under the results directory.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;
use tracing::info;
use unicode_width::UnicodeWidthStr;

use crate::config::options::{AppOptions, FileFormat, OutputMode, ParserMode};
use crate::error::Result;
use crate::file::{result_file_path, write_rows_to_path};
use crate::report::Report;

/// Render `report` the way `options.output` asks. Returns the file written, if any.
pub fn control_output(report: &Report, options: &AppOptions, now: NaiveDateTime) -> Result<Option<PathBuf>> {
    match options.output {
        OutputMode::Default => {
            default_output(report, io::stdout().lock())?;
            Ok(None)
        }
        OutputMode::Pretty => {
            pretty_output(report, io::stdout().lock())?;
            Ok(None)
        }
        OutputMode::File => {
            let path = file_output(report, options.mode, options.format, &options.results_dir(), now)?;
            Ok(Some(path))
        }
    }
}

/// One line per row, cells separated by a space.
pub fn default_output<W: Write>(report: &Report, mut w: W) -> Result<()> {
    for row in report.rows() {
        writeln!(w, "{}", row.join(" "))?;
    }
    Ok(())
}

/// Left-aligned bordered table; the first row is the header.
pub fn pretty_output<W: Write>(report: &Report, mut w: W) -> Result<()> {
    let cols = report.rows().iter().map(Vec::len).max().unwrap_or(0);
    let mut widths = vec![0usize; cols];
    for row in report.rows() {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.width());
        }
    }

    let border = {
        let mut s = s!("+");
        for wd in &widths {
            s.push_str(&"-".repeat(wd + 2));
            s.push('+');
        }
        s
    };
    let line = |row: &[String]| {
        let mut s = s!("|");
        for (i, wd) in widths.iter().enumerate() {
            let cell = row.get(i).map(String::as_str).unwrap_or("");
            s.push(' ');
            s.push_str(cell);
            s.push_str(&" ".repeat(wd - cell.width() + 1));
            s.push('|');
        }
        s
    };

    writeln!(w, "{border}")?;
    writeln!(w, "{}", line(report.header()))?;
    writeln!(w, "{border}")?;
    for row in report.body() {
        writeln!(w, "{}", line(row))?;
    }
    writeln!(w, "{border}")?;
    Ok(())
}

/// Write `results_dir/<mode>_<timestamp>.<ext>` and log where it went.
pub fn file_output(
    report: &Report,
    mode: ParserMode,
    format: FileFormat,
    results_dir: &Path,
    now: NaiveDateTime,
) -> Result<PathBuf> {
    let path = result_file_path(results_dir, mode, format, now);
    write_rows_to_path(&path, report.rows(), format)?;
    info!(path = %path.display(), "results file saved");
    Ok(path)
}
