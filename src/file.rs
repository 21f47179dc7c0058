// src/file.rs

use std::{
    fs::{self, File},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use chrono::NaiveDateTime;
use csv::{QuoteStyle, Terminator, WriterBuilder};

use crate::config::consts::DATETIME_FORMAT;
use crate::config::options::{FileFormat, ParserMode};
use crate::error::{Result, ScrapeError};
use crate::report::Row;

pub fn ensure_directory(dir: &Path) -> Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(ScrapeError::Configuration(format!(
            "Path exists but is not a directory: {}",
            dir.display()
        )));
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}

/// `<dir>/<mode>_<timestamp>.<ext>`
pub fn result_file_path(dir: &Path, mode: ParserMode, format: FileFormat, now: NaiveDateTime) -> PathBuf {
    let stamp = now.format(DATETIME_FORMAT);
    dir.join(format!("{mode}_{stamp}.{}", format.ext()))
}

/// Write rows to any writer: every field quoted, `\n` line ends.
/// Rows may have different lengths.
pub fn write_rows<W: Write>(w: W, rows: &[Row], format: FileFormat) -> Result<()> {
    let mut out = WriterBuilder::new()
        .delimiter(format.delim())
        .quote_style(QuoteStyle::Always)
        .terminator(Terminator::Any(b'\n'))
        .flexible(true)
        .from_writer(w);
    for row in rows {
        out.write_record(row)?;
    }
    out.flush()?;
    Ok(())
}

/// Create/truncate `path` (and its parent dir) and write all rows, UTF-8.
pub fn write_rows_to_path(path: &Path, rows: &[Row], format: FileFormat) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }
    let file = File::create(path)?; // truncate/overwrite
    write_rows(BufWriter::new(file), rows, format)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn result_file_name_has_mode_and_timestamp() {
        let now = NaiveDate::from_ymd_opt(2026, 10, 18).unwrap().and_hms_opt(9, 5, 7).unwrap();
        let p = result_file_path(Path::new("results"), ParserMode::WhatsNew, FileFormat::Tsv, now);
        assert_eq!(p, Path::new("results").join("whats-new_2026-10-18_09-05-07.tsv"));
    }

    #[test]
    fn rows_of_different_length_are_all_quoted() {
        let rows = vec![row!["Status", "Count"], row!["Says \"hi\""], row!["Total", 1]];
        let mut buf = Vec::new();
        write_rows(&mut buf, &rows, FileFormat::Csv).unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "\"Status\",\"Count\"\n\"Says \"\"hi\"\"\"\n\"Total\",\"1\"\n"
        );
    }

    #[test]
    fn ensure_directory_rejects_a_file() {
        let dir = tempfile::tempdir().unwrap();
        let f = dir.path().join("taken");
        fs::write(&f, "x").unwrap();
        assert!(matches!(ensure_directory(&f), Err(ScrapeError::Configuration(_))));
        ensure_directory(&dir.path().join("a/b")).unwrap();
        assert!(dir.path().join("a/b").is_dir());
    }
}
