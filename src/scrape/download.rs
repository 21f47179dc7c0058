// src/scrape/download.rs
use std::path::{Path, PathBuf};

use tracing::info;
use url::Url;

use crate::core::sanitize::last_segment;
use crate::core::{Document, Fetch};
use crate::error::{Result, ScrapeError};
use crate::file::ensure_directory;
use crate::specs::download::pdf_a4_link;

/// `download` mode: save the PDF (A4) documentation archive under `downloads_dir`,
/// named after the last segment of its URL. Returns the written path.
pub fn download(fetcher: &dyn Fetch, docs: &Url, downloads_dir: &Path) -> Result<PathBuf> {
    let page_url = docs.join("download.html")?;
    let doc = Document::parse(&fetcher.get_text(&page_url)?);
    let archive_url = page_url.join(&pdf_a4_link(&doc)?)?;

    let filename = last_segment(archive_url.path())
        .ok_or_else(|| ScrapeError::Extraction(format!("no file name in {archive_url}")))?;

    ensure_directory(downloads_dir)?;
    let path = downloads_dir.join(filename);
    let bytes = fetcher.get_bytes(&archive_url)?;
    std::fs::write(&path, &bytes)?;

    info!(path = %path.display(), bytes = bytes.len(), "archive downloaded and saved");
    Ok(path)
}
