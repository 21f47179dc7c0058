// src/scrape/versions.rs
use url::Url;

use crate::core::{Document, Fetch};
use crate::error::Result;
use crate::report::Report;
use crate::specs::versions::parse_versions;

/// `latest-versions` mode: documentation link, version and status per release.
pub fn latest_versions(fetcher: &dyn Fetch, docs: &Url) -> Result<Report> {
    let doc = Document::parse(&fetcher.get_text(docs)?);
    let rows = parse_versions(&doc)?;
    Ok(Report::new(row!["Documentation link", "Version", "Status"], rows))
}
