// src/specs/versions.rs
//! “All versions” list from the docs sidebar (`docs.python.org/3/`).

use regex::Regex;

use crate::core::Document;
use crate::error::{Result, ScrapeError};
use crate::report::Row;

pub const SIDEBAR_LISTS: &str = "div.sphinxsidebarwrapper > ul";
pub const ALL_VERSIONS_TEXT: &str = "All versions";
pub const VERSION_PATTERN: &str = r"Python (?P<version>\d\.\d+) \((?P<status>.*)\)";

/// `[link, version, status]` per sidebar entry. Entries that don't look like
/// `Python X.Y (status)` keep their text as version and an empty status.
pub fn parse_versions(doc: &Document) -> Result<Vec<Row>> {
    let pattern = Regex::new(VERSION_PATTERN)
        .map_err(|e| ScrapeError::Configuration(format!("version pattern: {e}")))?;

    let list = doc
        .root()
        .find_all(SIDEBAR_LISTS)?
        .into_iter()
        .find(|ul| ul.raw_text().contains(ALL_VERSIONS_TEXT))
        .ok_or_else(|| ScrapeError::Extraction(s!("nothing found: no version list in the sidebar")))?;

    let mut rows = Vec::new();
    for a in list.find_all("a")? {
        let link = a.attr("href").unwrap_or_default();
        let text = a.text();
        let row = match pattern.captures(&text) {
            Some(caps) => row![link, &caps["version"], &caps["status"]],
            None => row![link, text, ""],
        };
        rows.push(row);
    }
    Ok(rows)
}
