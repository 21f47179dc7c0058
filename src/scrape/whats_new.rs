// src/scrape/whats_new.rs
use tracing::warn;
use url::Url;

use crate::core::{Document, Fetch};
use crate::error::Result;
use crate::progress::Progress;
use crate::report::Report;
use crate::specs::whats_new::{article_links, parse_article};

/// `whats-new` mode: one row per “What’s New” article.
/// Articles that fail to load or parse are logged and left out.
pub fn whats_new(fetcher: &dyn Fetch, docs: &Url, mut progress: Option<&mut dyn Progress>) -> Result<Report> {
    let index_url = docs.join("whatsnew/")?;
    let index = Document::parse(&fetcher.get_text(&index_url)?);
    let links = article_links(&index, &index_url)?;

    if let Some(p) = progress.as_deref_mut() {
        p.begin(links.len());
    }

    let mut rows = Vec::with_capacity(links.len());
    for link in links {
        let article = fetcher
            .get_text(&link)
            .and_then(|text| parse_article(&Document::parse(&text)));
        match article {
            Ok((title, editors)) => rows.push(row![link, title, editors]),
            Err(e) if e.is_recoverable() => warn!(url = %link, error = %e, "skipping article"),
            Err(e) => return Err(e),
        }
        if let Some(p) = progress.as_deref_mut() {
            p.item_done(link.as_str());
        }
    }

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    Ok(Report::new(row!["Article link", "Title", "Editor, Author"], rows))
}
