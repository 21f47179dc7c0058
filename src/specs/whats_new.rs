// src/specs/whats_new.rs
//! “What’s New” index (`docs.python.org/3/whatsnew/`) and its articles.

use url::Url;

use crate::core::{find_tag, Document};
use crate::error::Result;

pub const ARTICLE_LINKS: &str = "#what-s-new-in-python div.toctree-wrapper li.toctree-l1 a";
pub const ARTICLE_LINK_TEXT: &str = "What’s New";

/// Absolute links to every per-version article, in page order.
/// Nested table-of-contents entries (section links) are filtered out by text.
pub fn article_links(doc: &Document, page_url: &Url) -> Result<Vec<Url>> {
    let mut out = Vec::new();
    for a in doc.root().find_all(ARTICLE_LINKS)? {
        if !a.text().contains(ARTICLE_LINK_TEXT) {
            continue;
        }
        if let Some(href) = a.attr("href") {
            out.push(page_url.join(href)?);
        }
    }
    Ok(out)
}

/// `(title, editors)` from an article: the `<h1>` and the first `<dl>`.
pub fn parse_article(doc: &Document) -> Result<(String, String)> {
    let root = doc.root();
    let title = find_tag(&root, "h1")?.text();
    let editors = find_tag(&root, "dl")?.text();
    Ok((title, editors))
}
