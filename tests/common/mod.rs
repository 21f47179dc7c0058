// tests/common/mod.rs
//
// In-memory stand-in for the HTTP layer: URL → page body, anything else is a
// transport error.
#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::HashMap;

use docs_scrape::core::Fetch;
use docs_scrape::{Result, ScrapeError};
use url::Url;

#[derive(Default)]
pub struct MapFetcher {
    pages: HashMap<String, Vec<u8>>,
    pub requested: RefCell<Vec<String>>,
}

impl MapFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(mut self, url: &str, body: impl Into<Vec<u8>>) -> Self {
        self.pages.insert(url.to_string(), body.into());
        self
    }
}

impl Fetch for MapFetcher {
    fn get_bytes(&self, url: &Url) -> Result<Vec<u8>> {
        self.requested.borrow_mut().push(url.to_string());
        self.pages
            .get(url.as_str())
            .cloned()
            .ok_or_else(|| ScrapeError::transport(url, "connection refused"))
    }
}

pub const PEP_BASE: &str = "https://peps.python.org/";

/// Listing page with one row per `(href, marker)`.
pub fn listing(rows: &[(&str, &str)]) -> String {
    let mut body = String::from(
        r#"<html><body><section id="numerical-index"><table>
        <thead><tr><th>Type</th><th>PEP</th><th>Title</th></tr></thead><tbody>"#,
    );
    for (href, marker) in rows {
        body.push_str(&format!(
            r#"<tr><td><abbr title="x">{marker}</abbr></td>
            <td><a class="pep reference internal" href="{href}">n</a></td><td>title</td></tr>"#
        ));
    }
    body.push_str("</tbody></table></section></body></html>");
    body
}

/// PEP page whose header list reports `status`.
pub fn detail(status: &str) -> String {
    format!(
        r#"<html><body><dl class="rfc2822 field-list simple">
<dt class="field-odd">Author<span class="colon">:</span></dt>
<dd class="field-odd">Someone</dd>
<dt class="field-even">Status<span class="colon">:</span></dt>
<dd class="field-even"><abbr title="...">{status}</abbr></dd>
</dl></body></html>"#
    )
}
