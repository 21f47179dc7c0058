// src/specs/download.rs
//! Downloads page (`docs.python.org/3/download.html`).

use regex::Regex;

use crate::core::{find_tag, Document};
use crate::error::{Result, ScrapeError};

pub const PDF_A4_HREF: &str = r".+pdf-a4\.zip$";

/// `href` of the PDF (A4 paper) zip archive in the first table.
pub fn pdf_a4_link(doc: &Document) -> Result<String> {
    let pattern = Regex::new(PDF_A4_HREF)
        .map_err(|e| ScrapeError::Configuration(format!("archive pattern: {e}")))?;
    let table = find_tag(&doc.root(), "table")?;

    table
        .find_all("a[href]")?
        .into_iter()
        .filter_map(|a| a.attr("href"))
        .find(|href| pattern.is_match(href))
        .map(str::to_string)
        .ok_or_else(|| ScrapeError::Extraction(format!("tag not found: a[href~={PDF_A4_HREF}]")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_a4_pdf_archive() {
        let html = r#"
            <table class="docutils">
              <tr><th>Format</th><th>Packed as .zip</th></tr>
              <tr><td>PDF (US-Letter paper size)</td><td><a href="archives/python-3.13-docs-pdf-letter.zip">Download</a></td></tr>
              <tr><td>PDF (A4 paper size)</td><td><a href="archives/python-3.13-docs-pdf-a4.zip">Download</a></td></tr>
            </table>
        "#;
        let link = pdf_a4_link(&Document::parse(html)).unwrap();
        assert_eq!(link, "archives/python-3.13-docs-pdf-a4.zip");
    }

    #[test]
    fn no_archive_link_is_an_error() {
        let html = r#"<table><tr><td><a href="archives/docs-html.zip">x</a></td></tr></table>"#;
        assert!(matches!(pdf_a4_link(&Document::parse(html)), Err(ScrapeError::Extraction(_))));
    }
}
