// src/specs/pep.rs
//! PEP index (`peps.python.org`).
//!
//! Listing page: `#numerical-index` table, one row per PEP, header row first.
//!   <tr><td><abbr title="Standards Track, Final">SF</abbr></td>
//!       <td><a class="pep reference internal" href="pep-0008/">8</a></td> …</tr>
//!
//! Detail page: the PEP header is a definition list
//!   <dl class="rfc2822 field-list simple">
//!     <dt>Status<span class="colon">:</span></dt>
//!     <dd><abbr title="…">Final</abbr></dd>
//!   </dl>

use crate::core::{find_tag, Document, Node, Sibling};
use crate::error::{Result, ScrapeError};
use crate::status::PreviewCode;

pub const LISTING_ROWS: &str = "#numerical-index tr";
pub const PEP_LINK: &str = "a.pep.reference.internal";
pub const MARKER: &str = "abbr";

pub const HEADER_FIELDS: &str = "dl.rfc2822.field-list.simple";
pub const STATUS_TERM: &str = "Status:";
/// Nodes between the `Status:` term and its value: the whitespace text
/// between `</dt>` and `<dd>`.
pub const STATUS_VALUE_SKIP: usize = 1;

/// One row of the listing page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListingRecord {
    /// `href` as written on the page (usually relative).
    pub link: String,
    pub preview: PreviewCode,
}

/// Rows of the listing, header skipped. Each row is extracted only when the
/// iterator reaches it; a malformed row is an `Err` item, not the end.
pub fn list_records<'a>(doc: &'a Document) -> Result<impl Iterator<Item = Result<ListingRecord>> + 'a> {
    let rows = doc.root().find_all(LISTING_ROWS)?;
    Ok(rows.into_iter().skip(1).map(|row| parse_row(&row)))
}

fn parse_row(row: &Node<'_>) -> Result<ListingRecord> {
    let link = find_tag(row, PEP_LINK)?
        .attr("href")
        .ok_or_else(|| ScrapeError::Extraction(format!("{PEP_LINK} without href")))?;
    let marker = find_tag(row, MARKER)?.text();
    Ok(ListingRecord {
        link: link.to_string(),
        preview: PreviewCode::from_marker(&marker),
    })
}

/// Authoritative status from a PEP page.
///
/// `Ok(None)` when the header list has no `Status:` term. A term whose value
/// node is missing or is not plain text is an extraction error.
pub fn extract_status(doc: &Document) -> Result<Option<String>> {
    let fields = find_tag(&doc.root(), HEADER_FIELDS)?;

    for term in fields.child_elements() {
        if term.name() != "dt" || term.text() != STATUS_TERM {
            continue;
        }
        let value = match term.nth_next_sibling(STATUS_VALUE_SKIP) {
            Some(Sibling::Element(dd)) if dd.name() == "dd" => dd.string().map(str::trim),
            _ => None,
        };
        return match value {
            Some(status) if !status.is_empty() => Ok(Some(status.to_string())),
            _ => Err(ScrapeError::Extraction(format!(
                "no plain-text value {STATUS_VALUE_SKIP} node(s) after {STATUS_TERM:?}"
            ))),
        };
    }
    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;

    const LISTING: &str = r#"
        <html><body>
        <section id="numerical-index">
          <table class="pep-zero-table docutils align-default">
            <thead>
              <tr class="row-odd"><th class="head">Type</th><th class="head">PEP</th><th>Title</th></tr>
            </thead>
            <tbody>
              <tr class="row-even">
                <td><abbr title="Process, Active">PA</abbr></td>
                <td><a class="pep reference internal" href="pep-0001/" title="PEP 1">1</a></td>
                <td>PEP Purpose and Guidelines</td>
              </tr>
              <tr class="row-odd">
                <td><abbr title="Standards Track, Final">SF</abbr></td>
                <td><a class="pep reference internal" href="pep-0008/" title="PEP 8">8</a></td>
                <td>Style Guide</td>
              </tr>
              <tr class="row-even">
                <td><abbr title="Standards Track">S</abbr></td>
                <td><a class="pep reference internal" href="pep-0750/">750</a></td>
                <td>Template Strings</td>
              </tr>
            </tbody>
          </table>
        </section>
        </body></html>
    "#;

    fn detail(status_dd: &str) -> String {
        format!(
            r#"<html><body>
            <dl class="rfc2822 field-list simple">
            <dt class="field-odd">Author<span class="colon">:</span></dt>
            <dd class="field-odd">Guido van Rossum</dd>
            <dt class="field-even">Status<span class="colon">:</span></dt>
            {status_dd}
            <dt class="field-odd">Type<span class="colon">:</span></dt>
            <dd class="field-odd">Process</dd>
            </dl></body></html>"#
        )
    }

    #[test]
    fn lists_rows_after_header() {
        let doc = Document::parse(LISTING);
        let records: Vec<ListingRecord> = list_records(&doc).unwrap().map(|r| r.unwrap()).collect();
        assert_eq!(records, vec![
            ListingRecord { link: s!("pep-0001/"), preview: PreviewCode(Some('A')) },
            ListingRecord { link: s!("pep-0008/"), preview: PreviewCode(Some('F')) },
            ListingRecord { link: s!("pep-0750/"), preview: PreviewCode::EMPTY },
        ]);
    }

    #[test]
    fn row_without_marker_is_an_error_item_not_the_end() {
        let html = r#"
            <table id="numerical-index">
              <tr><th>Type</th><th>PEP</th></tr>
              <tr><td></td><td><a class="pep reference internal" href="pep-0002/">2</a></td></tr>
              <tr><td><abbr>PA</abbr></td><td><a class="pep reference internal" href="pep-0003/">3</a></td></tr>
            </table>
        "#;
        let doc = Document::parse(html);
        let items: Vec<_> = list_records(&doc).unwrap().collect();
        assert_eq!(items.len(), 2);
        assert!(matches!(items[0], Err(ScrapeError::Extraction(_))));
        assert_eq!(items[1].as_ref().unwrap().link, "pep-0003/");
    }

    #[test]
    fn status_is_read_through_nested_abbr() {
        let doc = Document::parse(&detail(
            r#"<dd class="field-even"><abbr title="Accepted and implemented">Final</abbr></dd>"#,
        ));
        assert_eq!(extract_status(&doc).unwrap().as_deref(), Some("Final"));
    }

    #[test]
    fn status_with_plain_text_value() {
        let doc = Document::parse(&detail(r#"<dd class="field-even">Self-Deferred</dd>"#));
        assert_eq!(extract_status(&doc).unwrap().as_deref(), Some("Self-Deferred"));
    }

    #[test]
    fn status_value_with_mixed_markup_is_an_error() {
        let doc = Document::parse(&detail(
            r#"<dd class="field-even"><abbr>Final</abbr> <em>(see below)</em></dd>"#,
        ));
        assert!(matches!(extract_status(&doc), Err(ScrapeError::Extraction(_))));
    }

    #[test]
    fn status_value_missing_whitespace_gap_is_an_error() {
        // Minified markup: the node after the skip is the next <dt>, not the value.
        let html = r#"<dl class="rfc2822 field-list simple"><dt>Status:</dt><dd>Final</dd><dt>Type:</dt><dd>Process</dd></dl>"#;
        let doc = Document::parse(html);
        assert!(matches!(extract_status(&doc), Err(ScrapeError::Extraction(_))));
    }

    #[test]
    fn no_status_term_is_none() {
        let html = r#"<dl class="rfc2822 field-list simple">
            <dt>Author:</dt>
            <dd>Someone</dd>
        </dl>"#;
        let doc = Document::parse(html);
        assert_eq!(extract_status(&doc).unwrap(), None);
    }

    #[test]
    fn missing_header_list_is_an_error() {
        let doc = Document::parse("<html><body><dl><dt>Status:</dt>\n<dd>Final</dd></dl></body></html>");
        let err = extract_status(&doc).unwrap_err();
        assert_eq!(err.to_string(), format!("tag not found: {HEADER_FIELDS}"));
    }
}
