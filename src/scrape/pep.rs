// src/scrape/pep.rs
//! Status reconciliation for the PEP index.
//!
//! Every listing row previews a PEP's status with one letter; the PEP page
//! holds the real one. For each row, in listing order and one fetch at a time:
//! fetch the page, read the status, check it against the preview via the
//! expected-status table, and fold the outcome into a [`Reconciliation`].
//!
//! A failed fetch or unreadable page skips that PEP (logged, counted as
//! unresolved). An unknown preview code means the table itself is wrong and
//! ends the run.
//!
//! Mismatched PEPs still count under the status their page reports; the
//! report totals what the pages say, the warnings list what disagrees.

use std::fmt;

use tracing::{debug, info, warn};
use url::Url;

use crate::core::{Document, Fetch};
use crate::error::Result;
use crate::progress::Progress;
use crate::report::{status_report, Report, StatusTally};
use crate::specs::pep::{extract_status, list_records, ListingRecord};
use crate::status::{ExpectedStatusTable, Verdict};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UnresolvedReason {
    /// The PEP page could not be fetched.
    Transport(String),
    /// The PEP page (or its link) did not have the expected structure.
    Structure(String),
    /// The header list has no `Status:` term.
    MissingStatus,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ReconciliationOutcome {
    Matched { status: String },
    Mismatched { status: String, expected: &'static [&'static str] },
    Unresolvable { reason: UnresolvedReason },
}

/// A PEP whose page status disagrees with its listing preview.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MismatchWarning {
    pub link: String,
    pub status: String,
    pub expected: &'static [&'static str],
}

impl fmt::Display for MismatchWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Mismatched status: {}. Status on page: {}. Expected: {}.",
            self.link,
            self.status,
            self.expected.join(", ")
        )
    }
}

/// Accumulator threaded through the run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Reconciliation {
    pub tally: StatusTally,
    pub warnings: Vec<MismatchWarning>,
    /// Listing records that produced no status.
    pub unresolved: usize,
    /// Listing rows that could not be read as a record at all.
    pub skipped_rows: usize,
}

impl Reconciliation {
    fn absorb(mut self, link: &Url, outcome: ReconciliationOutcome) -> Self {
        match outcome {
            ReconciliationOutcome::Matched { status } => {
                self.tally = self.tally.increment(&status);
            }
            ReconciliationOutcome::Mismatched { status, expected } => {
                self.tally = self.tally.increment(&status);
                self.warnings.push(MismatchWarning { link: link.to_string(), status, expected });
            }
            ReconciliationOutcome::Unresolvable { .. } => self.unresolved += 1,
        }
        self
    }

    fn skip_row(mut self) -> Self {
        self.skipped_rows += 1;
        self
    }

    /// Records that yielded a status (matched or not).
    pub fn resolved(&self) -> usize {
        self.tally.total()
    }
}

/// Fetch, read and classify one listing record.
///
/// Only a classification error escapes; fetch and markup failures become
/// `Unresolvable` and are logged here.
pub fn reconcile_record(
    record: &ListingRecord,
    base: &Url,
    fetcher: &dyn Fetch,
    table: &ExpectedStatusTable,
) -> Result<(Url, ReconciliationOutcome)> {
    let unresolvable = |reason| ReconciliationOutcome::Unresolvable { reason };

    let link = match base.join(&record.link) {
        Ok(url) => url,
        Err(e) => {
            warn!(href = %record.link, error = %e, "bad PEP link");
            let fallback = base.clone();
            return Ok((fallback, unresolvable(UnresolvedReason::Structure(e.to_string()))));
        }
    };

    let page = match fetcher.get_text(&link) {
        Ok(text) => Document::parse(&text),
        Err(e) if e.is_recoverable() => {
            warn!(url = %link, error = %e, "could not load PEP page");
            return Ok((link, unresolvable(UnresolvedReason::Transport(e.to_string()))));
        }
        Err(e) => return Err(e),
    };

    let status = match extract_status(&page) {
        Ok(Some(status)) => status,
        Ok(None) => {
            warn!(url = %link, "PEP page has no Status field");
            return Ok((link, unresolvable(UnresolvedReason::MissingStatus)));
        }
        Err(e) if e.is_recoverable() => {
            warn!(url = %link, error = %e, "could not read PEP status");
            return Ok((link, unresolvable(UnresolvedReason::Structure(e.to_string()))));
        }
        Err(e) => return Err(e),
    };

    let (verdict, expected) = table.classify(record.preview, &status)?;
    debug!(url = %link, preview = %record.preview, %status, ?verdict, "classified");
    let outcome = match verdict {
        Verdict::Match => ReconciliationOutcome::Matched { status },
        Verdict::Mismatch => ReconciliationOutcome::Mismatched { status, expected },
    };
    Ok((link, outcome))
}

/// Fold every listing item into one [`Reconciliation`], strictly in order.
pub fn reconcile_all<I>(
    records: I,
    base: &Url,
    fetcher: &dyn Fetch,
    table: &ExpectedStatusTable,
    mut progress: Option<&mut dyn Progress>,
) -> Result<Reconciliation>
where
    I: IntoIterator<Item = Result<ListingRecord>>,
{
    let records = records.into_iter();
    if let Some(p) = progress.as_deref_mut() {
        p.begin(records.size_hint().0);
    }

    let result = records.into_iter().try_fold(Reconciliation::default(), |acc, item| {
        let (acc, label) = match item {
            Ok(record) => {
                let (link, outcome) = reconcile_record(&record, base, fetcher, table)?;
                (acc.absorb(&link, outcome), record.link)
            }
            Err(e) if e.is_recoverable() => {
                warn!(error = %e, "skipping unreadable listing row");
                (acc.skip_row(), s!("(skipped row)"))
            }
            Err(e) => return Err(e),
        };
        if let Some(p) = progress.as_deref_mut() {
            p.item_done(&label);
        }
        Ok(acc)
    });

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    result
}

/// `pep` mode: reconcile the whole PEP index and report counts per status.
pub fn pep(fetcher: &dyn Fetch, base: &Url, progress: Option<&mut dyn Progress>) -> Result<Report> {
    let table = ExpectedStatusTable::standard();
    let listing = Document::parse(&fetcher.get_text(base)?);
    let records = list_records(&listing)?;

    let run = reconcile_all(records, base, fetcher, &table, progress)?;

    for warning in &run.warnings {
        warn!("{warning}");
    }
    info!(
        resolved = run.resolved(),
        mismatched = run.warnings.len(),
        unresolved = run.unresolved,
        skipped_rows = run.skipped_rows,
        "PEP statuses reconciled"
    );
    Ok(status_report(&run.tally, &table))
}
