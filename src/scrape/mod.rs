// src/scrape/mod.rs
//! Run-level orchestration per parser mode: fetch pages through a [`Fetch`],
//! hand them to `specs` for reading, apply skip-and-log policy, and shape the
//! result into a [`Report`].
use std::path::Path;

use url::Url;

use crate::config::consts::{MAIN_DOC_URL, MAIN_PEP_URL};
use crate::config::options::ParserMode;
use crate::core::Fetch;
use crate::error::Result;
use crate::progress::Progress;
use crate::report::Report;

mod download;
mod pep;
mod versions;
mod whats_new;

pub use download::download;
pub use pep::{
    pep, reconcile_all, reconcile_record, MismatchWarning, Reconciliation,
    ReconciliationOutcome, UnresolvedReason,
};
pub use versions::latest_versions;
pub use whats_new::whats_new;

/// Base URLs of the two sites.
#[derive(Clone, Debug)]
pub struct Sites {
    pub docs: Url,
    pub peps: Url,
}

impl Sites {
    pub fn python() -> Result<Self> {
        Ok(Self {
            docs: Url::parse(MAIN_DOC_URL)?,
            peps: Url::parse(MAIN_PEP_URL)?,
        })
    }
}

/// Dispatch one parser mode. `download` writes its archive and yields no report.
pub fn run(
    mode: ParserMode,
    sites: &Sites,
    fetcher: &dyn Fetch,
    downloads_dir: &Path,
    progress: Option<&mut dyn Progress>,
) -> Result<Option<Report>> {
    match mode {
        ParserMode::WhatsNew => whats_new(fetcher, &sites.docs, progress).map(Some),
        ParserMode::LatestVersions => latest_versions(fetcher, &sites.docs).map(Some),
        ParserMode::Download => download(fetcher, &sites.docs, downloads_dir).map(|_| None),
        ParserMode::Pep => pep(fetcher, &sites.peps, progress).map(Some),
    }
}
