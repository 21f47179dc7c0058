// src/status.rs
//! Expected-status table for the PEP index.
//!
//! The listing page marks each PEP with a short type/status abbreviation
//! (`SF`, `IA`, `P`, …). Its second letter is the *preview code*; the detail
//! page carries the authoritative status. This module maps codes to the
//! statuses they stand for and decides whether a detail status agrees.

use std::fmt;

use crate::config::consts::EXPECTED_STATUS;
use crate::error::{Result, ScrapeError};

/// Second letter of a listing marker; `None` when the marker has one letter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PreviewCode(pub Option<char>);

impl PreviewCode {
    pub const EMPTY: PreviewCode = PreviewCode(None);

    pub fn from_marker(marker: &str) -> Self {
        let mut chars = marker.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(_), Some(second)) => PreviewCode(Some(second)),
            _ => PreviewCode::EMPTY,
        }
    }
}

impl fmt::Display for PreviewCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(c) => write!(f, "{c}"),
            None => Ok(()),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verdict {
    Match,
    Mismatch,
}

#[derive(Clone, Copy, Debug)]
pub struct ExpectedStatusTable {
    entries: &'static [(Option<char>, &'static [&'static str])],
}

impl Default for ExpectedStatusTable {
    fn default() -> Self {
        Self::standard()
    }
}

impl ExpectedStatusTable {
    pub const fn standard() -> Self {
        Self { entries: EXPECTED_STATUS }
    }

    /// Acceptable statuses for `code`. An unknown code is a table defect.
    pub fn expected(&self, code: PreviewCode) -> Result<&'static [&'static str]> {
        self.entries
            .iter()
            .find(|(k, _)| *k == code.0)
            .map(|(_, v)| *v)
            .ok_or_else(|| ScrapeError::Classification(code.to_string()))
    }

    /// Compare on the first letter of `status`. The empty code has no
    /// letter, so there the status must be one of the expected set.
    pub fn classify(&self, code: PreviewCode, status: &str) -> Result<(Verdict, &'static [&'static str])> {
        let expected = self.expected(code)?;
        let matched = match code.0 {
            Some(c) => status.chars().next() == Some(c),
            None => expected.iter().any(|s| *s == status),
        };
        Ok((if matched { Verdict::Match } else { Verdict::Mismatch }, expected))
    }

    /// Every status the table knows, in enumeration order, without repeats.
    pub fn canonical_order(&self) -> Vec<&'static str> {
        let mut out: Vec<&'static str> = Vec::new();
        for (_, statuses) in self.entries {
            for &s in statuses.iter() {
                if !out.contains(&s) {
                    out.push(s);
                }
            }
        }
        out
    }
}
