// src/report.rs
//! Final tabular result handed to the output renderers.

use std::collections::BTreeMap;

use crate::status::ExpectedStatusTable;

pub type Row = Vec<String>;

/// Ordered rows, header first. Rows may differ in length.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Report {
    rows: Vec<Row>,
}

impl Report {
    pub fn new(header: Row, body: impl IntoIterator<Item = Row>) -> Self {
        let mut rows = vec![header];
        rows.extend(body);
        Report { rows }
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn header(&self) -> &Row {
        &self.rows[0]
    }

    pub fn body(&self) -> &[Row] {
        &self.rows[1..]
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.len() <= 1
    }
}

/// Running count of authoritative statuses.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StatusTally(BTreeMap<String, usize>);

impl StatusTally {
    pub fn increment(mut self, status: &str) -> Self {
        *self.0.entry(status.to_string()).or_insert(0) += 1;
        self
    }

    pub fn get(&self, status: &str) -> usize {
        self.0.get(status).copied().unwrap_or(0)
    }

    pub fn total(&self) -> usize {
        self.0.values().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.0.iter().map(|(k, v)| (k.as_str(), *v))
    }
}

/// Status/Count table: known statuses in table order, then any others
/// alphabetically, then the total.
pub fn status_report(tally: &StatusTally, table: &ExpectedStatusTable) -> Report {
    let order = table.canonical_order();
    let mut body: Vec<Row> = order
        .iter()
        .filter(|s| tally.get(s) > 0)
        .map(|s| row![s, tally.get(s)])
        .collect();

    // BTreeMap iteration is already alphabetical
    body.extend(
        tally.iter()
            .filter(|(s, _)| !order.iter().any(|o| o == s))
            .map(|(s, n)| row![s, n]),
    );
    body.push(row!["Total", tally.total()]);

    Report::new(row!["Status", "Count"], body)
}
