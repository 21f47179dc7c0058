// src/specs/mod.rs
//! # Scraping “specs” module
//!
//! Page-specific parsing for the two sites. Each spec knows *where the ground
//! truth lives in the HTML* of one page type and how to read it; it never
//! fetches, caches, or writes anything. Fetching and run-level policy (skip and
//! log, tallying, reporting) live in `scrape`.
//!
//! ## Conventions
//! - Input is an already-parsed [`crate::core::Document`]; all markup access goes
//!   through `core::html`, so specs are testable offline against inline fixtures.
//! - Selectors are named constants at the top of each spec. When the site changes
//!   its markup, the fix is a one-line constant edit.
//! - A missing required element is `ScrapeError::Extraction`, never a panic.
//!
//! ## Current specs
//! - `pep` – PEP index listing rows and the status field of a PEP page.
//! - `whats_new` – “What’s New” article links and article headers.
//! - `versions` – the “All versions” sidebar list.
//! - `download` – the PDF (A4) archive link on the downloads page.
pub mod download;
pub mod pep;
pub mod versions;
pub mod whats_new;
