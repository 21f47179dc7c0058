// src/core/html.rs
//! Thin extraction layer over `scraper`.
//!
//! Everything else in the crate reads markup through [`Document`] and [`Node`];
//! nothing outside this file names a `scraper` type. Selectors are plain CSS
//! strings and a miss is an `Option::None` (or `ScrapeError::Extraction` via
//! [`find_tag`]).

use scraper::{ElementRef, Html, Selector};

use crate::core::sanitize::normalize_ws;
use crate::error::{Result, ScrapeError};

pub struct Document(Html);

impl Document {
    pub fn parse(text: &str) -> Self {
        Document(Html::parse_document(text))
    }

    pub fn root(&self) -> Node<'_> {
        Node(self.0.root_element())
    }
}

#[derive(Clone, Copy)]
pub struct Node<'a>(ElementRef<'a>);

/// A sibling position in the tree: elements, text, or anything else
/// (comments, doctype) the parser kept.
pub enum Sibling<'a> {
    Element(Node<'a>),
    Text(&'a str),
    Other,
}

fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css)
        .map_err(|e| ScrapeError::Extraction(format!("invalid selector {css:?}: {e:?}")))
}

impl<'a> Node<'a> {
    pub fn find_first(&self, css: &str) -> Result<Option<Node<'a>>> {
        let sel = selector(css)?;
        Ok(self.0.select(&sel).next().map(Node))
    }

    pub fn find_all(&self, css: &str) -> Result<Vec<Node<'a>>> {
        let sel = selector(css)?;
        Ok(self.0.select(&sel).map(Node).collect())
    }

    pub fn name(&self) -> &'a str {
        self.0.value().name()
    }

    pub fn attr(&self, name: &str) -> Option<&'a str> {
        self.0.value().attr(name)
    }

    /// All descendant text, concatenated as-is.
    pub fn raw_text(&self) -> String {
        self.0.text().collect()
    }

    /// Descendant text with whitespace collapsed.
    pub fn text(&self) -> String {
        normalize_ws(&self.raw_text())
    }

    pub fn child_elements(self) -> impl Iterator<Item = Node<'a>> {
        self.0.children().filter_map(ElementRef::wrap).map(Node)
    }

    /// The node's content when it is exactly one string, possibly wrapped
    /// in a chain of single-child elements (`<dd><abbr>Final</abbr></dd>`).
    /// Mixed or empty content gives `None`.
    pub fn string(&self) -> Option<&'a str> {
        let mut children = self.0.children();
        let only = children.next()?;
        if children.next().is_some() {
            return None;
        }
        if let Some(text) = only.value().as_text() {
            return Some(&**text);
        }
        ElementRef::wrap(only).and_then(|el| Node(el).string())
    }

    /// Sibling `n` positions after this node, counting every node kind
    /// (`0` is the immediate next sibling).
    pub fn nth_next_sibling(&self, n: usize) -> Option<Sibling<'a>> {
        let node = self.0.next_siblings().nth(n)?;
        if let Some(el) = ElementRef::wrap(node) {
            return Some(Sibling::Element(Node(el)));
        }
        match node.value().as_text() {
            Some(text) => Some(Sibling::Text(&**text)),
            None => Some(Sibling::Other),
        }
    }
}

/// First match of `css` under `node`, or an extraction error naming the selector.
pub fn find_tag<'a>(node: &Node<'a>, css: &str) -> Result<Node<'a>> {
    node.find_first(css)?
        .ok_or_else(|| ScrapeError::Extraction(format!("tag not found: {css}")))
}
