// src/core/mod.rs

pub mod html;
pub mod net;
pub mod sanitize;

pub use html::{find_tag, Document, Node, Sibling};
pub use net::{CachedClient, Fetch};
