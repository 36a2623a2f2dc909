//! Feature modules
//!
//! - Embedding: rendering every table block of an HTML page in place

pub mod embed;

pub use embed::{render_document, render_fragment};
