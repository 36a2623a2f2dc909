//! Inline cell content
//!
//! A raw cell value is either plain text or an embedded link written as
//! `label [href="url"]`. The link directive must close the value; anything
//! else (including near-misses such as a missing quote) stays plain text.

use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;

use super::tree::{Element, Node};

lazy_static! {
    /// `<label>[ws][href="<url>"]` anchored at the end of the value
    static ref LINK_PATTERN: Regex = Regex::new(r#"(?s)^(.*?)\s*\[href="([^"]+)"\]$"#).unwrap();
}

/// Parsed presentation value of a cell
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum ContentNode {
    PlainText(String),
    Link { href: String, label: String },
}

impl ContentNode {
    /// Build a node for placement in the visual tree
    pub fn render(&self) -> Node {
        match self {
            ContentNode::PlainText(text) => Node::Text(text.clone()),
            ContentNode::Link { href, label } => Element::new("a")
                .with_attr("href", href.as_str())
                .with_text(label.as_str())
                .into(),
        }
    }

    /// The text a reader sees for this node
    pub fn display_text(&self) -> &str {
        match self {
            ContentNode::PlainText(text) => text,
            ContentNode::Link { label, .. } => label,
        }
    }

    pub fn is_link(&self) -> bool {
        matches!(self, ContentNode::Link { .. })
    }
}

/// Parse one raw cell string into a content node
pub fn parse_inline(raw: &str) -> ContentNode {
    match LINK_PATTERN.captures(raw) {
        Some(caps) => ContentNode::Link {
            href: caps[2].to_string(),
            label: caps[1].trim().to_string(),
        },
        None => ContentNode::PlainText(raw.to_string()),
    }
}

/// Whether a value carries something that looks like a link directive
pub(crate) fn mentions_link(raw: &str) -> bool {
    raw.contains("[href=")
}
