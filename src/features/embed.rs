//! Page embedding
//!
//! Renders every `<SimpleTable>` block of an HTML document in place. Each
//! block is marked `data-loading-state="built"` and the widget is inserted
//! right after its closing tag, so running the pass twice is harmless:
//! marked blocks are skipped.
//!
//! ## Example
//!
//! ```rust
//! use simpletable::embed::render_document;
//! use serde_json::json;
//!
//! let page = "<p>Team</p><SimpleTable><TableHeaders>Name</TableHeaders><TableRow>Ann</TableRow></SimpleTable>";
//! let out = render_document(page, &json!({}));
//! assert_eq!(out.tables, 1);
//! assert!(out.html.contains(r#"data-loading-state="built""#));
//! assert!(out.html.contains("wm-simple-table"));
//! ```

use lazy_static::lazy_static;
use log::debug;
use regex::Regex;
use serde_json::Value;

use crate::core::source::SourceBlock;
use crate::core::widget::SimpleTable;
use crate::utils::error::RenderOutput;

lazy_static! {
    /// Start tag attributes may quote a `>`, so quoted values are matched whole
    static ref BLOCK_PATTERN: Regex = Regex::new(
        r#"(?is)<simpletable\b((?:[^>"']|"[^"]*"|'[^']*')*)>(.*?)</simpletable\s*>"#
    )
    .unwrap();
}

/// Marker written on rendered blocks
pub const BUILT_MARKER: &str = r#" data-loading-state="built""#;

/// Render every unmarked block in `html`
pub fn render_document(html: &str, global: &Value) -> RenderOutput {
    let mut out = String::with_capacity(html.len() * 2);
    let mut warnings = Vec::new();
    let mut tables = 0;
    let mut last = 0;

    for caps in BLOCK_PATTERN.captures_iter(html) {
        let (Some(block), Some(attrs)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        let source = SourceBlock::from_markup(block.as_str());
        if source.loading_state().is_some() {
            debug!("embed: skipping block at {}, already built", block.start());
            continue;
        }

        let (widget, table_warnings) = SimpleTable::from_source(&source, global);
        warnings.extend(table_warnings);
        tables += 1;

        out.push_str(&html[last..attrs.end()]);
        out.push_str(BUILT_MARKER);
        out.push_str(&html[attrs.end()..block.end()]);
        out.push_str(&widget.to_html());
        last = block.end();
    }
    out.push_str(&html[last..]);

    debug!("embed: rendered {} table(s)", tables);
    let mut output = RenderOutput::new(out, tables);
    output.warnings = warnings;
    output
}

/// Render a single block, returning only the widget markup
pub fn render_fragment(markup: &str, global: &Value) -> RenderOutput {
    let source = SourceBlock::from_markup(markup);
    let (widget, warnings) = SimpleTable::from_source(&source, global);
    let mut output = RenderOutput::new(widget.to_html(), 1);
    output.warnings = warnings;
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    const BLOCK: &str = "<SimpleTable><TableHeaders>A|B</TableHeaders><TableRow>1|2</TableRow></SimpleTable>";

    #[test]
    fn test_widget_follows_block() {
        let page = format!("<main>{}</main>", BLOCK);
        let out = render_document(&page, &json!({}));
        assert_eq!(out.tables, 1);

        let closing = out.html.find("</SimpleTable>").unwrap();
        let widget = out.html.find("wm-simple-table").unwrap();
        assert!(widget > closing);
        assert!(out.html.starts_with(r#"<main><SimpleTable data-loading-state="built">"#));
        assert!(out.html.ends_with("</div></main>"));
    }

    #[test]
    fn test_second_pass_is_noop() {
        let first = render_document(BLOCK, &json!({}));
        let second = render_document(&first.html, &json!({}));
        assert_eq!(second.tables, 0);
        assert_eq!(second.html, first.html);
    }

    #[test]
    fn test_bare_loading_state_is_skipped() {
        let page = "<SimpleTable data-loading-state><TableHeaders>A</TableHeaders></SimpleTable>";
        let out = render_document(page, &json!({}));
        assert_eq!(out.tables, 0);
        assert_eq!(out.html, page);
    }

    #[test]
    fn test_quoted_angle_bracket_in_attribute() {
        let page = r#"<SimpleTable data-style-preset="a>b"><TableHeaders>A</TableHeaders><TableRow>1</TableRow></SimpleTable>"#;
        let out = render_document(page, &json!({}));
        assert_eq!(out.tables, 1);
        assert!(out
            .html
            .starts_with(r#"<SimpleTable data-style-preset="a>b" data-loading-state="built"><TableHeaders>"#));

        let second = render_document(&out.html, &json!({}));
        assert_eq!(second.tables, 0);
        assert_eq!(second.html, out.html);
    }

    #[test]
    fn test_every_block_rendered() {
        let page = format!("{0}<hr>{0}", BLOCK);
        let out = render_document(&page, &json!({}));
        assert_eq!(out.tables, 2);
        assert_eq!(out.html.matches("data-wm-plugin").count(), 2);
    }

    #[test]
    fn test_instance_attributes_override_global() {
        let page = r#"<SimpleTable data-layout="vertical"><TableHeaders>A</TableHeaders><TableRow>1</TableRow></SimpleTable>"#;
        let out = render_document(page, &json!({ "layout": "horizontal" }));
        assert!(out.html.contains("vertical-view"));
    }

    #[test]
    fn test_warnings_collected() {
        let page = r#"<SimpleTable data-items-per-page="zero"><TableHeaders>A</TableHeaders></SimpleTable>"#;
        let out = render_document(page, &json!({}));
        assert!(out.has_warnings());
        assert_eq!(out.warnings[0].key.as_deref(), Some("itemsPerPage"));
    }

    #[test]
    fn test_document_without_blocks() {
        let out = render_document("<p>nothing here</p>", &json!({}));
        assert_eq!(out.tables, 0);
        assert_eq!(out.html, "<p>nothing here</p>");
    }

    #[test]
    fn test_render_fragment() {
        let out = render_fragment(BLOCK, &json!({ "layout": "vertical" }));
        assert!(out.html.starts_with("<div class=\"wm-simple-table"));
        assert!(out.html.contains("vertical-view"));
    }
}
