//! # simpletable
//!
//! Turns lightweight `<SimpleTable>` markup into a responsive table widget.
//!
//! ## Features
//!
//! - **Inline links**: any value may end in `[href="url"]` to render as an anchor
//! - **Four layouts**: horizontal and vertical grids, stacked cards, and a
//!   single-record select view
//! - **Independent mobile layout**: a second presentation for narrow viewports
//! - **Pagination**: page windowing over whichever layouts are active
//! - **Layered settings**: defaults, global settings and `data-*` attributes
//! - **WASM Support**: Compiles to WebAssembly for browser usage
//!
//! ## Usage Examples
//!
//! ### Rendering a block
//!
//! ```rust
//! use simpletable::render_table;
//! use serde_json::json;
//!
//! let out = render_table(
//!     r#"<SimpleTable data-layout="vertical">
//!         <TableHeaders>Name|Site</TableHeaders>
//!         <TableRow>Acme|Home [href="https://acme.test"]</TableRow>
//!     </SimpleTable>"#,
//!     &json!({}),
//! );
//! assert!(out.html.contains("vertical-view"));
//! assert!(out.html.contains(r#"<a href="https://acme.test">Home</a>"#));
//! ```
//!
//! ### Driving a live table
//!
//! ```rust
//! use simpletable::{LayoutSettings, SimpleTable, SourceBlock, TableEvent};
//!
//! let source = SourceBlock::new(Some("N"), &["1", "2", "3"]);
//! let settings = LayoutSettings {
//!     show_pagination: true,
//!     items_per_page: 2,
//!     ..Default::default()
//! };
//! let mut table = SimpleTable::new(&source, settings);
//! table.handle(TableEvent::NextPage).unwrap();
//! assert_eq!(table.pagination_state().unwrap().current_page, 2);
//! ```

/// Core table modules
pub mod core;

/// Data layer - static name tables
pub mod data;

/// Feature modules - page embedding
pub mod features;

/// Utility modules
pub mod utils;

/// WASM bindings (feature-gated)
#[cfg(feature = "wasm")]
pub mod wasm;

pub use core::{
    parse_inline, parse_table_data, ContentNode, Element, Layout, LayoutSettings, LifecycleEvent,
    LifecycleListener, LoadingState, MobileLayout, PaginationState, SimpleTable, SourceBlock,
    TableData, TableEvent,
};

pub use data::names;
pub use features::embed;
pub use utils::diagnostics;
pub use utils::error::{RenderOutput, TableError, TableResult, TableWarning};

use serde_json::Value;

/// Render the first `<SimpleTable>` block of `markup`
///
/// # Arguments
/// * `markup` - Source block markup
/// * `global` - Global settings tree, merged under the block's `data-*` attributes
///
/// # Returns
/// The widget markup and any settings warnings
pub fn render_table(markup: &str, global: &Value) -> RenderOutput {
    features::embed::render_fragment(markup, global)
}

/// Render every `<SimpleTable>` block of a page in place
pub fn render_document(html: &str, global: &Value) -> RenderOutput {
    features::embed::render_document(html, global)
}

/// Render with already resolved settings
pub fn render_with_settings(markup: &str, settings: LayoutSettings) -> String {
    SimpleTable::new(&SourceBlock::from_markup(markup), settings).to_html()
}

/// Parse the first block of `markup` without building a widget
pub fn parse_table(markup: &str) -> TableData {
    parse_table_data(&SourceBlock::from_markup(markup))
}
