//! Static name tables
//!
//! Settings values and lifecycle events are matched against these tables.
//! Lookups trim and lowercase their input first.

use phf::phf_map;

use crate::core::settings::{Layout, MobileLayout};

/// `layout` setting values
pub static LAYOUT_NAMES: phf::Map<&'static str, Layout> = phf_map! {
    "horizontal" => Layout::Horizontal,
    "vertical" => Layout::Vertical,
    "select" => Layout::Select,
};

/// `mobileLayout` setting values
pub static MOBILE_LAYOUT_NAMES: phf::Map<&'static str, MobileLayout> = phf_map! {
    "overflow" => MobileLayout::Overflow,
    "stack" => MobileLayout::Stack,
    "select" => MobileLayout::Select,
    "none" => MobileLayout::None,
};

/// Event dispatched before the data is parsed
pub const BEFORE_INIT_EVENT: &str = "wmSimpleTable:beforeInit";

/// Event dispatched after the whole structure is built
pub const AFTER_INIT_EVENT: &str = "wmSimpleTable:afterInit";

/// Marker placed on the plugin root
pub const PLUGIN_ATTR_VALUE: &str = "simple-table";

/// Class names of the hook points in the rendered tree
pub mod classes {
    pub const PLUGIN: &str = "wm-simple-table";
    pub const TABLE_WRAPPER: &str = "table-wrapper";
    pub const TABLE: &str = "wm-table";
    pub const VERTICAL_VIEW: &str = "vertical-view";
    pub const MOBILE_OVERFLOW: &str = "mobile-overflow";
    pub const MOBILE_VIEW: &str = "wm-table-mobile-view";
    pub const DUAL_TITLE: &str = "dual-title";
    pub const DESKTOP_SELECT: &str = "desktop-select";

    pub const STACK_VIEW: &str = "wm-table-stack-view";
    pub const STACK_CARD: &str = "wm-table-stack-card";
    pub const STACK_ROW: &str = "wm-table-stack-row";
    pub const STACK_TITLE: &str = "wm-table-stack-title";
    pub const STACK_VALUE: &str = "wm-table-stack-value";

    pub const SELECT_VIEW: &str = "wm-table-select-view";
    pub const SELECT_NAVIGATION_CONTAINER: &str = "select-navigation-container";
    pub const SELECT_NAVIGATION: &str = "select-navigation";
    pub const SELECT_BUTTON_CONTAINER: &str = "select-button-container";
    pub const SELECT_BUTTON: &str = "select-button";
    pub const SELECT_BUTTON_TEXT: &str = "select-button-text";
    pub const SELECT_ITEMS_CONTAINER: &str = "select-items-container";
    pub const SELECT_ITEMS_WRAPPER: &str = "select-items-wrapper";
    pub const SELECT_ITEM: &str = "select-item";
    pub const RESULTS_CONTAINER: &str = "results-container";
    pub const DATA_CARD: &str = "data-card";
    pub const CARD_ROW: &str = "card-row";
    pub const CARD_LABEL: &str = "card-label";
    pub const CARD_VALUE: &str = "card-value";

    pub const PAGINATION: &str = "wm-table-pagination";
    pub const PAGINATION_CONTROLS: &str = "pagination-controls";
    pub const PAGINATION_BUTTON: &str = "pagination-btn";
    pub const PREV_BUTTON: &str = "prev-btn";
    pub const NEXT_BUTTON: &str = "next-btn";
    pub const PAGE_NUMBERS: &str = "page-numbers";
    pub const PAGE_NUMBER: &str = "page-number";

    pub const OPEN: &str = "open";
    pub const SELECTED: &str = "selected";
    pub const ACTIVE: &str = "active";
}

/// Chevron shown on the select button
pub const SELECT_ICON_SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" fill="none" viewBox="0 0 24 24" stroke-width="1.5" stroke="currentColor" class="select-icon"><path stroke-linecap="round" stroke-linejoin="round" d="m19.5 8.25-7.5 7.5-7.5-7.5" /></svg>"#;

/// Look up a layout by name
pub fn lookup_layout(name: &str) -> Option<Layout> {
    LAYOUT_NAMES.get(name.trim().to_ascii_lowercase().as_str()).copied()
}

/// Look up a mobile layout by name; a blank name disables the mobile view
pub fn lookup_mobile_layout(name: &str) -> Option<MobileLayout> {
    let name = name.trim().to_ascii_lowercase();
    if name.is_empty() {
        return Some(MobileLayout::None);
    }
    MOBILE_LAYOUT_NAMES.get(name.as_str()).copied()
}
