//! Layout builders
//!
//! Four strategies turn the same [`TableData`] into a visual tree:
//!
//! ```text
//! Layout::Horizontal   -> HorizontalLayout  (table, row per record)
//! Layout::Vertical     -> VerticalLayout    (table, row per title)
//! MobileLayout::Stack  -> StackLayout       (card per record)
//! *::Select            -> SelectLayout      (dropdown + one card)
//! ```
//!
//! Desktop and mobile selection are independent lookups into the same
//! registry. Each builder also names its own paginable units, so the
//! pagination controller never has to know which layout produced a tree.

mod horizontal;
mod select;
mod stack;
mod vertical;


pub use horizontal::HorizontalLayout;
pub use select::{SelectLayout, SelectView, SelectViewState};
pub use stack::StackLayout;
pub use vertical::VerticalLayout;

use super::content::parse_inline;
use super::model::{Row, TableData};
use super::settings::{Layout, LayoutSettings, MobileLayout};
use super::tree::{Element, Node};

/// Which builder produced a tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LayoutKind {
    Horizontal,
    Vertical,
    Stack,
    Select,
}

/// Where a builder's output is mounted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Surface {
    /// Replaces the `table.wm-table` element inside the table wrapper
    Table,
    /// Replaces the mobile view container
    Mobile,
}

/// A layout strategy
pub trait LayoutBuilder: Sync {
    fn kind(&self) -> LayoutKind;

    fn surface(&self) -> Surface;

    /// Build the tree for `data`
    fn build(&self, data: &TableData, settings: &LayoutSettings) -> Element;

    /// The elements pagination filters, grouped so that the page window is
    /// applied to each group by index independently
    fn paginated_groups<'a>(&self, surface: &'a mut Element) -> Vec<Vec<&'a mut Element>>;

    /// Extra class for the table wrapper when this layout is primary
    fn wrapper_class(&self) -> Option<&'static str> {
        None
    }
}

static HORIZONTAL: HorizontalLayout = HorizontalLayout;
static VERTICAL: VerticalLayout = VerticalLayout;
static STACK: StackLayout = StackLayout;
static SELECT: SelectLayout = SelectLayout;

/// Builder for the primary layout
pub fn primary_builder(layout: Layout) -> &'static dyn LayoutBuilder {
    match layout {
        Layout::Horizontal => &HORIZONTAL,
        Layout::Vertical => &VERTICAL,
        Layout::Select => &SELECT,
    }
}

/// Builder for the mobile layout; `overflow` and `none` build nothing
pub fn mobile_builder(mobile: MobileLayout) -> Option<&'static dyn LayoutBuilder> {
    match mobile {
        MobileLayout::Stack => Some(&STACK),
        MobileLayout::Select => Some(&SELECT),
        MobileLayout::Overflow | MobileLayout::None => None,
    }
}

/// Column title as presented in headers and labels
pub(crate) fn title_node(title: &str) -> Node {
    parse_inline(title).render()
}

/// Append the value of `title` to `el`; absent values leave it empty
pub(crate) fn push_value(el: &mut Element, row: &Row, title: &str) {
    if let Some(node) = row.render(title) {
        el.push(node);
    }
}
