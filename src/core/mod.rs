//! Core table modules
//!
//! The pipeline from source markup to a live widget:
//! - `source`: extraction of the header, rows and `data-*` attributes
//! - `content` and `model`: inline link parsing and the parsed table data
//! - `settings`: layered configuration
//! - `layout` and `pagination`: the visual tree builders and page windowing
//! - `widget`: assembly, lifecycle signals and interaction

pub mod content;
pub mod layout;
pub mod model;
pub mod pagination;
pub mod settings;
pub mod source;
pub mod tree;
pub mod widget;

pub use content::{parse_inline, ContentNode};
pub use layout::{
    mobile_builder, primary_builder, LayoutBuilder, LayoutKind, SelectView, SelectViewState,
};
pub use model::{parse_table_data, Cell, Row, TableData};
pub use pagination::{PaginationController, PaginationState};
pub use settings::{Layout, LayoutSettings, MobileLayout, ResolvedSettings};
pub use source::SourceBlock;
pub use tree::{Element, Node};
pub use widget::{
    LifecycleEvent, LifecycleListener, LoadingState, NoopListener, SimpleTable, TableEvent,
};
