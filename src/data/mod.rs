//! Data layer - Static name tables and constants

pub mod names;

pub use names::{
    lookup_layout, lookup_mobile_layout, AFTER_INIT_EVENT, BEFORE_INIT_EVENT, LAYOUT_NAMES,
    MOBILE_LAYOUT_NAMES,
};
