//! Utility modules
//!
//! - Source diagnostics and reporting
//! - Error, warning and output types
//! - Settings tree merging

pub mod diagnostics;
pub mod error;
pub mod merge;

pub use diagnostics::{check_source, format_diagnostics, CheckResult, Diagnostic, DiagnosticLevel};
pub use error::{RenderOutput, TableError, TableResult, TableWarning};
pub use merge::{deep_merge, merge_layers};
