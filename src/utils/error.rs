//! Error handling for simpletable
//!
//! Rendering itself never fails: missing data degrades to an empty table.
//! Errors only surface from explicit requests (page changes, settings files,
//! I/O), while recoverable problems are reported as [`TableWarning`]s.

use std::fmt;

/// Table error type
#[derive(Debug, Clone, PartialEq)]
pub enum TableError {
    /// A page outside `1..=total_pages` was requested
    PageOutOfRange { requested: usize, total_pages: usize },
    /// Pagination is not enabled for this table
    PaginationDisabled,
    /// The select view is not part of this table
    SelectUnavailable,
    /// A select item that is not among the dropdown options
    UnknownSelectValue { value: String },
    /// Settings could not be read
    Settings { message: String },
    /// IO error (for file operations)
    Io { message: String },
}

impl fmt::Display for TableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableError::PageOutOfRange {
                requested,
                total_pages,
            } => {
                if *total_pages == 0 {
                    write!(f, "Page {} requested but the table has no pages", requested)
                } else {
                    write!(
                        f,
                        "Page {} is out of range (expected 1..={})",
                        requested, total_pages
                    )
                }
            }
            TableError::PaginationDisabled => write!(f, "Pagination is not enabled"),
            TableError::SelectUnavailable => write!(f, "Table has no select view"),
            TableError::UnknownSelectValue { value } => {
                write!(f, "No select item with value '{}'", value)
            }
            TableError::Settings { message } => write!(f, "Settings error: {}", message),
            TableError::Io { message } => write!(f, "IO error: {}", message),
        }
    }
}

impl std::error::Error for TableError {}

impl From<std::io::Error> for TableError {
    fn from(err: std::io::Error) -> Self {
        TableError::Io {
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for TableError {
    fn from(err: serde_json::Error) -> Self {
        TableError::Settings {
            message: err.to_string(),
        }
    }
}

/// Result type for table operations
pub type TableResult<T> = Result<T, TableError>;

impl TableError {
    pub fn settings(message: impl Into<String>) -> Self {
        TableError::Settings {
            message: message.into(),
        }
    }

    pub fn page_out_of_range(requested: usize, total_pages: usize) -> Self {
        TableError::PageOutOfRange {
            requested,
            total_pages,
        }
    }
}

/// Non-fatal issue found while resolving settings or rendering
#[derive(Debug, Clone, PartialEq)]
pub struct TableWarning {
    /// Settings key (or other subject) the warning is about
    pub key: Option<String>,
    pub message: String,
}

impl TableWarning {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            key: None,
            message: message.into(),
        }
    }

    pub fn for_key(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            key: Some(key.into()),
            message: message.into(),
        }
    }
}

impl fmt::Display for TableWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.key {
            Some(ref key) => write!(f, "Warning [{}]: {}", key, self.message),
            None => write!(f, "Warning: {}", self.message),
        }
    }
}

/// Rendered output with the warnings collected while producing it
#[derive(Debug, Clone)]
pub struct RenderOutput {
    /// The rendered HTML
    pub html: String,
    /// Number of tables rendered
    pub tables: usize,
    /// Any warnings generated during rendering
    pub warnings: Vec<TableWarning>,
}

impl RenderOutput {
    pub fn new(html: String, tables: usize) -> Self {
        Self {
            html,
            tables,
            warnings: Vec::new(),
        }
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_out_of_range_display() {
        let err = TableError::page_out_of_range(4, 3);
        let msg = err.to_string();
        assert!(msg.contains("Page 4"));
        assert!(msg.contains("1..=3"));
    }

    #[test]
    fn test_page_out_of_range_without_pages() {
        let err = TableError::page_out_of_range(1, 0);
        assert!(err.to_string().contains("no pages"));
    }

    #[test]
    fn test_settings_error_from_json() {
        let err: TableError = serde_json::from_str::<serde_json::Value>("{")
            .unwrap_err()
            .into();
        assert!(matches!(err, TableError::Settings { .. }));
    }

    #[test]
    fn test_warning_display() {
        let warning = TableWarning::for_key("layout", "unknown layout 'diagonal'");
        assert_eq!(
            warning.to_string(),
            "Warning [layout]: unknown layout 'diagonal'"
        );
        assert_eq!(TableWarning::new("x").to_string(), "Warning: x");
    }

    #[test]
    fn test_render_output() {
        let mut output = RenderOutput::new("<div></div>".to_string(), 1);
        assert!(!output.has_warnings());
        output.warnings.push(TableWarning::new("w"));
        assert!(output.has_warnings());
    }
}
