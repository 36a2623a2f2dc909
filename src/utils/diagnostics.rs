//! Source diagnostics
//!
//! Rendering never fails on bad input, it degrades: a missing header gives an
//! empty table, short rows give empty cells, malformed links stay text. This
//! module reports those cases up front so authors can fix the markup.
//!
//! ## Example
//!
//! ```rust
//! use simpletable::diagnostics::{check_source, DiagnosticLevel};
//!
//! let result = check_source("<SimpleTable><TableRow>a|b</TableRow></SimpleTable>");
//! assert!(result.has_errors());
//! assert_eq!(result.diagnostics[0].level, DiagnosticLevel::Error);
//! ```

use std::fmt;

use indexmap::IndexSet;

use crate::core::content::{mentions_link, parse_inline};
use crate::core::model::split_values;
use crate::core::source::SourceBlock;

/// Diagnostic severity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum DiagnosticLevel {
    /// Informational note
    Info,
    /// Warning - the table renders, but probably not as intended
    Warning,
    /// Error - the table renders empty
    Error,
}

impl fmt::Display for DiagnosticLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagnosticLevel::Info => write!(f, "info"),
            DiagnosticLevel::Warning => write!(f, "warning"),
            DiagnosticLevel::Error => write!(f, "error"),
        }
    }
}

/// A single diagnostic message
#[derive(Debug, Clone)]
pub struct Diagnostic {
    pub level: DiagnosticLevel,
    pub message: String,
    /// Row number (1-indexed), when the issue belongs to a row
    pub row: Option<usize>,
    /// Offending source text
    pub source_text: Option<String>,
    pub suggestion: Option<String>,
}

impl Diagnostic {
    pub fn new(level: DiagnosticLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            row: None,
            source_text: None,
            suggestion: None,
        }
    }

    pub fn with_row(mut self, row: usize) -> Self {
        self.row = Some(row);
        self
    }

    pub fn with_source(mut self, text: impl Into<String>) -> Self {
        self.source_text = Some(text.into());
        self
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.level, self.message)?;

        if let Some(row) = self.row {
            write!(f, "\n  --> row {}", row)?;
        }

        if let Some(ref source) = self.source_text {
            write!(f, "\n  |\n  | {}", source)?;
        }

        if let Some(ref suggestion) = self.suggestion {
            write!(f, "\n  = help: {}", suggestion)?;
        }

        Ok(())
    }
}

/// Check result with summary
#[derive(Debug, Default)]
pub struct CheckResult {
    pub diagnostics: Vec<Diagnostic>,
    pub errors: usize,
    pub warnings: usize,
    pub infos: usize,
}

impl CheckResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, diag: Diagnostic) {
        match diag.level {
            DiagnosticLevel::Error => self.errors += 1,
            DiagnosticLevel::Warning => self.warnings += 1,
            DiagnosticLevel::Info => self.infos += 1,
        }
        self.diagnostics.push(diag);
    }

    pub fn has_errors(&self) -> bool {
        self.errors > 0
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn summary(&self) -> String {
        let mut parts = Vec::new();
        if self.errors > 0 {
            parts.push(plural(self.errors, "error"));
        }
        if self.warnings > 0 {
            parts.push(plural(self.warnings, "warning"));
        }
        if self.infos > 0 {
            parts.push(plural(self.infos, "note"));
        }
        if parts.is_empty() {
            "no issues found".to_string()
        } else {
            parts.join(", ")
        }
    }
}

fn plural(count: usize, noun: &str) -> String {
    format!("{} {}{}", count, noun, if count == 1 { "" } else { "s" })
}

/// Check the first table block in `markup`
pub fn check_source(markup: &str) -> CheckResult {
    check_block(&SourceBlock::from_markup(markup))
}

/// Check an already extracted block
pub fn check_block(block: &SourceBlock) -> CheckResult {
    let mut result = CheckResult::new();

    let titles = match block.header {
        Some(ref header) => split_values(header),
        None => {
            result.add(
                Diagnostic::new(DiagnosticLevel::Error, "missing <TableHeaders> block")
                    .with_suggestion("Add a <TableHeaders> child with '|'-separated titles"),
            );
            Vec::new()
        }
    };

    check_duplicate_titles(&titles, &mut result);
    for title in &titles {
        check_link(title, None, &mut result);
    }

    if block.rows.is_empty() {
        result.add(Diagnostic::new(
            DiagnosticLevel::Warning,
            "no <TableRow> blocks; the table will be empty",
        ));
    }

    for (index, row) in block.rows.iter().enumerate() {
        let number = index + 1;
        let values = split_values(row);

        if block.header.is_some() && values.len() != titles.len() {
            let message = if values.len() < titles.len() {
                format!(
                    "row has {} values for {} titles; missing cells render empty",
                    values.len(),
                    titles.len()
                )
            } else {
                format!(
                    "row has {} values for {} titles; extra values are ignored",
                    values.len(),
                    titles.len()
                )
            };
            result.add(
                Diagnostic::new(DiagnosticLevel::Warning, message)
                    .with_row(number)
                    .with_source(row.trim()),
            );
        }

        for value in values {
            check_link(value, Some(number), &mut result);
        }
    }

    result
}

fn check_duplicate_titles(titles: &[&str], result: &mut CheckResult) {
    let mut seen = IndexSet::new();
    let mut reported = IndexSet::new();
    for title in titles {
        if !seen.insert(*title) && reported.insert(*title) {
            result.add(
                Diagnostic::new(
                    DiagnosticLevel::Warning,
                    format!("duplicate title '{}'; later values win", title),
                )
                .with_suggestion("Give every column a distinct title"),
            );
        }
    }
}

fn check_link(value: &str, row: Option<usize>, result: &mut CheckResult) {
    if !mentions_link(value) || parse_inline(value).is_link() {
        return;
    }
    let mut diag = Diagnostic::new(
        DiagnosticLevel::Info,
        "value mentions [href= but is not a link; it renders as text",
    )
    .with_source(value)
    .with_suggestion("Use the form: label [href=\"url\"] at the end of the value");
    if let Some(row) = row {
        diag = diag.with_row(row);
    }
    result.add(diag);
}

/// Format check results for terminal output
pub fn format_diagnostics(result: &CheckResult, use_color: bool) -> String {
    let mut output = String::new();

    for diag in &result.diagnostics {
        if use_color {
            let color = match diag.level {
                DiagnosticLevel::Error => "\x1b[31m",
                DiagnosticLevel::Warning => "\x1b[33m",
                DiagnosticLevel::Info => "\x1b[34m",
            };
            output.push_str(color);
            output.push_str(&format!("{}", diag));
            output.push_str("\x1b[0m\n\n");
        } else {
            output.push_str(&format!("{}\n\n", diag));
        }
    }

    if use_color {
        if result.has_errors() {
            output.push_str("\x1b[31m");
        } else if result.warnings > 0 {
            output.push_str("\x1b[33m");
        } else {
            output.push_str("\x1b[32m");
        }
    }

    output.push_str(&format!("Summary: {}", result.summary()));

    if use_color {
        output.push_str("\x1b[0m");
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    fn markup(header: Option<&str>, rows: &[&str]) -> String {
        let mut out = String::from("<SimpleTable>");
        if let Some(header) = header {
            out.push_str(&format!("<TableHeaders>{}</TableHeaders>", header));
        }
        for row in rows {
            out.push_str(&format!("<TableRow>{}</TableRow>", row));
        }
        out.push_str("</SimpleTable>");
        out
    }

    #[test]
    fn test_clean_source() {
        let result = check_source(&markup(Some("A|B"), &["1|2", "3|4"]));
        assert!(result.is_empty(), "{}", format_diagnostics(&result, false));
    }

    #[test]
    fn test_missing_header() {
        let result = check_source(&markup(None, &["1|2"]));
        assert!(result.has_errors());
        assert_eq!(result.warnings, 0);
    }

    #[test]
    fn test_no_rows() {
        let result = check_source(&markup(Some("A"), &[]));
        assert!(!result.has_errors());
        assert_eq!(result.warnings, 1);
    }

    #[test]
    fn test_row_width_mismatch() {
        let result = check_source(&markup(Some("A|B"), &["1", "1|2", "1|2|3"]));
        assert_eq!(result.warnings, 2);
        assert_eq!(result.diagnostics[0].row, Some(1));
        assert!(result.diagnostics[0].message.contains("render empty"));
        assert_eq!(result.diagnostics[1].row, Some(3));
        assert!(result.diagnostics[1].message.contains("ignored"));
    }

    #[test]
    fn test_duplicate_titles_reported_once() {
        let result = check_source(&markup(Some("A|B|A|A"), &["1|2|3|4"]));
        assert_eq!(result.warnings, 1);
        assert!(result.diagnostics[0].message.contains("'A'"));
    }

    #[test]
    fn test_malformed_link() {
        let result = check_source(&markup(
            Some("Site"),
            &[r#"Acme [href="https://x.io"]"#, r#"Broken [href=nowhere]"#],
        ));
        assert_eq!(result.infos, 1);
        assert_eq!(result.diagnostics[0].row, Some(2));
    }

    #[test]
    fn test_summary_format() {
        let mut result = CheckResult::new();
        result.add(Diagnostic::new(DiagnosticLevel::Error, "test"));
        result.add(Diagnostic::new(DiagnosticLevel::Warning, "test"));
        result.add(Diagnostic::new(DiagnosticLevel::Warning, "test"));

        assert_eq!(result.summary(), "1 error, 2 warnings");
        assert!(format_diagnostics(&result, false).ends_with("Summary: 1 error, 2 warnings"));
    }
}
