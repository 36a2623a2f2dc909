//! Parsed table data
//!
//! Titles and rows are split on `|` and trimmed; every value is run through
//! the inline content parser once, here, and cloned wherever it is shown.

use indexmap::{IndexMap, IndexSet};
use serde::Serialize;

use super::content::{parse_inline, ContentNode};
use super::source::SourceBlock;
use super::tree::Node;

/// Delimiter between titles and between row values
pub const DELIMITER: char = '|';

/// One parsed value
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Cell {
    /// Trimmed source value, used as the grouping key by the select view
    pub text: String,
    /// Parsed presentation value
    pub content: ContentNode,
}

impl Cell {
    pub fn parse(text: &str) -> Self {
        Cell {
            text: text.to_string(),
            content: parse_inline(text),
        }
    }
}

/// A record: one entry per title, `None` when the source row was too short
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(transparent)]
pub struct Row {
    cells: IndexMap<String, Option<Cell>>,
}

impl Row {
    /// Zip delimited values against the titles by position
    pub fn zip(titles: &[String], values: &[&str]) -> Self {
        let mut cells = IndexMap::with_capacity(titles.len());
        for (index, title) in titles.iter().enumerate() {
            let cell = values.get(index).map(|value| Cell::parse(value));
            cells.insert(title.clone(), cell);
        }
        Row { cells }
    }

    pub fn get(&self, title: &str) -> Option<&Cell> {
        self.cells.get(title).and_then(Option::as_ref)
    }

    /// Grouping key for a column; absent cells count as empty text
    pub fn text(&self, title: &str) -> &str {
        self.get(title).map(|cell| cell.text.as_str()).unwrap_or("")
    }

    /// Render the value for `title`, empty content when absent
    pub fn render(&self, title: &str) -> Option<Node> {
        self.get(title).map(|cell| cell.content.render())
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// Column titles plus rows, in source order
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct TableData {
    pub titles: Vec<String>,
    pub rows: Vec<Row>,
}

impl TableData {
    pub fn parse(source: &SourceBlock) -> Self {
        let titles: Vec<String> = match source.header {
            Some(ref header) => split_values(header)
                .into_iter()
                .map(str::to_string)
                .collect(),
            None => Vec::new(),
        };

        let rows = source
            .rows
            .iter()
            .map(|row| Row::zip(&titles, &split_values(row)))
            .collect();

        TableData { titles, rows }
    }

    pub fn first_title(&self) -> Option<&str> {
        self.titles.first().map(String::as_str)
    }

    /// Distinct first-column values, ordered by first occurrence
    pub fn distinct_first_values(&self) -> Vec<String> {
        let Some(first) = self.first_title() else {
            return Vec::new();
        };
        let values: IndexSet<&str> = self.rows.iter().map(|row| row.text(first)).collect();
        values.into_iter().map(str::to_string).collect()
    }

    /// First row whose first-column text equals `value`
    pub fn find_first(&self, value: &str) -> Option<&Row> {
        let first = self.first_title()?;
        self.rows.iter().find(|row| row.text(first) == value)
    }

    pub fn is_empty(&self) -> bool {
        self.titles.is_empty() && self.rows.is_empty()
    }
}

/// Parse a source block into table data
pub fn parse_table_data(source: &SourceBlock) -> TableData {
    TableData::parse(source)
}

/// Split a delimited line and trim each piece
pub fn split_values(line: &str) -> Vec<&str> {
    line.split(DELIMITER).map(str::trim).collect()
}
