//! Source markup extraction
//!
//! Reads a `<SimpleTable>` block: the text of its `<TableHeaders>` child, the
//! text of each `<TableRow>` child in document order, and its `data-*`
//! attributes converted to dataset keys.

use indexmap::IndexMap;
use lazy_static::lazy_static;
use scraper::{ElementRef, Html, Selector};

lazy_static! {
    static ref TABLE_SELECTOR: Selector = Selector::parse("simpletable").unwrap();
    static ref HEADER_SELECTOR: Selector = Selector::parse("tableheaders").unwrap();
    static ref ROW_SELECTOR: Selector = Selector::parse("tablerow").unwrap();
}

/// Attribute used to mark blocks that were already rendered
pub const LOADING_STATE_KEY: &str = "loadingState";

/// Raw content of one source block
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SourceBlock {
    /// Text of the header block, if present
    pub header: Option<String>,
    /// Text of each row block, in source order
    pub rows: Vec<String>,
    /// `data-*` attributes keyed like a DOM dataset (`itemsPerPage`)
    pub dataset: IndexMap<String, String>,
}

impl SourceBlock {
    pub fn new(header: Option<&str>, rows: &[&str]) -> Self {
        SourceBlock {
            header: header.map(str::to_string),
            rows: rows.iter().map(|r| r.to_string()).collect(),
            dataset: IndexMap::new(),
        }
    }

    pub fn with_data(mut self, key: &str, value: &str) -> Self {
        self.dataset.insert(key.to_string(), value.to_string());
        self
    }

    /// Extract a block from markup
    ///
    /// The first `<SimpleTable>` element is used when present; otherwise the
    /// header and rows are searched for in the whole fragment.
    pub fn from_markup(markup: &str) -> Self {
        let fragment = Html::parse_fragment(markup);
        match fragment.select(&TABLE_SELECTOR).next() {
            Some(table) => Self::from_element(table),
            None => {
                let header = fragment
                    .select(&HEADER_SELECTOR)
                    .next()
                    .map(|el| el.text().collect::<String>());
                let rows = fragment
                    .select(&ROW_SELECTOR)
                    .map(|el| el.text().collect::<String>())
                    .collect();
                SourceBlock {
                    header,
                    rows,
                    dataset: IndexMap::new(),
                }
            }
        }
    }

    fn from_element(table: ElementRef<'_>) -> Self {
        let header = table
            .select(&HEADER_SELECTOR)
            .next()
            .map(|el| el.text().collect::<String>());
        let rows = table
            .select(&ROW_SELECTOR)
            .map(|el| el.text().collect::<String>())
            .collect();
        let dataset = table
            .value()
            .attrs()
            .filter_map(|(name, value)| dataset_key(name).map(|key| (key, value.to_string())))
            .collect();
        SourceBlock {
            header,
            rows,
            dataset,
        }
    }

    pub fn loading_state(&self) -> Option<&str> {
        self.dataset.get(LOADING_STATE_KEY).map(String::as_str)
    }
}

/// Convert a `data-foo-bar` attribute name into the dataset key `fooBar`
pub fn dataset_key(attr_name: &str) -> Option<String> {
    let rest = attr_name.strip_prefix("data-")?;
    let mut key = String::with_capacity(rest.len());
    let mut chars = rest.chars().peekable();
    while let Some(ch) = chars.next() {
        if ch == '-' {
            if let Some(next) = chars.peek().copied() {
                if next.is_ascii_lowercase() {
                    key.push(next.to_ascii_uppercase());
                    chars.next();
                    continue;
                }
            }
        }
        key.push(ch);
    }
    Some(key)
}
