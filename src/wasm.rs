//! WASM bindings for simpletable
//!
//! JavaScript-accessible rendering, diagnostics and an interactive table
//! handle that replays click handlers as [`TableEvent`]s.

#[cfg(feature = "wasm")]
use wasm_bindgen::prelude::*;

#[cfg(feature = "wasm")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "wasm")]
use serde_json::Value;

#[cfg(feature = "wasm")]
use crate::core::{SimpleTable, SourceBlock, TableEvent};
#[cfg(feature = "wasm")]
use crate::utils::error::{RenderOutput, TableResult, TableWarning};

/// Render result with additional metadata
#[cfg(feature = "wasm")]
#[derive(Serialize, Deserialize)]
pub struct RenderResult {
    /// The rendered markup
    pub html: String,
    /// Number of tables rendered
    pub tables: usize,
    /// Whether rendering was successful
    pub success: bool,
    /// Error message if rendering failed
    pub error: Option<String>,
    /// Settings warnings
    pub warnings: Vec<String>,
}

#[cfg(feature = "wasm")]
impl From<RenderOutput> for RenderResult {
    fn from(output: RenderOutput) -> Self {
        RenderResult {
            html: output.html,
            tables: output.tables,
            success: true,
            error: None,
            warnings: warning_messages(&output.warnings),
        }
    }
}

#[cfg(feature = "wasm")]
fn warning_messages(warnings: &[TableWarning]) -> Vec<String> {
    warnings.iter().map(ToString::to_string).collect()
}

/// Summary of source check results
#[cfg(feature = "wasm")]
#[derive(Serialize, Deserialize)]
pub struct CheckSummary {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    pub infos: Vec<String>,
    pub has_errors: bool,
}

/// Initialize panic hook for better error messages in browser console
#[cfg(feature = "wasm")]
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Read a settings object; `undefined` and `null` mean no settings
#[cfg(feature = "wasm")]
fn settings_from_js(settings: JsValue) -> Result<Value, JsValue> {
    if settings.is_undefined() || settings.is_null() {
        return Ok(Value::Null);
    }
    serde_wasm_bindgen::from_value(settings).map_err(|e| JsValue::from_str(&e.to_string()))
}

#[cfg(feature = "wasm")]
fn render_with(settings: JsValue, render: impl FnOnce(&Value) -> RenderOutput) -> JsValue {
    let result = match settings_from_js(settings) {
        Ok(global) => RenderResult::from(render(&global)),
        Err(e) => RenderResult {
            html: String::new(),
            tables: 0,
            success: false,
            error: Some(format!("Invalid settings: {}", e.as_string().unwrap_or_default())),
            warnings: vec![],
        },
    };
    serde_wasm_bindgen::to_value(&result).unwrap_or(JsValue::NULL)
}

/// Render one `<SimpleTable>` block
///
/// # Arguments
/// * `markup` - Source block markup
/// * `settings` - Global settings object (optional)
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "renderTable")]
pub fn render_table_wasm(markup: &str, settings: JsValue) -> JsValue {
    render_with(settings, |global| crate::render_table(markup, global))
}

/// Render every `<SimpleTable>` block of a page
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "renderDocument")]
pub fn render_document_wasm(html: &str, settings: JsValue) -> JsValue {
    render_with(settings, |global| crate::render_document(html, global))
}

/// Check source markup for potential issues
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "checkSource")]
pub fn check_source_wasm(markup: &str) -> JsValue {
    use crate::diagnostics::DiagnosticLevel;

    let result = crate::diagnostics::check_source(markup);

    let mut errors = Vec::new();
    let mut warnings = Vec::new();
    let mut infos = Vec::new();

    for d in &result.diagnostics {
        let message = match d.row {
            Some(row) => format!("row {}: {}", row, d.message),
            None => d.message.clone(),
        };
        match d.level {
            DiagnosticLevel::Error => errors.push(message),
            DiagnosticLevel::Warning => warnings.push(message),
            DiagnosticLevel::Info => infos.push(message),
        }
    }

    let summary = CheckSummary {
        errors,
        warnings,
        infos,
        has_errors: result.has_errors(),
    };
    serde_wasm_bindgen::to_value(&summary).unwrap_or(JsValue::NULL)
}

/// Get version information
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "getVersion")]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// A live table driven from JavaScript event handlers
#[cfg(feature = "wasm")]
#[wasm_bindgen]
pub struct WasmTable {
    inner: SimpleTable,
    warnings: Vec<String>,
}

#[cfg(feature = "wasm")]
impl WasmTable {
    fn from_markup(markup: &str, global: &Value) -> WasmTable {
        let (inner, warnings) = SimpleTable::from_source(&SourceBlock::from_markup(markup), global);
        WasmTable {
            inner,
            warnings: warning_messages(&warnings),
        }
    }
}

#[cfg(feature = "wasm")]
#[wasm_bindgen]
impl WasmTable {
    #[wasm_bindgen(constructor)]
    pub fn new(markup: &str, settings: JsValue) -> Result<WasmTable, JsValue> {
        let global = settings_from_js(settings)?;
        Ok(WasmTable::from_markup(markup, &global))
    }

    /// Settings warnings collected while building
    pub fn warnings(&self) -> Vec<String> {
        self.warnings.clone()
    }

    /// Current markup of the whole widget
    pub fn html(&self) -> String {
        self.inner.to_html()
    }

    #[wasm_bindgen(js_name = "currentPage")]
    pub fn current_page(&self) -> Option<usize> {
        self.inner.pagination_state().map(|state| state.current_page)
    }

    #[wasm_bindgen(js_name = "changePage")]
    pub fn change_page(&mut self, page: usize) -> Result<(), JsValue> {
        to_js(self.inner.handle(TableEvent::Page(page)))
    }

    pub fn next(&mut self) -> Result<(), JsValue> {
        to_js(self.inner.handle(TableEvent::NextPage))
    }

    pub fn previous(&mut self) -> Result<(), JsValue> {
        to_js(self.inner.handle(TableEvent::PreviousPage))
    }

    #[wasm_bindgen(js_name = "toggleSelect")]
    pub fn toggle_select(&mut self) -> Result<(), JsValue> {
        to_js(self.inner.handle(TableEvent::ToggleSelect))
    }

    #[wasm_bindgen(js_name = "chooseItem")]
    pub fn choose_item(&mut self, value: &str) -> Result<(), JsValue> {
        to_js(self.inner.handle(TableEvent::ChooseItem(value.to_string())))
    }

    #[wasm_bindgen(js_name = "outsideClick")]
    pub fn outside_click(&mut self) -> Result<(), JsValue> {
        to_js(self.inner.handle(TableEvent::OutsideClick))
    }
}

#[cfg(feature = "wasm")]
fn to_js(result: TableResult<()>) -> Result<(), JsValue> {
    result.map_err(|e| JsValue::from_str(&e.to_string()))
}

#[cfg(all(test, feature = "wasm"))]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_table_keeps_settings_warnings() {
        let markup = r#"<SimpleTable data-layout="diagonal"><TableHeaders>A</TableHeaders><TableRow>1</TableRow></SimpleTable>"#;
        let table = WasmTable::from_markup(markup, &json!({}));
        let warnings = table.warnings();
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("layout"));
        assert!(table.html().contains("wm-table"));
    }

    #[test]
    fn test_clean_table_has_no_warnings() {
        let markup = "<SimpleTable><TableHeaders>A</TableHeaders></SimpleTable>";
        assert!(WasmTable::from_markup(markup, &json!({})).warnings().is_empty());
    }
}
