//! Python bindings for simpletable
//!
//! Settings cross the boundary as a JSON string; results come back as
//! `(html, warnings)` tuples.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use serde_json::Value;

fn parse_settings(settings: Option<&str>) -> PyResult<Value> {
    match settings {
        Some(json) => serde_json::from_str(json)
            .map_err(|e| PyValueError::new_err(format!("invalid settings JSON: {}", e))),
        None => Ok(Value::Null),
    }
}

fn into_tuple(output: simpletable::RenderOutput) -> (String, Vec<String>) {
    let warnings = output.warnings.iter().map(ToString::to_string).collect();
    (output.html, warnings)
}

/// Render the first `<SimpleTable>` block of `markup`
#[pyfunction]
#[pyo3(signature = (markup, settings=None))]
fn render_table(markup: &str, settings: Option<&str>) -> PyResult<(String, Vec<String>)> {
    let global = parse_settings(settings)?;
    Ok(into_tuple(simpletable::render_table(markup, &global)))
}

/// Render every `<SimpleTable>` block of a page in place
#[pyfunction]
#[pyo3(signature = (html, settings=None))]
fn render_document(html: &str, settings: Option<&str>) -> PyResult<(String, Vec<String>)> {
    let global = parse_settings(settings)?;
    Ok(into_tuple(simpletable::render_document(html, &global)))
}

/// Diagnostics for the first block, formatted for a terminal
#[pyfunction]
fn check_source(markup: &str) -> (bool, String) {
    let result = simpletable::diagnostics::check_source(markup);
    (
        result.has_errors(),
        simpletable::diagnostics::format_diagnostics(&result, false),
    )
}

#[pymodule]
fn _native(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(render_table, m)?)?;
    m.add_function(wrap_pyfunction!(render_document, m)?)?;
    m.add_function(wrap_pyfunction!(check_source, m)?)?;
    m.add("__version__", env!("CARGO_PKG_VERSION"))?;
    Ok(())
}
