//! Layout settings
//!
//! Settings are resolved once, before the table is built, from three trees
//! merged `defaults < global < instance`. Unknown or ill-typed values fall
//! back to their default and produce a [`TableWarning`].

use log::warn;
use serde::Serialize;
use serde_json::{json, Value};

use crate::data::names::{lookup_layout, lookup_mobile_layout};
use crate::utils::error::TableWarning;
use crate::utils::merge::merge_layers;

/// Primary (desktop) presentation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    #[default]
    Horizontal,
    Vertical,
    Select,
}

impl Layout {
    pub fn as_str(&self) -> &'static str {
        match self {
            Layout::Horizontal => "horizontal",
            Layout::Vertical => "vertical",
            Layout::Select => "select",
        }
    }
}

/// Secondary (narrow viewport) presentation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MobileLayout {
    /// Keep the grid and let it scroll sideways
    #[default]
    Overflow,
    Stack,
    Select,
    None,
}

impl MobileLayout {
    pub fn as_str(&self) -> &'static str {
        match self {
            MobileLayout::Overflow => "overflow",
            MobileLayout::Stack => "stack",
            MobileLayout::Select => "select",
            MobileLayout::None => "none",
        }
    }
}

/// Resolved, read-only settings for one table
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutSettings {
    pub layout: Layout,
    pub mobile_layout: MobileLayout,
    /// Rows per page, always at least 1
    pub items_per_page: usize,
    pub show_pagination: bool,
    /// Show only the value on the select button instead of `title: value`
    pub dual_title: bool,
    pub style_preset: String,
}

impl Default for LayoutSettings {
    fn default() -> Self {
        LayoutSettings {
            layout: Layout::Horizontal,
            mobile_layout: MobileLayout::Overflow,
            items_per_page: 12,
            show_pagination: false,
            dual_title: false,
            style_preset: "simple".to_string(),
        }
    }
}

/// Settings plus the warnings raised while reading them
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedSettings {
    pub settings: LayoutSettings,
    pub warnings: Vec<TableWarning>,
}

impl LayoutSettings {
    /// Default layer as a tree
    pub fn defaults_tree() -> Value {
        json!({
            "layout": "horizontal",
            "mobileLayout": "overflow",
            "itemsPerPage": 12,
            "showPagination": false,
            "dualTitle": false,
            "stylePreset": "simple",
        })
    }

    /// Merge `defaults < global < instance` and read the result
    pub fn resolve(global: &Value, instance: &Value) -> ResolvedSettings {
        let merged = merge_layers(&[&Self::defaults_tree(), global, instance]);
        Self::from_tree(&merged)
    }

    /// Read settings from a merged tree
    pub fn from_tree(tree: &Value) -> ResolvedSettings {
        let mut settings = LayoutSettings::default();
        let mut warnings = Vec::new();

        if let Some(value) = tree.get("layout") {
            match value.as_str().and_then(lookup_layout) {
                Some(layout) => settings.layout = layout,
                None => warnings.push(invalid("layout", value, settings.layout.as_str())),
            }
        }

        if let Some(value) = tree.get("mobileLayout") {
            match value.as_str().and_then(lookup_mobile_layout) {
                Some(mobile) => settings.mobile_layout = mobile,
                None => warnings.push(invalid(
                    "mobileLayout",
                    value,
                    settings.mobile_layout.as_str(),
                )),
            }
        }

        if let Some(value) = tree.get("itemsPerPage") {
            match read_page_size(value) {
                Some(size) => settings.items_per_page = size,
                None => warnings.push(invalid(
                    "itemsPerPage",
                    value,
                    &settings.items_per_page.to_string(),
                )),
            }
        }

        if let Some(value) = tree.get("showPagination") {
            match read_bool(value) {
                Some(flag) => settings.show_pagination = flag,
                None => warnings.push(invalid("showPagination", value, "false")),
            }
        }

        if let Some(value) = tree.get("dualTitle") {
            match read_bool(value) {
                Some(flag) => settings.dual_title = flag,
                None => warnings.push(invalid("dualTitle", value, "false")),
            }
        }

        if let Some(value) = tree.get("stylePreset") {
            match value {
                Value::String(preset) => settings.style_preset = preset.clone(),
                Value::Null => settings.style_preset = String::new(),
                other => warnings.push(invalid("stylePreset", other, &settings.style_preset)),
            }
        }

        for warning in &warnings {
            warn!("{}", warning);
        }

        ResolvedSettings {
            settings: settings.normalized(),
            warnings,
        }
    }

    /// Apply cross-field invariants: a desktop select view has no mobile variant
    pub fn normalized(mut self) -> Self {
        if self.layout == Layout::Select {
            self.mobile_layout = MobileLayout::None;
        }
        self.items_per_page = self.items_per_page.max(1);
        self
    }

    pub fn is_desktop_select(&self) -> bool {
        self.layout == Layout::Select
    }

    /// Settings tree for these values, usable as a merge layer
    pub fn to_tree(&self) -> Value {
        serde_json::to_value(self).unwrap_or(Value::Null)
    }
}

fn invalid(key: &str, value: &Value, fallback: &str) -> TableWarning {
    TableWarning::for_key(
        key,
        format!("invalid value {}, using '{}'", value, fallback),
    )
}

fn read_bool(value: &Value) -> Option<bool> {
    match value {
        Value::Bool(flag) => Some(*flag),
        Value::String(s) if s == "true" => Some(true),
        Value::String(s) if s == "false" => Some(false),
        _ => None,
    }
}

fn read_page_size(value: &Value) -> Option<usize> {
    let size = match value {
        Value::Number(n) => match n.as_u64() {
            Some(u) => usize::try_from(u).ok()?,
            None => {
                let f = n.as_f64()?.floor();
                if f < 1.0 || f >= usize::MAX as f64 {
                    return None;
                }
                f as usize
            }
        },
        Value::String(s) => s.trim().parse::<usize>().ok()?,
        _ => return None,
    };
    (size > 0).then_some(size)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults() {
        let resolved = LayoutSettings::resolve(&json!({}), &json!({}));
        assert_eq!(resolved.settings, LayoutSettings::default());
        assert!(resolved.warnings.is_empty());
    }

    #[test]
    fn test_instance_overrides_global() {
        let global = json!({"layout": "vertical", "itemsPerPage": 4});
        let instance = json!({"layout": "horizontal", "showPagination": true});
        let settings = LayoutSettings::resolve(&global, &instance).settings;
        assert_eq!(settings.layout, Layout::Horizontal);
        assert_eq!(settings.items_per_page, 4);
        assert!(settings.show_pagination);
    }

    #[test]
    fn test_select_forces_no_mobile_layout() {
        let settings =
            LayoutSettings::resolve(&json!({}), &json!({"layout": "select", "mobileLayout": "stack"}))
                .settings;
        assert_eq!(settings.layout, Layout::Select);
        assert_eq!(settings.mobile_layout, MobileLayout::None);
        assert!(settings.is_desktop_select());
    }

    #[test]
    fn test_invalid_values_fall_back_with_warnings() {
        let resolved = LayoutSettings::resolve(
            &json!({}),
            &json!({"layout": "diagonal", "itemsPerPage": 0, "dualTitle": "maybe"}),
        );
        assert_eq!(resolved.settings.layout, Layout::Horizontal);
        assert_eq!(resolved.settings.items_per_page, 12);
        assert!(!resolved.settings.dual_title);
        assert_eq!(resolved.warnings.len(), 3);
        assert_eq!(resolved.warnings[0].key.as_deref(), Some("layout"));
    }

    #[test]
    fn test_page_size_forms() {
        assert_eq!(read_page_size(&json!(5)), Some(5));
        assert_eq!(read_page_size(&json!(2.7)), Some(2));
        assert_eq!(read_page_size(&json!("8")), Some(8));
        assert_eq!(read_page_size(&json!(-1)), None);
        assert_eq!(read_page_size(&json!(0.5)), None);
    }

    #[test]
    fn test_page_size_never_wraps() {
        let big = 4_294_967_297u64;
        assert_eq!(read_page_size(&json!(big)), usize::try_from(big).ok());
        assert_eq!(read_page_size(&json!(1e300)), None);
    }

    #[test]
    fn test_to_tree_round_trips() {
        let settings = LayoutSettings {
            layout: Layout::Vertical,
            mobile_layout: MobileLayout::Stack,
            items_per_page: 3,
            show_pagination: true,
            dual_title: true,
            style_preset: "bold".to_string(),
        };
        let resolved = LayoutSettings::from_tree(&settings.to_tree());
        assert_eq!(resolved.settings, settings);
        assert!(resolved.warnings.is_empty());
    }
}
