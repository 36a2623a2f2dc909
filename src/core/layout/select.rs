//! Single-record picker
//!
//! A dropdown lists the distinct values of the first column; the detail card
//! shows the first record carrying the selected value. Later records that
//! share the value are never shown.
//!
//! ```text
//!   Closed --activate--> Open
//!   Open   --activate--> Closed
//!   Open   --choose----> Closed   (new value, card re-rendered)
//!   Open   --outside---> Closed   (value kept)
//! ```

use log::debug;

use super::{push_value, title_node, LayoutBuilder, LayoutKind, Surface};
use crate::core::model::TableData;
use crate::core::settings::LayoutSettings;
use crate::core::tree::{Element, Node};
use crate::data::names::{classes, SELECT_ICON_SVG};
use crate::utils::error::{TableError, TableResult};

#[derive(Debug, Clone, Copy, Default)]
pub struct SelectLayout;

impl LayoutBuilder for SelectLayout {
    fn kind(&self) -> LayoutKind {
        LayoutKind::Select
    }

    fn surface(&self) -> Surface {
        Surface::Mobile
    }

    fn build(&self, data: &TableData, settings: &LayoutSettings) -> Element {
        SelectView::new(data, settings).build(data)
    }

    /// One record at a time; nothing to paginate
    fn paginated_groups<'a>(&self, _surface: &'a mut Element) -> Vec<Vec<&'a mut Element>> {
        Vec::new()
    }
}

/// Dropdown state
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SelectViewState {
    /// Always one of the options; `None` only when there are no options
    pub selected_value: Option<String>,
    pub is_open: bool,
}

/// Select view controller, owning the dropdown state
#[derive(Debug, Clone)]
pub struct SelectView {
    state: SelectViewState,
    options: Vec<String>,
    first_title: String,
    dual_title: bool,
}

impl SelectView {
    pub fn new(data: &TableData, settings: &LayoutSettings) -> Self {
        let options = data.distinct_first_values();
        SelectView {
            state: SelectViewState {
                selected_value: options.first().cloned(),
                is_open: false,
            },
            options,
            first_title: data.first_title().unwrap_or_default().to_string(),
            dual_title: settings.dual_title,
        }
    }

    pub fn state(&self) -> &SelectViewState {
        &self.state
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    pub fn is_open(&self) -> bool {
        self.state.is_open
    }

    pub fn selected_value(&self) -> Option<&str> {
        self.state.selected_value.as_deref()
    }

    /// Text shown on the dropdown button
    pub fn button_label(&self) -> String {
        let value = self.selected_value().unwrap_or_default();
        if self.dual_title {
            value.to_string()
        } else {
            format!("{}: {}", self.first_title, value)
        }
    }

    /// Build the view container in its initial state
    pub fn build(&self, data: &TableData) -> Element {
        let mut items = Element::new("div").with_class(classes::SELECT_ITEMS_WRAPPER);
        for value in &self.options {
            let mut item = Element::new("button")
                .with_class(classes::SELECT_ITEM)
                .with_attr("data-value", value.as_str())
                .with_text(value.as_str());
            if Some(value.as_str()) == self.selected_value() {
                item.add_class(classes::SELECTED);
            }
            items.push(item);
        }

        let button = Element::new("button")
            .with_class(classes::SELECT_BUTTON)
            .with_child(
                Element::new("span")
                    .with_class(classes::SELECT_BUTTON_TEXT)
                    .with_text(self.button_label()),
            )
            .with_child(Node::Raw(SELECT_ICON_SVG));

        let mut navigation = Element::new("div")
            .with_class(classes::SELECT_NAVIGATION)
            .with_child(
                Element::new("div")
                    .with_class(classes::SELECT_BUTTON_CONTAINER)
                    .with_child(button),
            )
            .with_child(
                Element::new("div")
                    .with_class(classes::SELECT_ITEMS_CONTAINER)
                    .with_child(items),
            );
        if self.state.is_open {
            navigation.add_class(classes::OPEN);
        }

        let mut results = Element::new("div").with_class(classes::RESULTS_CONTAINER);
        if let Some(card) = self.render_card(data) {
            results.push(card);
        }

        Element::new("div")
            .with_class(classes::MOBILE_VIEW)
            .with_class(classes::SELECT_VIEW)
            .with_child(
                Element::new("div")
                    .with_class(classes::SELECT_NAVIGATION_CONTAINER)
                    .with_child(navigation),
            )
            .with_child(results)
    }

    /// Detail card for the first record matching the selected value
    pub fn render_card(&self, data: &TableData) -> Option<Element> {
        let row = data.find_first(self.selected_value()?)?;
        let mut card = Element::new("div").with_class(classes::DATA_CARD);
        for title in &data.titles {
            let mut value = Element::new("div").with_class(classes::CARD_VALUE);
            push_value(&mut value, row, title);
            card.push(
                Element::new("div")
                    .with_class(classes::CARD_ROW)
                    .with_child(
                        Element::new("div")
                            .with_class(classes::CARD_LABEL)
                            .with_child(title_node(title)),
                    )
                    .with_child(value),
            );
        }
        Some(card)
    }

    /// The dropdown button was activated
    pub fn activate(&mut self, view: &mut Element) {
        self.state.is_open = !self.state.is_open;
        self.sync_open(view);
    }

    /// An interaction landed outside the control
    pub fn dismiss(&mut self, view: &mut Element) {
        if self.state.is_open {
            self.state.is_open = false;
            self.sync_open(view);
        }
    }

    /// An item was chosen
    pub fn choose(&mut self, view: &mut Element, data: &TableData, value: &str) -> TableResult<()> {
        if !self.options.iter().any(|option| option == value) {
            return Err(TableError::UnknownSelectValue {
                value: value.to_string(),
            });
        }
        debug!("select view: '{}' chosen", value);

        self.state.selected_value = Some(value.to_string());
        self.state.is_open = false;
        self.sync_open(view);

        let label = self.button_label();
        if let Some(text) = view.find_class_mut(classes::SELECT_BUTTON_TEXT) {
            text.clear();
            text.push(Node::Text(label));
        }

        if let Some(items) = view.find_class_mut(classes::SELECT_ITEMS_WRAPPER) {
            for item in items.elements_mut() {
                if item.attr("data-value") == Some(value) {
                    item.add_class(classes::SELECTED);
                } else {
                    item.remove_class(classes::SELECTED);
                }
            }
        }

        let card = self.render_card(data);
        if let Some(results) = view.find_class_mut(classes::RESULTS_CONTAINER) {
            results.clear();
            if let Some(card) = card {
                results.push(card);
            }
        }
        Ok(())
    }

    fn sync_open(&self, view: &mut Element) {
        if let Some(navigation) = view.find_class_mut(classes::SELECT_NAVIGATION) {
            if self.state.is_open {
                navigation.add_class(classes::OPEN);
            } else {
                navigation.remove_class(classes::OPEN);
            }
        }
    }
}
