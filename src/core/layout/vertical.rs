//! Transposed grid: one row per title, one trailing cell per record

use super::{push_value, title_node, LayoutBuilder, LayoutKind, Surface};
use crate::core::model::TableData;
use crate::core::settings::LayoutSettings;
use crate::core::tree::Element;
use crate::data::names::classes;

#[derive(Debug, Clone, Copy, Default)]
pub struct VerticalLayout;

impl LayoutBuilder for VerticalLayout {
    fn kind(&self) -> LayoutKind {
        LayoutKind::Vertical
    }

    fn surface(&self) -> Surface {
        Surface::Table
    }

    fn build(&self, data: &TableData, _settings: &LayoutSettings) -> Element {
        let mut table = Element::new("table").with_class(classes::TABLE);

        for title in &data.titles {
            let mut tr = Element::new("tr").with_child(Element::new("th").with_child(title_node(title)));
            for row in &data.rows {
                let mut td = Element::new("td");
                push_value(&mut td, row, title);
                tr.push(td);
            }
            table.push(tr);
        }

        table
    }

    /// Each title row is windowed on its own data cells, so a page shows the
    /// same slice of records in every row. The leading `th` is never hidden.
    fn paginated_groups<'a>(&self, surface: &'a mut Element) -> Vec<Vec<&'a mut Element>> {
        surface
            .elements_mut()
            .filter(|el| el.tag == "tr")
            .map(|row| row.elements_mut().filter(|cell| cell.tag == "td").collect())
            .collect()
    }

    fn wrapper_class(&self) -> Option<&'static str> {
        Some(classes::VERTICAL_VIEW)
    }
}
