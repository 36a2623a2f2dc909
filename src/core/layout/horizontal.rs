//! Row-major grid: a header row of titles, then one row per record

use super::{push_value, title_node, LayoutBuilder, LayoutKind, Surface};
use crate::core::model::TableData;
use crate::core::settings::LayoutSettings;
use crate::core::tree::Element;
use crate::data::names::classes;

#[derive(Debug, Clone, Copy, Default)]
pub struct HorizontalLayout;

impl LayoutBuilder for HorizontalLayout {
    fn kind(&self) -> LayoutKind {
        LayoutKind::Horizontal
    }

    fn surface(&self) -> Surface {
        Surface::Table
    }

    fn build(&self, data: &TableData, _settings: &LayoutSettings) -> Element {
        let mut table = Element::new("table").with_class(classes::TABLE);

        let mut header = Element::new("tr");
        for title in &data.titles {
            header.push(Element::new("th").with_child(title_node(title)));
        }
        table.push(header);

        for row in &data.rows {
            let mut tr = Element::new("tr");
            for title in &data.titles {
                let mut td = Element::new("td");
                push_value(&mut td, row, title);
                tr.push(td);
            }
            table.push(tr);
        }

        table
    }

    fn paginated_groups<'a>(&self, surface: &'a mut Element) -> Vec<Vec<&'a mut Element>> {
        // skip the header row
        vec![surface
            .elements_mut()
            .filter(|el| el.tag == "tr")
            .skip(1)
            .collect()]
    }
}
