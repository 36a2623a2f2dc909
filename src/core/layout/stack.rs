//! Stacked cards for narrow viewports

use super::{push_value, title_node, LayoutBuilder, LayoutKind, Surface};
use crate::core::model::TableData;
use crate::core::settings::LayoutSettings;
use crate::core::tree::Element;
use crate::data::names::classes;

#[derive(Debug, Clone, Copy, Default)]
pub struct StackLayout;

impl LayoutBuilder for StackLayout {
    fn kind(&self) -> LayoutKind {
        LayoutKind::Stack
    }

    fn surface(&self) -> Surface {
        Surface::Mobile
    }

    fn build(&self, data: &TableData, _settings: &LayoutSettings) -> Element {
        let mut view = Element::new("div")
            .with_class(classes::MOBILE_VIEW)
            .with_class(classes::STACK_VIEW);

        for row in &data.rows {
            let mut card = Element::new("div").with_class(classes::STACK_CARD);
            for title in &data.titles {
                let mut value = Element::new("div").with_class(classes::STACK_VALUE);
                push_value(&mut value, row, title);
                card.push(
                    Element::new("div")
                        .with_class(classes::STACK_ROW)
                        .with_child(
                            Element::new("div")
                                .with_class(classes::STACK_TITLE)
                                .with_child(title_node(title)),
                        )
                        .with_child(value),
                );
            }
            view.push(card);
        }

        view
    }

    fn paginated_groups<'a>(&self, surface: &'a mut Element) -> Vec<Vec<&'a mut Element>> {
        vec![surface
            .elements_mut()
            .filter(|el| el.has_class(classes::STACK_CARD))
            .collect()]
    }
}
