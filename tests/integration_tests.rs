//! Integration tests for SimpleTable rendering and interaction

use serde_json::json;
use simpletable::core::Element;
use simpletable::names::classes;
use simpletable::{
    parse_table, render_document, render_table, ContentNode, Layout, LayoutSettings,
    MobileLayout, SimpleTable, SourceBlock, TableError, TableEvent,
};

fn block(attrs: &str, header: &str, rows: &[&str]) -> String {
    let mut markup = format!("<SimpleTable{}><TableHeaders>{}</TableHeaders>", attrs, header);
    for row in rows {
        markup.push_str(&format!("<TableRow>{}</TableRow>", row));
    }
    markup.push_str("</SimpleTable>");
    markup
}

fn visible_texts(elements: &[&Element]) -> Vec<String> {
    elements
        .iter()
        .filter(|el| el.is_visible())
        .map(|el| el.text_content())
        .collect()
}

// ============================================================================
// Parsing
// ============================================================================

mod parsing {
    use super::*;

    #[test]
    fn test_markup_to_data() {
        let data = parse_table(&block(
            "",
            "Name | Site",
            &[r#"Acme | Home [href="https://acme.test"]"#, "Bolt | none"],
        ));
        assert_eq!(data.titles, vec!["Name", "Site"]);
        assert_eq!(data.rows.len(), 2);

        let site = data.rows[0].get("Site").unwrap();
        assert_eq!(site.text, r#"Home [href="https://acme.test"]"#);
        assert_eq!(
            site.content,
            ContentNode::Link {
                href: "https://acme.test".to_string(),
                label: "Home".to_string(),
            }
        );
        assert_eq!(
            data.rows[1].get("Site").unwrap().content,
            ContentNode::PlainText("none".to_string())
        );
    }

    #[test]
    fn test_round_trip_field_count() {
        let rows = ["a|b|c", "d|e|f", "g|h|i"];
        let data = parse_table(&block("", "X|Y|Z", &rows));
        for (row, line) in data.rows.iter().zip(rows) {
            let values: Vec<&str> = line.split('|').collect();
            assert_eq!(row.len(), 3);
            for (title, value) in data.titles.iter().zip(values) {
                assert_eq!(row.text(title), value);
            }
        }
    }

    #[test]
    fn test_missing_header_is_empty() {
        let data = parse_table("<SimpleTable><TableRow>1|2</TableRow></SimpleTable>");
        assert!(data.titles.is_empty());
        assert!(data.rows.iter().all(|row| row.is_empty()));
    }

    #[test]
    fn test_entities_decoded_and_escaped() {
        let out = render_table(&block("", "Q&amp;A", &["a &lt; b"]), &json!({}));
        assert!(out.html.contains("<th>Q&amp;A</th>"));
        assert!(out.html.contains("<td>a &lt; b</td>"));
    }
}

// ============================================================================
// Layouts
// ============================================================================

mod layouts {
    use super::*;

    #[test]
    fn test_horizontal_is_default() {
        let out = render_table(&block("", "A|B", &["1|2"]), &json!({}));
        assert!(out.html.contains(
            "<table class=\"wm-table\"><tr><th>A</th><th>B</th></tr><tr><td>1</td><td>2</td></tr></table>"
        ));
    }

    #[test]
    fn test_vertical_from_attribute() {
        let out = render_table(&block(r#" data-layout="vertical""#, "A|B", &["1|2", "3|4"]), &json!({}));
        assert!(out.html.contains("<tr><th>A</th><td>1</td><td>3</td></tr>"));
        assert!(out.html.contains("<tr><th>B</th><td>2</td><td>4</td></tr>"));
    }

    #[test]
    fn test_stack_mobile_layout() {
        let out = render_table(
            &block(r#" data-mobile-layout="stack""#, "A|B", &["1|2", "3|4"]),
            &json!({}),
        );
        assert_eq!(out.html.matches("wm-table-stack-card").count(), 2);
        // the desktop grid is still built
        assert!(out.html.contains("<th>A</th>"));
    }

    #[test]
    fn test_mobile_none_builds_no_view_content() {
        let source = SourceBlock::new(Some("A"), &["1"]);
        let settings = LayoutSettings {
            mobile_layout: MobileLayout::None,
            ..Default::default()
        };
        let table = SimpleTable::new(&source, settings);
        assert!(table.mobile_view().children.is_empty());
    }

    #[test]
    fn test_links_in_every_layout() {
        let anchor = r#"<a href="https://x.io">Acme</a>"#;
        for (layout, mobile) in [
            ("horizontal", "stack"),
            ("vertical", "select"),
            ("select", "none"),
        ] {
            let out = render_table(
                &block("", "Site", &[r#"Acme [href="https://x.io"]"#]),
                &json!({ "layout": layout, "mobileLayout": mobile }),
            );
            assert!(out.html.contains(anchor), "{} / {}: {}", layout, mobile, out.html);
        }
    }

    #[test]
    fn test_invalid_setting_falls_back() {
        let out = render_table(&block(r#" data-layout="diagonal""#, "A", &["1"]), &json!({}));
        assert_eq!(out.warnings.len(), 1);
        assert!(out.html.contains("<tr><th>A</th></tr>"));
    }
}

// ============================================================================
// Pagination
// ============================================================================

mod pagination {
    use super::*;

    fn five_row_table() -> SimpleTable {
        let source = SourceBlock::new(Some("N"), &["r1", "r2", "r3", "r4", "r5"]);
        let settings = LayoutSettings {
            show_pagination: true,
            items_per_page: 2,
            ..Default::default()
        };
        SimpleTable::new(&source, settings)
    }

    fn visible_rows(table: &SimpleTable) -> Vec<String> {
        let rows = table.table_element().find_all_tag("tr");
        visible_texts(&rows[1..])
    }

    #[test]
    fn test_horizontal_scenario() {
        let mut table = five_row_table();
        let strip = table.pagination_element().unwrap();
        assert_eq!(strip.find_all_class(classes::PAGE_NUMBER).len(), 3);

        table.handle(TableEvent::Page(2)).unwrap();
        assert_eq!(visible_rows(&table), vec!["r3", "r4"]);

        table.handle(TableEvent::Page(3)).unwrap();
        assert_eq!(visible_rows(&table), vec!["r5"]);
        let next = table
            .pagination_element()
            .unwrap()
            .find_class(classes::NEXT_BUTTON)
            .unwrap();
        assert!(next.attr("disabled").is_some());
    }

    #[test]
    fn test_pages_cover_rows_once() {
        let mut table = five_row_table();
        let mut seen = Vec::new();
        for page in 1..=3 {
            table.change_page(page).unwrap();
            seen.extend(visible_rows(&table));
        }
        assert_eq!(seen, vec!["r1", "r2", "r3", "r4", "r5"]);
    }

    #[test]
    fn test_bounds_rejected() {
        let mut table = five_row_table();
        assert_eq!(
            table.change_page(0),
            Err(TableError::PageOutOfRange {
                requested: 0,
                total_pages: 3
            })
        );
        assert!(table.change_page(4).is_err());
        assert_eq!(table.pagination_state().unwrap().current_page, 1);
    }

    #[test]
    fn test_single_page_suppressed() {
        let out = render_table(
            &block(r#" data-show-pagination="true" data-items-per-page="10""#, "A", &["1", "2"]),
            &json!({}),
        );
        assert!(out.html.contains("<div class=\"wm-table-pagination\"></div>"));
        assert!(!out.html.contains("display: none"));
    }

    #[test]
    fn test_hidden_rows_serialize_hidden() {
        let table = five_row_table();
        let html = table.to_html();
        assert_eq!(html.matches(r#"<tr style="display: none">"#).count(), 3);
    }

    #[test]
    fn test_no_pagination_with_select_layout() {
        let out = render_table(
            &block(r#" data-layout="select" data-show-pagination="true""#, "A", &["1", "2"]),
            &json!({ "itemsPerPage": 1 }),
        );
        assert!(!out.html.contains("wm-table-pagination"));
        assert!(out.html.contains("desktop-select"));
    }
}

// ============================================================================
// Select view
// ============================================================================

mod select_view {
    use super::*;

    fn people() -> SimpleTable {
        let source = SourceBlock::new(
            Some("Name|Status"),
            &["Alice|Active", "Bob|Inactive", "Alice|Inactive"],
        );
        let settings = LayoutSettings {
            layout: Layout::Select,
            ..Default::default()
        };
        SimpleTable::new(&source, settings)
    }

    #[test]
    fn test_scenario() {
        let mut table = people();
        let view = table.mobile_view();
        let items: Vec<String> = view
            .find_all_class(classes::SELECT_ITEM)
            .iter()
            .map(|item| item.text_content())
            .collect();
        assert_eq!(items, vec!["Alice", "Bob"]);
        assert_eq!(
            view.find_class(classes::SELECT_BUTTON_TEXT).unwrap().text_content(),
            "Name: Alice"
        );
        let values: Vec<String> = view
            .find_all_class(classes::CARD_VALUE)
            .iter()
            .map(|value| value.text_content())
            .collect();
        assert_eq!(values, vec!["Alice", "Active"]);

        table.handle(TableEvent::ToggleSelect).unwrap();
        table.handle(TableEvent::ChooseItem("Bob".into())).unwrap();
        let values: Vec<String> = table
            .mobile_view()
            .find_all_class(classes::CARD_VALUE)
            .iter()
            .map(|value| value.text_content())
            .collect();
        assert_eq!(values, vec!["Bob", "Inactive"]);
    }

    #[test]
    fn test_unknown_value_rejected() {
        let mut table = people();
        let err = table.handle(TableEvent::ChooseItem("Carol".into())).unwrap_err();
        assert_eq!(
            err,
            TableError::UnknownSelectValue {
                value: "Carol".to_string()
            }
        );
        assert_eq!(
            table.select_state().unwrap().selected_value.as_deref(),
            Some("Alice")
        );
    }

    #[test]
    fn test_dual_title_label() {
        let out = render_table(
            &block(r#" data-mobile-layout="select" data-dual-title="true""#, "Name", &["Ann"]),
            &json!({}),
        );
        assert!(out.html.contains(r#"<span class="select-button-text">Ann</span>"#));
        assert!(out.html.contains("dual-title"));
    }
}

// ============================================================================
// Lifecycle and embedding
// ============================================================================

mod lifecycle {
    use super::*;
    use simpletable::{LifecycleEvent, LoadingState};

    #[test]
    fn test_events_bracket_build() {
        let mut events = Vec::new();
        let mut listener = |event: LifecycleEvent, state: LoadingState| {
            events.push(format!("{}:{:?}", event.name(), state))
        };
        SimpleTable::build(&SourceBlock::default(), LayoutSettings::default(), &mut listener);
        assert_eq!(
            events,
            vec![
                "wmSimpleTable:beforeInit:Building",
                "wmSimpleTable:afterInit:Built"
            ]
        );
    }

    #[test]
    fn test_empty_source_renders_shell() {
        let out = render_table("<SimpleTable></SimpleTable>", &json!({}));
        assert!(out.html.starts_with(r#"<div class="wm-simple-table simple-layout" data-wm-plugin="simple-table">"#));
        assert!(out.html.contains(r#"<table class="wm-table"><tr></tr></table>"#));
    }

    #[test]
    fn test_document_embedding() {
        let page = format!(
            "<h1>Teams</h1>{}<p>between</p>{}",
            block("", "A", &["1"]),
            block(r#" data-loading-state="built""#, "B", &["2"])
        );
        let out = render_document(&page, &json!({ "stylePreset": "bold" }));
        assert_eq!(out.tables, 1);
        assert_eq!(out.html.matches("bold-layout").count(), 1);
        assert!(out.html.starts_with("<h1>Teams</h1><SimpleTable data-loading-state=\"built\">"));
    }

    #[test]
    fn test_instances_are_isolated() {
        let source = SourceBlock::new(Some("N"), &["1", "2", "3"]);
        let settings = LayoutSettings {
            show_pagination: true,
            items_per_page: 1,
            ..Default::default()
        };
        let mut first = SimpleTable::new(&source, settings.clone());
        let second = SimpleTable::new(&source, settings);
        first.change_page(3).unwrap();
        assert_eq!(second.pagination_state().unwrap().current_page, 1);
    }
}
