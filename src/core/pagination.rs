//! Pagination controller
//!
//! Owns the current page and, on every change, rebuilds the navigation strip
//! from scratch and re-applies the visibility window to whatever units the
//! active layouts handed over. Data is never re-parsed.

use std::ops::Range;

use log::debug;

use super::tree::Element;
use crate::data::names::classes;
use crate::utils::error::{TableError, TableResult};

const PREV_LABEL: &str = "←";
const NEXT_LABEL: &str = "→";

/// Current page (1-based) and page count
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationState {
    pub current_page: usize,
    pub total_pages: usize,
}

/// Page bookkeeping for one table
#[derive(Debug, Clone)]
pub struct PaginationController {
    state: PaginationState,
    items_per_page: usize,
}

impl PaginationController {
    /// Start on page 1
    pub fn new(row_count: usize, items_per_page: usize) -> Self {
        let items_per_page = items_per_page.max(1);
        PaginationController {
            state: PaginationState {
                current_page: 1,
                total_pages: Self::compute_total_pages(row_count, items_per_page),
            },
            items_per_page,
        }
    }

    /// `ceil(row_count / items_per_page)`
    pub fn compute_total_pages(row_count: usize, items_per_page: usize) -> usize {
        row_count.div_ceil(items_per_page.max(1))
    }

    pub fn state(&self) -> PaginationState {
        self.state
    }

    pub fn current_page(&self) -> usize {
        self.state.current_page
    }

    pub fn total_pages(&self) -> usize {
        self.state.total_pages
    }

    pub fn items_per_page(&self) -> usize {
        self.items_per_page
    }

    /// Controls are only shown when there is more than one page
    pub fn has_controls(&self) -> bool {
        self.state.total_pages > 1
    }

    /// Index window `[start, end)` of the current page
    pub fn window(&self) -> Range<usize> {
        let start = (self.state.current_page - 1) * self.items_per_page;
        start..start + self.items_per_page
    }

    /// Move to page `page`, rejecting anything outside `1..=total_pages`
    pub fn change_page(&mut self, page: usize) -> TableResult<()> {
        if page == 0 || page > self.state.total_pages {
            return Err(TableError::page_out_of_range(page, self.state.total_pages));
        }
        debug!(
            "pagination: page {} -> {} of {}",
            self.state.current_page, page, self.state.total_pages
        );
        self.state.current_page = page;
        Ok(())
    }

    /// Rebuild the navigation strip inside `strip` and apply visibility
    pub fn update(&self, strip: &mut Element, groups: Vec<Vec<&mut Element>>) {
        strip.clear();

        if !self.has_controls() {
            for group in groups {
                for el in group {
                    el.set_visible(true);
                }
            }
            return;
        }

        strip.push(self.render());
        self.apply_visibility(groups);
    }

    /// The navigation controls for the current page
    pub fn render(&self) -> Element {
        let PaginationState {
            current_page,
            total_pages,
        } = self.state;

        let mut prev = Element::new("button")
            .with_class(classes::PAGINATION_BUTTON)
            .with_class(classes::PREV_BUTTON)
            .with_text(PREV_LABEL);
        if current_page == 1 {
            prev.set_attr("disabled", "");
        } else {
            prev.set_attr("data-page", (current_page - 1).to_string());
        }

        let mut numbers = Element::new("div").with_class(classes::PAGE_NUMBERS);
        for page in 1..=total_pages {
            let mut button = Element::new("button")
                .with_class(classes::PAGE_NUMBER)
                .with_attr("data-page", page.to_string())
                .with_text(page.to_string());
            if page == current_page {
                button.add_class(classes::ACTIVE);
            }
            numbers.push(button);
        }

        let mut next = Element::new("button")
            .with_class(classes::PAGINATION_BUTTON)
            .with_class(classes::NEXT_BUTTON)
            .with_text(NEXT_LABEL);
        if current_page == total_pages {
            next.set_attr("disabled", "");
        } else {
            next.set_attr("data-page", (current_page + 1).to_string());
        }

        Element::new("div")
            .with_class(classes::PAGINATION_CONTROLS)
            .with_child(prev)
            .with_child(numbers)
            .with_child(next)
    }

    /// Show the elements of each group whose index falls in the window
    pub fn apply_visibility(&self, groups: Vec<Vec<&mut Element>>) {
        let window = self.window();
        for group in groups {
            for (index, el) in group.into_iter().enumerate() {
                el.set_visible(window.contains(&index));
            }
        }
    }
}
