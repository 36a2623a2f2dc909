//! Table assembly and lifecycle
//!
//! ```text
//! beforeInit -> parse -> scaffold -> primary layout -> mobile layout
//!            -> pagination (page 1) -> afterInit
//! ```
//!
//! A built [`SimpleTable`] owns its settings, data and tree. Interaction is
//! delivered as [`TableEvent`]s, one at a time.

use log::debug;
use serde_json::Value;

use super::layout::{mobile_builder, primary_builder, LayoutBuilder, LayoutKind, SelectView, SelectViewState, Surface};
use super::model::TableData;
use super::pagination::{PaginationController, PaginationState};
use super::settings::{LayoutSettings, MobileLayout};
use super::source::SourceBlock;
use super::tree::Element;
use crate::data::names::{classes, AFTER_INIT_EVENT, BEFORE_INIT_EVENT, PLUGIN_ATTR_VALUE};
use crate::utils::error::{TableError, TableResult, TableWarning};
use crate::utils::merge::instance_tree;

/// Build progress of a table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadingState {
    Building,
    Built,
}

/// Lifecycle signals
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleEvent {
    /// Before the source is parsed
    BeforeInit,
    /// After the structure, including the first pagination pass, is built
    AfterInit,
}

impl LifecycleEvent {
    pub fn name(&self) -> &'static str {
        match self {
            LifecycleEvent::BeforeInit => BEFORE_INIT_EVENT,
            LifecycleEvent::AfterInit => AFTER_INIT_EVENT,
        }
    }
}

/// Observer of lifecycle signals
pub trait LifecycleListener {
    fn on_event(&mut self, event: LifecycleEvent, state: LoadingState);
}

impl<F: FnMut(LifecycleEvent, LoadingState)> LifecycleListener for F {
    fn on_event(&mut self, event: LifecycleEvent, state: LoadingState) {
        self(event, state)
    }
}

/// Listener that ignores every signal
pub struct NoopListener;

impl LifecycleListener for NoopListener {
    fn on_event(&mut self, _event: LifecycleEvent, _state: LoadingState) {}
}

/// User interaction with a built table
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableEvent {
    /// A numbered page button
    Page(usize),
    PreviousPage,
    NextPage,
    /// The select dropdown button
    ToggleSelect,
    /// A select item, by value
    ChooseItem(String),
    /// A click anywhere outside the select control
    OutsideClick,
}

/// One rendered table
pub struct SimpleTable {
    settings: LayoutSettings,
    data: TableData,
    loading_state: LoadingState,
    root: Element,
    wrapper: Element,
    table: Element,
    mobile_view: Element,
    pagination_strip: Option<Element>,
    primary: &'static dyn LayoutBuilder,
    mobile: Option<&'static dyn LayoutBuilder>,
    select: Option<SelectView>,
    pagination: Option<PaginationController>,
}

impl SimpleTable {
    /// Build without lifecycle observers
    pub fn new(source: &SourceBlock, settings: LayoutSettings) -> Self {
        Self::build(source, settings, &mut NoopListener)
    }

    /// Resolve settings from `defaults < global < data-* attributes`, then build
    pub fn from_source(source: &SourceBlock, global: &Value) -> (Self, Vec<TableWarning>) {
        let resolved = LayoutSettings::resolve(global, &instance_tree(&source.dataset));
        (Self::new(source, resolved.settings), resolved.warnings)
    }

    pub fn build(
        source: &SourceBlock,
        settings: LayoutSettings,
        listener: &mut dyn LifecycleListener,
    ) -> Self {
        let settings = settings.normalized();
        emit(listener, LifecycleEvent::BeforeInit, LoadingState::Building);

        let data = TableData::parse(source);

        let mut root = Element::new("div")
            .with_class(classes::PLUGIN)
            .with_attr("data-wm-plugin", PLUGIN_ATTR_VALUE);
        if settings.dual_title {
            root.add_class(classes::DUAL_TITLE);
        }
        if !settings.style_preset.is_empty() {
            root.add_class(&format!("{}-layout", settings.style_preset));
        }

        let mut wrapper = Element::new("div").with_class(classes::TABLE_WRAPPER);
        let mut table = Element::new("table").with_class(classes::TABLE);
        let mut mobile_view = Element::new("div").with_class(classes::MOBILE_VIEW);

        let primary = primary_builder(settings.layout);
        debug!("building {:?} layout", primary.kind());
        mount(primary, &data, &settings, &mut table, &mut mobile_view);
        if let Some(class) = primary.wrapper_class() {
            wrapper.add_class(class);
        }
        if settings.is_desktop_select() {
            root.add_class(classes::DESKTOP_SELECT);
        }

        let mobile = mobile_builder(settings.mobile_layout);
        match mobile {
            Some(builder) => {
                debug!("building {:?} mobile layout", builder.kind());
                mount(builder, &data, &settings, &mut table, &mut mobile_view);
            }
            None if settings.mobile_layout == MobileLayout::Overflow => {
                wrapper.add_class(classes::MOBILE_OVERFLOW);
            }
            None => {}
        }

        let uses_select = primary.kind() == LayoutKind::Select
            || mobile.map(|builder| builder.kind()) == Some(LayoutKind::Select);
        let select = uses_select.then(|| SelectView::new(&data, &settings));

        let (pagination, pagination_strip) = if settings.show_pagination && !settings.is_desktop_select() {
            (
                Some(PaginationController::new(data.rows.len(), settings.items_per_page)),
                Some(Element::new("div").with_class(classes::PAGINATION)),
            )
        } else {
            (None, None)
        };

        let mut widget = SimpleTable {
            settings,
            data,
            loading_state: LoadingState::Building,
            root,
            wrapper,
            table,
            mobile_view,
            pagination_strip,
            primary,
            mobile,
            select,
            pagination,
        };
        widget.refresh_pagination();

        widget.loading_state = LoadingState::Built;
        emit(listener, LifecycleEvent::AfterInit, widget.loading_state);
        widget
    }

    /// Deliver one interaction
    pub fn handle(&mut self, event: TableEvent) -> TableResult<()> {
        match event {
            TableEvent::Page(page) => self.change_page(page),
            TableEvent::PreviousPage => {
                let current = self.pager()?.current_page();
                // the button is disabled on the first page
                if current > 1 {
                    self.change_page(current - 1)
                } else {
                    Ok(())
                }
            }
            TableEvent::NextPage => {
                let pager = self.pager()?;
                let current = pager.current_page();
                if current < pager.total_pages() {
                    self.change_page(current + 1)
                } else {
                    Ok(())
                }
            }
            TableEvent::ToggleSelect => {
                let select = self.select.as_mut().ok_or(TableError::SelectUnavailable)?;
                select.activate(&mut self.mobile_view);
                Ok(())
            }
            TableEvent::ChooseItem(value) => {
                let select = self.select.as_mut().ok_or(TableError::SelectUnavailable)?;
                select.choose(&mut self.mobile_view, &self.data, &value)
            }
            TableEvent::OutsideClick => {
                if let Some(select) = self.select.as_mut() {
                    select.dismiss(&mut self.mobile_view);
                }
                Ok(())
            }
        }
    }

    /// Go to `page`; out-of-range requests are rejected and change nothing
    pub fn change_page(&mut self, page: usize) -> TableResult<()> {
        self.pagination
            .as_mut()
            .ok_or(TableError::PaginationDisabled)?
            .change_page(page)?;
        self.refresh_pagination();
        Ok(())
    }

    fn pager(&self) -> TableResult<&PaginationController> {
        self.pagination.as_ref().ok_or(TableError::PaginationDisabled)
    }

    fn refresh_pagination(&mut self) {
        let (Some(pager), Some(strip)) = (self.pagination.as_ref(), self.pagination_strip.as_mut()) else {
            return;
        };

        let mut table_slot = Some(&mut self.table);
        let mut mobile_slot = Some(&mut self.mobile_view);
        let mut groups = Vec::new();
        for builder in [Some(self.primary), self.mobile].into_iter().flatten() {
            let slot = match builder.surface() {
                Surface::Table => table_slot.take(),
                Surface::Mobile => mobile_slot.take(),
            };
            if let Some(surface) = slot {
                groups.extend(builder.paginated_groups(surface));
            }
        }

        pager.update(strip, groups);
    }

    pub fn settings(&self) -> &LayoutSettings {
        &self.settings
    }

    pub fn data(&self) -> &TableData {
        &self.data
    }

    pub fn loading_state(&self) -> LoadingState {
        self.loading_state
    }

    pub fn pagination_state(&self) -> Option<PaginationState> {
        self.pagination.as_ref().map(PaginationController::state)
    }

    pub fn select_state(&self) -> Option<&SelectViewState> {
        self.select.as_ref().map(SelectView::state)
    }

    /// The `table.wm-table` element
    pub fn table_element(&self) -> &Element {
        &self.table
    }

    /// The mobile view container
    pub fn mobile_view(&self) -> &Element {
        &self.mobile_view
    }

    /// The pagination container, when pagination is enabled
    pub fn pagination_element(&self) -> Option<&Element> {
        self.pagination_strip.as_ref()
    }

    /// Assemble the full tree
    pub fn to_element(&self) -> Element {
        let mut root = self.root.clone();
        let mut wrapper = self.wrapper.clone();
        wrapper.push(self.table.clone());
        root.push(wrapper);
        root.push(self.mobile_view.clone());
        if let Some(ref strip) = self.pagination_strip {
            root.push(strip.clone());
        }
        root
    }

    pub fn to_html(&self) -> String {
        self.to_element().to_html()
    }
}

fn mount(
    builder: &dyn LayoutBuilder,
    data: &TableData,
    settings: &LayoutSettings,
    table: &mut Element,
    mobile_view: &mut Element,
) {
    let built = builder.build(data, settings);
    match builder.surface() {
        Surface::Table => *table = built,
        Surface::Mobile => *mobile_view = built,
    }
}

fn emit(listener: &mut dyn LifecycleListener, event: LifecycleEvent, state: LoadingState) {
    debug!("{} ({:?})", event.name(), state);
    listener.on_event(event, state);
}
